pub mod logic;
pub mod types;

pub use logic::{process_input, tick_forest};
pub use types::{Cell, CellCounts, CellState, ForestGame, ForestResult};
