pub mod logic;
pub mod types;

pub use logic::{process_input, tick_ocean};
pub use types::OceanGame;
