//! Per-session achievements: monotonic unlock flags with a one-time
//! score bonus per unlock.

pub mod data;
pub mod types;

pub use data::{def_for, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, SessionAchievements};
