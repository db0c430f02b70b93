//! Shared mini-game engine: entities, spawning, motion, collision,
//! scoring, and the session state machine.
//!
//! Concrete games under `crate::games` supply only configuration (spawn
//! tables, field geometry, multiplier laws, thresholds) and per-game
//! rules; everything temporal and numeric lives here.

pub mod collision;
pub mod entity;
pub mod motion;
pub mod scoring;
pub mod session;
pub mod spawn;

pub use collision::{CollectorBox, MatchEvent};
pub use entity::{Entity, EntityId, EntityKind, EntityState, EntityValue};
pub use motion::FieldBounds;
pub use scoring::{MultiplierLaw, ScoringConfig, ScoringEngine};
pub use session::{
    IntervalClock, SessionConfig, SessionPhase, SessionState, SessionSummary, SCORE_PER_ECO_POINT,
};
pub use spawn::{interval_for_level, SpawnEntry, SpawnScheduler, SpawnTable};
