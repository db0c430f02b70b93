//! Concrete mini-games: Ocean Cleanup (falling-item collection) and
//! Forest Fire (grid-based hazard spread).
//!
//! Each game owns its isolated engine state; switching games drops the
//! old value, which is a complete teardown because all timing lives in
//! plain accumulator fields.

pub mod forest;
pub mod ocean;

pub use forest::{ForestGame, ForestResult};
pub use ocean::OceanGame;

use crate::engine::SessionSummary;

/// UI-agnostic input actions shared by the mini-games. The terminal
/// host maps key events to these in main.rs; tests drive them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Move the collector / grid cursor.
    Left,
    Right,
    Up,
    Down,
    /// Act at the current position (extinguish the cursor cell).
    Primary,
    /// Trigger the game's special tool (helicopter water drop).
    Tool,
    Pause,
    Other,
}

/// The currently active mini-game. Only one session exists at a time.
#[derive(Debug, Clone)]
pub enum ActiveMinigame {
    Ocean(OceanGame),
    Forest(ForestGame),
}

impl ActiveMinigame {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActiveMinigame::Ocean(_) => "Ocean Cleanup",
            ActiveMinigame::Forest(_) => "Forest Fire",
        }
    }
}

/// A single event produced by a game tick.
///
/// The host maps these to message-feed lines and ledger credits; game
/// logic never touches UI types directly.
#[derive(Debug, Clone)]
pub enum GameEvent {
    // ── Continuous games ────────────────────────────────────────
    /// A collectible was caught.
    Collected {
        name: &'static str,
        points: i64,
        streak: u32,
    },
    /// A hazard or obstacle was caught.
    Penalty {
        name: &'static str,
        points: i64,
        life_lost: bool,
    },
    /// A hazard was caught but the shield absorbed it.
    Shielded { name: &'static str },
    /// A collectible fell past the collector.
    CollectibleMissed { life_lost: bool },
    /// A power-up was activated.
    PowerUp { name: &'static str },

    // ── Grid games ──────────────────────────────────────────────
    /// A burning cell was extinguished by a click.
    CellSaved { points: i64 },
    /// A burning cell burnt out.
    CellBurnt { penalty: i64 },
    /// The helicopter extinguished every burning cell.
    HelicopterDrop { extinguished: u32, points: i64 },

    // ── Shared ──────────────────────────────────────────────────
    /// The streak decayed after the idle window elapsed.
    StreakDecayed,
    LevelUp { level: u32 },
    AchievementUnlocked { name: &'static str, bonus: i64 },
    /// Terminal event; carries the session summary for the ledger.
    Ended(SessionSummary),
}
