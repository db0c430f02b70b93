//! Forest Fire data structures and configuration.
//!
//! A grid game: fires ignite and spread across a 4×8 forest while the
//! player extinguishes burning cells with a cursor and an occasional
//! helicopter water drop.

use crate::achievements::SessionAchievements;
use crate::engine::{
    IntervalClock, MultiplierLaw, ScoringConfig, ScoringEngine, SessionConfig, SessionState,
};

pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 8;

pub const SESSION_MS: u64 = 60_000;

/// Ignition interval law: base, tightened per level, floored.
pub const IGNITION_BASE_MS: u64 = 3000;
pub const IGNITION_STEP_MS: u64 = 200;
pub const IGNITION_FLOOR_MS: u64 = 1000;

/// Spread step interval and per-neighbor chance per level.
pub const SPREAD_INTERVAL_MS: u64 = 2000;
pub const SPREAD_CHANCE_PER_LEVEL: f64 = 0.05;

/// A cell burning this long burns out.
pub const BURNOUT_MS: u64 = 5000;
pub const BURNOUT_PENALTY: i64 = 10;

/// A saved cell recovers to healthy after this long.
pub const SAVED_RECOVERY_MS: u64 = 1000;

pub const EXTINGUISH_POINTS: i64 = 20;
pub const HELICOPTER_POINTS_PER_CELL: i64 = 50;
pub const HELICOPTER_INITIAL_COOLDOWN_MS: u64 = 10_000;
pub const HELICOPTER_COOLDOWN_MS: u64 = 15_000;

pub const DANGER_MAX: u32 = 100;
pub const DANGER_PER_IGNITION: u32 = 5;
pub const DANGER_DROP_RELIEF: u32 = 30;

/// Fires extinguished per level step.
pub const LEVEL_THRESHOLD: u64 = 10;

/// Why a forest session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestResult {
    TimeUp,
    /// No healthy or burning cells left.
    BurntOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Healthy,
    Burning,
    /// Freshly extinguished, recovering toward healthy.
    Saved,
    /// Terminal.
    Burnt,
}

/// One forest cell. Timers only advance in the state they belong to.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub state: CellState,
    /// Time alight, toward [`BURNOUT_MS`].
    pub burning_ms: u64,
    /// Time since extinguished, toward [`SAVED_RECOVERY_MS`].
    pub saved_ms: u64,
}

impl Cell {
    pub fn healthy() -> Self {
        Self {
            state: CellState::Healthy,
            burning_ms: 0,
            saved_ms: 0,
        }
    }

    pub fn ignite(&mut self) {
        self.state = CellState::Burning;
        self.burning_ms = 0;
    }

    pub fn extinguish(&mut self) {
        self.state = CellState::Saved;
        self.saved_ms = 0;
    }
}

fn session_config() -> SessionConfig {
    SessionConfig::timed(SESSION_MS, IGNITION_BASE_MS, IGNITION_STEP_MS, IGNITION_FLOOR_MS)
}

fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        law: MultiplierLaw::Flat,
        // No streak mechanic in this game.
        idle_decay_ms: u64::MAX,
        level_threshold: LEVEL_THRESHOLD,
        achievement_bonus: 100,
    }
}

fn fresh_grid() -> Vec<Vec<Cell>> {
    vec![vec![Cell::healthy(); GRID_COLS]; GRID_ROWS]
}

/// Active Forest Fire game.
#[derive(Debug, Clone)]
pub struct ForestGame {
    pub session: SessionState,
    pub grid: Vec<Vec<Cell>>,
    /// Cursor position as (row, col).
    pub cursor: (usize, usize),
    pub ignition: IntervalClock,
    pub spread: IntervalClock,
    /// Time until the helicopter is available again.
    pub helicopter_cooldown_ms: u64,
    /// Fire danger meter, 0 to [`DANGER_MAX`].
    pub danger: u32,
    pub trees_saved: u64,
    pub scoring: ScoringEngine,
    pub achievements: SessionAchievements,
    pub outcome: Option<ForestResult>,
}

impl ForestGame {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(&session_config()),
            grid: fresh_grid(),
            cursor: (0, 0),
            ignition: IntervalClock::new(IGNITION_BASE_MS),
            spread: IntervalClock::new(SPREAD_INTERVAL_MS),
            helicopter_cooldown_ms: HELICOPTER_INITIAL_COOLDOWN_MS,
            danger: 0,
            trees_saved: 0,
            scoring: ScoringEngine::new(scoring_config()),
            achievements: SessionAchievements::new(),
            outcome: None,
        }
    }

    /// Fires extinguished this session. Drives level progression.
    pub fn fires_extinguished(&self) -> u64 {
        self.session.resource_collected
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.grid[row][col]
    }

    pub fn helicopter_ready(&self) -> bool {
        self.helicopter_cooldown_ms == 0
    }

    /// Counts of cells per state, for end detection and the UI.
    pub fn cell_counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for row in &self.grid {
            for cell in row {
                match cell.state {
                    CellState::Healthy => counts.healthy += 1,
                    CellState::Burning => counts.burning += 1,
                    CellState::Saved => counts.saved += 1,
                    CellState::Burnt => counts.burnt += 1,
                }
            }
        }
        counts
    }

    /// Full teardown back to pre-start defaults.
    pub fn reset(&mut self) {
        self.session.reset();
        self.grid = fresh_grid();
        self.cursor = (0, 0);
        self.ignition.reset();
        self.ignition.set_interval(IGNITION_BASE_MS);
        self.spread.reset();
        self.helicopter_cooldown_ms = HELICOPTER_INITIAL_COOLDOWN_MS;
        self.danger = 0;
        self.trees_saved = 0;
        self.scoring.reset();
        self.achievements = SessionAchievements::new();
        self.outcome = None;
    }

    /// Begin a fresh session. No-op if one is already running.
    pub fn start(&mut self) -> bool {
        if !self.session.start() {
            return false;
        }
        self.grid = fresh_grid();
        self.cursor = (0, 0);
        self.ignition.reset();
        self.ignition.set_interval(IGNITION_BASE_MS);
        self.spread.reset();
        self.helicopter_cooldown_ms = HELICOPTER_INITIAL_COOLDOWN_MS;
        self.danger = 0;
        self.trees_saved = 0;
        self.scoring.reset();
        self.achievements = SessionAchievements::new();
        self.outcome = None;
        true
    }
}

impl Default for ForestGame {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub healthy: u32,
    pub burning: u32,
    pub saved: u32,
    pub burnt: u32,
}
