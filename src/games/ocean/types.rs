//! Ocean Cleanup data structures and configuration.
//!
//! A falling-item collection game: trash, sea life, and power-ups drop
//! from the top of the field and the player steers a boat along the
//! bottom edge to catch trash while avoiding wildlife.

use crate::achievements::SessionAchievements;
use crate::engine::{
    CollectorBox, Entity, EntityKind, EntityValue, FieldBounds, MultiplierLaw, ScoringConfig,
    ScoringEngine, SessionConfig, SessionState, SpawnEntry, SpawnScheduler, SpawnTable,
};

/// Play field dimensions in cells.
pub const FIELD_WIDTH: f64 = 60.0;
pub const FIELD_HEIGHT: f64 = 18.0;

/// Boat geometry and movement.
pub const BOAT_WIDTH: f64 = 6.0;
pub const BOAT_ROW: f64 = FIELD_HEIGHT - 1.0;
pub const BOAT_STEP: f64 = 3.0;
pub const BOAT_BOOSTED_STEP: f64 = 6.0;

/// Session parameters.
pub const SESSION_MS: u64 = 60_000;
pub const STARTING_LIVES: u32 = 3;
pub const BASE_SPAWN_MS: u64 = 2000;
pub const SPAWN_STEP_MS: u64 = 200;
pub const SPAWN_FLOOR_MS: u64 = 1000;
pub const SPEED_STEP: f64 = 0.2;

/// Base fall speed in rows per motion tick (~8s top-to-bottom at level 1).
pub const BASE_FALL_SPEED: f64 = 0.12;

/// Trash pieces per level step.
pub const LEVEL_THRESHOLD: u64 = 20;

/// Streak decays after this long without a catch.
pub const STREAK_IDLE_MS: u64 = 3000;

/// Power-up effect durations.
pub const SPEED_BOOST_MS: u64 = 5000;
pub const SHIELD_MS: u64 = 8000;
pub const DOUBLE_POINTS_MS: u64 = 10_000;

pub fn field_bounds() -> FieldBounds {
    FieldBounds {
        width: FIELD_WIDTH,
        height: FIELD_HEIGHT,
    }
}

fn session_config() -> SessionConfig {
    SessionConfig::timed(SESSION_MS, BASE_SPAWN_MS, SPAWN_STEP_MS, SPAWN_FLOOR_MS)
        .with_lives(STARTING_LIVES)
        .with_speed_step(SPEED_STEP)
}

fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        law: MultiplierLaw::StreakStep { window: 5, cap: 3 },
        idle_decay_ms: STREAK_IDLE_MS,
        level_threshold: LEVEL_THRESHOLD,
        achievement_bonus: 100,
    }
}

fn collectible(subtype: &'static str, weight: f64, points: i64) -> SpawnEntry {
    SpawnEntry {
        kind: EntityKind::Collectible,
        subtype,
        weight,
        value: EntityValue {
            points,
            penalty: 0,
            resource: 1,
        },
        speed: 1.0,
    }
}

fn hazard(subtype: &'static str, weight: f64, penalty: i64) -> SpawnEntry {
    SpawnEntry {
        kind: EntityKind::Hazard,
        subtype,
        weight,
        value: EntityValue {
            points: 0,
            penalty,
            resource: 0,
        },
        speed: 1.0,
    }
}

fn powerup(subtype: &'static str, weight: f64) -> SpawnEntry {
    SpawnEntry {
        kind: EntityKind::Powerup,
        subtype,
        weight,
        value: EntityValue::default(),
        speed: 1.0,
    }
}

/// The full spawn table: 60% trash, 25% sea life, 15% power-ups.
pub fn spawn_table() -> SpawnTable {
    SpawnTable::new(vec![
        collectible("plastic_bottle", 0.10, 10),
        collectible("soda_cup", 0.10, 8),
        collectible("plastic_bag", 0.10, 12),
        collectible("food_container", 0.10, 6),
        collectible("metal_can", 0.10, 15),
        collectible("cardboard", 0.10, 5),
        hazard("fish", 0.05, 10),
        hazard("shark", 0.05, 20),
        hazard("octopus", 0.05, 15),
        hazard("turtle", 0.05, 25),
        hazard("crab", 0.05, 8),
        powerup("speed_boost", 0.0375),
        powerup("shield", 0.0375),
        powerup("double_points", 0.0375),
        powerup("extra_life", 0.0375),
    ])
}

/// Remaining duration of each timed power-up effect, frozen while the
/// session is paused (the tick simply doesn't run).
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveEffects {
    pub shield_ms: u64,
    pub double_points_ms: u64,
    pub speed_boost_ms: u64,
}

impl ActiveEffects {
    pub fn tick(&mut self, dt_ms: u64) {
        self.shield_ms = self.shield_ms.saturating_sub(dt_ms);
        self.double_points_ms = self.double_points_ms.saturating_sub(dt_ms);
        self.speed_boost_ms = self.speed_boost_ms.saturating_sub(dt_ms);
    }

    pub fn is_shielded(&self) -> bool {
        self.shield_ms > 0
    }

    pub fn is_double_points(&self) -> bool {
        self.double_points_ms > 0
    }

    pub fn is_speed_boosted(&self) -> bool {
        self.speed_boost_ms > 0
    }
}

/// Active Ocean Cleanup game.
#[derive(Debug, Clone)]
pub struct OceanGame {
    pub session: SessionState,
    /// Live falling entities, kept in spawn order.
    pub entities: Vec<Entity>,
    /// Boat left edge in field columns.
    pub boat_x: f64,
    pub spawner: SpawnScheduler,
    pub scoring: ScoringEngine,
    pub effects: ActiveEffects,
    pub achievements: SessionAchievements,
    pub table: SpawnTable,
}

impl OceanGame {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(&session_config()),
            entities: Vec::new(),
            boat_x: (FIELD_WIDTH - BOAT_WIDTH) / 2.0,
            spawner: SpawnScheduler::new(BASE_SPAWN_MS, SPAWN_STEP_MS, SPAWN_FLOOR_MS),
            scoring: ScoringEngine::new(scoring_config()),
            effects: ActiveEffects::default(),
            achievements: SessionAchievements::new(),
            table: spawn_table(),
        }
    }

    /// The boat's collision box at the bottom of the field.
    pub fn boat_box(&self) -> CollectorBox {
        CollectorBox {
            x: self.boat_x,
            y: BOAT_ROW,
            width: BOAT_WIDTH,
            height: 1.0,
        }
    }

    /// Full teardown back to pre-start defaults: entities discarded,
    /// every accumulator cleared, achievements relocked.
    pub fn reset(&mut self) {
        self.session.reset();
        self.entities.clear();
        self.boat_x = (FIELD_WIDTH - BOAT_WIDTH) / 2.0;
        self.spawner.reset();
        self.scoring.reset();
        self.effects = ActiveEffects::default();
        self.achievements = SessionAchievements::new();
    }

    /// Begin a fresh session. No-op if one is already running.
    pub fn start(&mut self) -> bool {
        if !self.session.start() {
            return false;
        }
        self.entities.clear();
        self.boat_x = (FIELD_WIDTH - BOAT_WIDTH) / 2.0;
        self.spawner.reset();
        self.scoring.reset();
        self.effects = ActiveEffects::default();
        self.achievements = SessionAchievements::new();
        true
    }
}

impl Default for OceanGame {
    fn default() -> Self {
        Self::new()
    }
}
