//! Session lifecycle: the state machine every mini-game session follows.
//!
//! `Idle → Running → (paused ⇄ running) → Ended → Idle`. Lifecycle
//! commands are idempotent against invalid states: calling `start()`
//! mid-session or pausing while idle is a no-op, never an error. All
//! timing is explicit accumulator state driven by the host's `tick(dt)`;
//! there are no background timers to leak on teardown.

/// In-game score units per eco-point credited to the external ledger.
pub const SCORE_PER_ECO_POINT: i64 = 10;

/// Lifecycle phase of a session. Pause is a flag on `Running`, not a
/// phase: a paused session is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Ended,
}

/// Static per-game session parameters.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Countdown length.
    pub duration_ms: u64,
    /// `Some(n)` for life-based games; `None` for pure countdown games.
    pub starting_lives: Option<u32>,
    /// Spawn/ignition interval law: base, tightened per level, floored.
    pub base_spawn_interval_ms: u64,
    pub spawn_step_ms: u64,
    pub spawn_floor_ms: u64,
    /// Added to the speed factor on each level-up.
    pub speed_step: f64,
}

impl SessionConfig {
    /// Countdown-only session (no lives).
    pub fn timed(duration_ms: u64, base_spawn_ms: u64, step_ms: u64, floor_ms: u64) -> Self {
        Self {
            duration_ms,
            starting_lives: None,
            base_spawn_interval_ms: base_spawn_ms,
            spawn_step_ms: step_ms,
            spawn_floor_ms: floor_ms,
            speed_step: 0.0,
        }
    }

    pub fn with_lives(mut self, lives: u32) -> Self {
        self.starting_lives = Some(lives);
        self
    }

    pub fn with_speed_step(mut self, step: f64) -> Self {
        self.speed_step = step;
        self
    }
}

/// Mutable per-session counters, owned by the game struct and mutated
/// only through the scoring engine and the tick/lifecycle methods here.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub score: i64,
    pub resource_collected: u64,
    pub level: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub lives: Option<u32>,
    pub time_left_ms: u64,
    pub phase: SessionPhase,
    pub is_paused: bool,
    /// Level-derived motion multiplier for continuous games.
    pub speed_factor: f64,
    /// Current spawn interval, published for the UI.
    pub spawn_interval_ms: u64,
    config: SessionConfig,
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            score: 0,
            resource_collected: 0,
            level: 1,
            streak: 0,
            max_streak: 0,
            lives: config.starting_lives,
            time_left_ms: config.duration_ms,
            phase: SessionPhase::Idle,
            is_paused: false,
            speed_factor: 1.0,
            spawn_interval_ms: config.base_spawn_interval_ms,
            config: *config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Begin a session. Valid from `Idle` or `Ended`; a no-op while
    /// `Running`. Returns whether the session actually started.
    pub fn start(&mut self) -> bool {
        if self.phase == SessionPhase::Running {
            return false;
        }
        *self = Self::new(&self.config);
        self.phase = SessionPhase::Running;
        true
    }

    /// Toggle pause. Only meaningful while running; no-op otherwise.
    /// Returns the new paused flag.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == SessionPhase::Running {
            self.is_paused = !self.is_paused;
        }
        self.is_paused
    }

    /// Return to `Idle` defaults from any phase.
    pub fn reset(&mut self) {
        *self = Self::new(&self.config);
    }

    /// True when the tick pipeline should run this frame.
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running && !self.is_paused
    }

    /// Advance the countdown. Returns true exactly when it reaches zero.
    /// Frozen while paused or outside `Running`; no catch-up on resume.
    pub fn tick_countdown(&mut self, dt_ms: u64) -> bool {
        if !self.is_running() || self.time_left_ms == 0 {
            return false;
        }
        self.time_left_ms = self.time_left_ms.saturating_sub(dt_ms);
        self.time_left_ms == 0
    }

    /// Remove one life. Returns true if that was the last one.
    pub fn lose_life(&mut self) -> bool {
        match self.lives {
            Some(remaining) => {
                let remaining = remaining.saturating_sub(1);
                self.lives = Some(remaining);
                remaining == 0
            }
            None => false,
        }
    }

    /// Add one life, capped at the starting count.
    pub fn gain_life(&mut self) {
        if let (Some(current), Some(cap)) = (self.lives, self.config.starting_lives) {
            self.lives = Some((current + 1).min(cap));
        }
    }

    /// Transition to `Ended` and produce the terminal summary.
    pub fn end(&mut self) -> SessionSummary {
        self.phase = SessionPhase::Ended;
        self.is_paused = false;
        SessionSummary::from_state(self)
    }

    /// Whole seconds remaining, for display.
    pub fn time_left_secs(&self) -> u64 {
        self.time_left_ms.div_ceil(1000)
    }
}

/// Terminal summary reported to the host when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_score: i64,
    pub resource_total: u64,
    pub max_streak: u32,
    pub level_reached: u32,
    /// Eco-points to credit: `final_score / SCORE_PER_ECO_POINT`.
    pub points_earned: i64,
}

impl SessionSummary {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            final_score: state.score,
            resource_total: state.resource_collected,
            max_streak: state.max_streak,
            level_reached: state.level,
            points_earned: state.score / SCORE_PER_ECO_POINT,
        }
    }
}

/// Fixed-interval accumulator clock.
///
/// Every recurring process (ignition, spread, cooldowns) is one of
/// these, ticked explicitly, so reset tears everything down by
/// construction. There are no callback timers to leak.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    interval_ms: u64,
    elapsed_ms: u64,
}

impl IntervalClock {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Change the interval, keeping accumulated time.
    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Advance by `dt_ms`; returns how many intervals completed.
    pub fn tick(&mut self, dt_ms: u64) -> u32 {
        self.elapsed_ms += dt_ms;
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fired as u32
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
