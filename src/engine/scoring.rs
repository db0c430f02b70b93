//! Score, streak, and level progression shared by every mini-game.
//!
//! Scoring never fails: penalties floor the score at zero, multipliers
//! are capped, and level-ups are applied one step per threshold crossing
//! so a burst of resource cannot skip levels.

use super::session::SessionState;

/// How the streak converts into an integer score multiplier.
///
/// Each game picks one law as configuration; every law is monotonic in
/// the streak and capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierLaw {
    /// No multiplier: every match is worth its base points.
    Flat,
    /// `min(streak / window + 1, cap)`: steps up every `window` matches.
    StreakStep { window: u32, cap: u32 },
    /// `min(streak + 1, cap)`: combo-style, one step per match.
    ComboCount { cap: u32 },
}

impl MultiplierLaw {
    pub fn multiplier(&self, streak: u32) -> u32 {
        match *self {
            MultiplierLaw::Flat => 1,
            MultiplierLaw::StreakStep { window, cap } => {
                (streak / window.max(1) + 1).min(cap.max(1))
            }
            MultiplierLaw::ComboCount { cap } => (streak + 1).min(cap.max(1)),
        }
    }
}

/// Per-game scoring configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    pub law: MultiplierLaw,
    /// Streak decays to zero after this long without a positive match.
    pub idle_decay_ms: u64,
    /// Cumulative-counter units needed per level step.
    pub level_threshold: u64,
    /// Flat one-time score bonus per achievement unlock.
    pub achievement_bonus: i64,
}

/// Applies match events and timers to a [`SessionState`].
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    /// Time since the last positive match, for streak decay.
    idle_ms: u64,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config, idle_ms: 0 }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Apply a positive-value match. Returns the points awarded after
    /// the multiplier, already added to the score.
    pub fn apply_positive(
        &mut self,
        state: &mut SessionState,
        base_points: i64,
        resource: i64,
    ) -> i64 {
        let multiplier = self.config.law.multiplier(state.streak) as i64;
        let awarded = base_points.max(0) * multiplier;
        state.score += awarded;
        state.resource_collected += resource.max(0) as u64;
        state.streak += 1;
        state.max_streak = state.max_streak.max(state.streak);
        self.idle_ms = 0;
        awarded
    }

    /// Apply a negative-value match: score floors at zero, streak resets.
    pub fn apply_penalty(&mut self, state: &mut SessionState, penalty: i64) {
        state.score = (state.score - penalty.abs()).max(0);
        state.streak = 0;
    }

    /// A collectible fell past the collector unmatched.
    pub fn on_collectible_missed(&mut self, state: &mut SessionState) {
        state.streak = 0;
    }

    /// Advance the idle-decay window. Returns true if the streak just
    /// decayed to zero.
    pub fn tick_idle(&mut self, state: &mut SessionState, dt_ms: u64) -> bool {
        if state.streak == 0 {
            self.idle_ms = 0;
            return false;
        }
        self.idle_ms += dt_ms;
        if self.idle_ms >= self.config.idle_decay_ms {
            state.streak = 0;
            self.idle_ms = 0;
            return true;
        }
        false
    }

    /// Level up once per threshold crossed by `counter`. Returns the
    /// number of levels gained this call (sequential, never skipped).
    pub fn check_level_up(&self, state: &mut SessionState, counter: u64) -> u32 {
        let mut gained = 0;
        while counter >= state.level as u64 * self.config.level_threshold {
            state.level += 1;
            gained += 1;
        }
        gained
    }

    /// One-time flat bonus for an achievement unlock.
    pub fn grant_achievement_bonus(&self, state: &mut SessionState) {
        state.score += self.config.achievement_bonus.max(0);
    }

    pub fn reset(&mut self) {
        self.idle_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::session::{SessionConfig, SessionState};

    fn config() -> ScoringConfig {
        ScoringConfig {
            law: MultiplierLaw::StreakStep { window: 5, cap: 3 },
            idle_decay_ms: 3000,
            level_threshold: 20,
            achievement_bonus: 100,
        }
    }

    fn state() -> SessionState {
        let mut s = SessionState::new(&SessionConfig::timed(60_000, 2000, 200, 1000));
        s.start();
        s
    }

    #[test]
    fn test_streak_step_law() {
        let law = MultiplierLaw::StreakStep { window: 5, cap: 3 };
        assert_eq!(law.multiplier(0), 1);
        assert_eq!(law.multiplier(4), 1);
        assert_eq!(law.multiplier(5), 2);
        assert_eq!(law.multiplier(9), 2);
        assert_eq!(law.multiplier(10), 3);
        assert_eq!(law.multiplier(500), 3);
    }

    #[test]
    fn test_combo_count_law() {
        let law = MultiplierLaw::ComboCount { cap: 5 };
        assert_eq!(law.multiplier(0), 1);
        assert_eq!(law.multiplier(3), 4);
        assert_eq!(law.multiplier(4), 5);
        assert_eq!(law.multiplier(100), 5);
    }

    #[test]
    fn test_flat_law() {
        assert_eq!(MultiplierLaw::Flat.multiplier(0), 1);
        assert_eq!(MultiplierLaw::Flat.multiplier(99), 1);
    }

    #[test]
    fn test_positive_match_awards_and_extends_streak() {
        let mut engine = ScoringEngine::new(config());
        let mut s = state();

        let awarded = engine.apply_positive(&mut s, 5, 1);
        assert_eq!(awarded, 5);
        assert_eq!(s.score, 5);
        assert_eq!(s.resource_collected, 1);
        assert_eq!(s.streak, 1);
        assert_eq!(s.max_streak, 1);
    }

    #[test]
    fn test_multiplier_kicks_in_at_streak_five() {
        let mut engine = ScoringEngine::new(config());
        let mut s = state();
        for _ in 0..5 {
            engine.apply_positive(&mut s, 5, 1);
        }
        assert_eq!(s.score, 25);
        // Sixth match sees streak 5, multiplier 2.
        let awarded = engine.apply_positive(&mut s, 5, 1);
        assert_eq!(awarded, 10);
        assert_eq!(s.score, 35);
    }

    #[test]
    fn test_penalty_floors_score_at_zero_and_resets_streak() {
        let mut engine = ScoringEngine::new(config());
        let mut s = state();
        engine.apply_positive(&mut s, 5, 1);
        engine.apply_penalty(&mut s, 10);
        assert_eq!(s.score, 0);
        assert_eq!(s.streak, 0);
        // max_streak survives the reset.
        assert_eq!(s.max_streak, 1);
    }

    #[test]
    fn test_miss_resets_streak_only() {
        let mut engine = ScoringEngine::new(config());
        let mut s = state();
        engine.apply_positive(&mut s, 5, 1);
        engine.on_collectible_missed(&mut s);
        assert_eq!(s.streak, 0);
        assert_eq!(s.score, 5);
    }

    #[test]
    fn test_idle_decay_resets_streak_after_window() {
        let mut engine = ScoringEngine::new(config());
        let mut s = state();
        engine.apply_positive(&mut s, 5, 1);

        assert!(!engine.tick_idle(&mut s, 2999));
        assert_eq!(s.streak, 1);
        assert!(engine.tick_idle(&mut s, 1));
        assert_eq!(s.streak, 0);
    }

    #[test]
    fn test_positive_match_rearms_idle_timer() {
        let mut engine = ScoringEngine::new(config());
        let mut s = state();
        engine.apply_positive(&mut s, 5, 1);
        engine.tick_idle(&mut s, 2500);
        engine.apply_positive(&mut s, 5, 1);
        // Another 2500ms is still inside the rearmed window.
        assert!(!engine.tick_idle(&mut s, 2500));
        assert_eq!(s.streak, 2);
    }

    #[test]
    fn test_level_up_fires_once_per_threshold() {
        let engine = ScoringEngine::new(config());
        let mut s = state();
        assert_eq!(engine.check_level_up(&mut s, 19), 0);
        assert_eq!(s.level, 1);
        assert_eq!(engine.check_level_up(&mut s, 20), 1);
        assert_eq!(s.level, 2);
        // Crossing two thresholds at once still steps sequentially.
        assert_eq!(engine.check_level_up(&mut s, 60), 2);
        assert_eq!(s.level, 4);
    }

    #[test]
    fn test_achievement_bonus_adds_flat_points() {
        let engine = ScoringEngine::new(config());
        let mut s = state();
        engine.grant_achievement_bonus(&mut s);
        assert_eq!(s.score, 100);
    }

    #[test]
    fn test_negative_base_points_clamp_to_zero() {
        let mut engine = ScoringEngine::new(config());
        let mut s = state();
        let awarded = engine.apply_positive(&mut s, -5, -1);
        assert_eq!(awarded, 0);
        assert_eq!(s.score, 0);
        assert_eq!(s.resource_collected, 0);
    }
}
