//! Scoring-engine scenario tests: the documented multiplier, streak,
//! and clamping behaviors, run against a live session state.

use ecoquest::engine::{
    MultiplierLaw, ScoringConfig, ScoringEngine, SessionConfig, SessionState,
};

fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig {
        law: MultiplierLaw::StreakStep { window: 5, cap: 3 },
        idle_decay_ms: 3000,
        level_threshold: 20,
        achievement_bonus: 100,
    })
}

fn session() -> SessionState {
    let mut state = SessionState::new(&SessionConfig::timed(60_000, 2000, 200, 1000));
    state.start();
    state
}

#[test]
fn test_three_common_matches_score_fifteen() {
    let mut engine = engine();
    let mut state = session();
    for _ in 0..3 {
        engine.apply_positive(&mut state, 5, 1);
    }
    // Streak stays under the multiplier window, so base points only.
    assert_eq!(state.score, 15);
    assert_eq!(state.streak, 3);
}

#[test]
fn test_sixth_match_at_streak_five_doubles() {
    let mut engine = engine();
    let mut state = session();
    for _ in 0..5 {
        engine.apply_positive(&mut state, 5, 1);
    }
    assert_eq!(state.score, 25);

    let awarded = engine.apply_positive(&mut state, 5, 1);
    assert_eq!(awarded, 10);
    assert_eq!(state.score, 35);
}

#[test]
fn test_multiplier_caps_at_three() {
    let mut engine = engine();
    let mut state = session();
    for _ in 0..50 {
        engine.apply_positive(&mut state, 5, 1);
    }
    let awarded = engine.apply_positive(&mut state, 5, 1);
    assert_eq!(awarded, 15);
}

#[test]
fn test_score_clamps_at_zero_under_heavy_penalties() {
    let mut engine = engine();
    let mut state = session();
    engine.apply_positive(&mut state, 5, 1);
    for _ in 0..10 {
        engine.apply_penalty(&mut state, 25);
        assert!(state.score >= 0);
    }
    assert_eq!(state.score, 0);
}

#[test]
fn test_streak_resets_only_on_documented_causes() {
    let mut engine = engine();
    let mut state = session();

    // Positive matches never reset.
    for _ in 0..4 {
        engine.apply_positive(&mut state, 5, 1);
    }
    assert_eq!(state.streak, 4);

    // Idle time short of the window never resets.
    assert!(!engine.tick_idle(&mut state, 2999));
    assert_eq!(state.streak, 4);

    // A negative match does.
    engine.apply_penalty(&mut state, 10);
    assert_eq!(state.streak, 0);

    // So does an unmatched collectible expiry.
    engine.apply_positive(&mut state, 5, 1);
    engine.on_collectible_missed(&mut state);
    assert_eq!(state.streak, 0);

    // And so does the idle window elapsing.
    engine.apply_positive(&mut state, 5, 1);
    assert!(engine.tick_idle(&mut state, 3000));
    assert_eq!(state.streak, 0);
}

#[test]
fn test_max_streak_survives_resets() {
    let mut engine = engine();
    let mut state = session();
    for _ in 0..7 {
        engine.apply_positive(&mut state, 5, 1);
    }
    engine.apply_penalty(&mut state, 10);
    engine.apply_positive(&mut state, 5, 1);
    assert_eq!(state.max_streak, 7);
}

#[test]
fn test_levels_step_sequentially_and_never_fall() {
    let engine = engine();
    let mut state = session();

    assert_eq!(engine.check_level_up(&mut state, 19), 0);
    assert_eq!(state.level, 1);
    assert_eq!(engine.check_level_up(&mut state, 20), 1);
    assert_eq!(state.level, 2);
    // A big jump in the counter still walks levels one at a time.
    assert_eq!(engine.check_level_up(&mut state, 100), 4);
    assert_eq!(state.level, 6);
    // A stale counter never lowers the level.
    assert_eq!(engine.check_level_up(&mut state, 100), 0);
    assert_eq!(state.level, 6);
}

#[test]
fn test_flat_law_ignores_streak() {
    let mut engine = ScoringEngine::new(ScoringConfig {
        law: MultiplierLaw::Flat,
        idle_decay_ms: u64::MAX,
        level_threshold: 10,
        achievement_bonus: 100,
    });
    let mut state = session();
    for _ in 0..20 {
        assert_eq!(engine.apply_positive(&mut state, 20, 1), 20);
    }
    assert_eq!(state.score, 400);
}
