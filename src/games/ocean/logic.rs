//! Ocean Cleanup tick pipeline and input handling.

use rand::Rng;

use super::types::{
    OceanGame, BASE_FALL_SPEED, BOAT_BOOSTED_STEP, BOAT_STEP, BOAT_WIDTH, DOUBLE_POINTS_MS,
    FIELD_WIDTH, SHIELD_MS, SPEED_BOOST_MS,
};
use crate::achievements::AchievementId;
use crate::engine::{collision, motion, EntityKind};
use crate::games::{GameEvent, GameInput};

/// Handle one input event. Movement is live only while the session is
/// actively running; pause toggles any time mid-session.
pub fn process_input(game: &mut OceanGame, input: GameInput) {
    if input == GameInput::Pause {
        game.session.toggle_pause();
        return;
    }
    if !game.session.is_running() {
        return;
    }

    let step = if game.effects.is_speed_boosted() {
        BOAT_BOOSTED_STEP
    } else {
        BOAT_STEP
    };
    match input {
        GameInput::Left => {
            game.boat_x = (game.boat_x - step).max(0.0);
        }
        GameInput::Right => {
            game.boat_x = (game.boat_x + step).min(FIELD_WIDTH - BOAT_WIDTH);
        }
        _ => {}
    }
}

/// Advance the game by `dt_ms`. Returns the events this tick produced,
/// in the order they happened. Inert while paused or outside a session.
pub fn tick_ocean<R: Rng>(game: &mut OceanGame, dt_ms: u64, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !game.session.is_running() {
        return events;
    }

    game.effects.tick(dt_ms);

    let spawned = game.spawner.tick(
        dt_ms,
        game.session.level,
        game.session.is_paused,
        &game.table,
        FIELD_WIDTH,
        BASE_FALL_SPEED,
        rng,
    );
    game.entities.extend(spawned);

    motion::advance(
        &mut game.entities,
        dt_ms,
        &super::types::field_bounds(),
        game.session.speed_factor,
    );
    for expired in motion::take_expired(&mut game.entities) {
        if expired.kind != EntityKind::Collectible {
            continue;
        }
        game.scoring.on_collectible_missed(&mut game.session);
        let last = game.session.lose_life();
        events.push(GameEvent::CollectibleMissed { life_lost: true });
        if last {
            events.push(GameEvent::Ended(game.session.end()));
            return events;
        }
    }

    let boat = game.boat_box();
    for matched in collision::resolve(&mut game.entities, &boat) {
        match matched.kind {
            EntityKind::Collectible => {
                let mut base = matched.value.points;
                if game.effects.is_double_points() {
                    base *= 2;
                }
                let awarded = game.scoring.apply_positive(
                    &mut game.session,
                    base,
                    matched.value.resource,
                );
                events.push(GameEvent::Collected {
                    name: matched.subtype,
                    points: awarded,
                    streak: game.session.streak,
                });
            }
            EntityKind::Hazard => {
                if game.effects.is_shielded() {
                    events.push(GameEvent::Shielded {
                        name: matched.subtype,
                    });
                    continue;
                }
                game.scoring
                    .apply_penalty(&mut game.session, matched.value.penalty);
                let last = game.session.lose_life();
                events.push(GameEvent::Penalty {
                    name: matched.subtype,
                    points: matched.value.penalty,
                    life_lost: true,
                });
                if last {
                    events.push(GameEvent::Ended(game.session.end()));
                    return events;
                }
            }
            EntityKind::Obstacle => {
                game.scoring
                    .apply_penalty(&mut game.session, matched.value.penalty);
                events.push(GameEvent::Penalty {
                    name: matched.subtype,
                    points: matched.value.penalty,
                    life_lost: false,
                });
            }
            EntityKind::Powerup => {
                apply_powerup(game, matched.subtype);
                events.push(GameEvent::PowerUp {
                    name: matched.subtype,
                });
            }
        }
    }

    if game.scoring.tick_idle(&mut game.session, dt_ms) {
        events.push(GameEvent::StreakDecayed);
    }

    let collected = game.session.resource_collected;
    let gained = game.scoring.check_level_up(&mut game.session, collected);
    for _ in 0..gained {
        game.session.speed_factor += game.session.config().speed_step;
        game.session.spawn_interval_ms = game.spawner.interval_ms(game.session.level);
        events.push(GameEvent::LevelUp {
            level: game.session.level,
        });
    }

    check_achievements(game, &mut events);

    if game.session.tick_countdown(dt_ms) {
        events.push(GameEvent::Ended(game.session.end()));
    }

    events
}

fn apply_powerup(game: &mut OceanGame, subtype: &str) {
    match subtype {
        "speed_boost" => game.effects.speed_boost_ms = SPEED_BOOST_MS,
        "shield" => game.effects.shield_ms = SHIELD_MS,
        "double_points" => game.effects.double_points_ms = DOUBLE_POINTS_MS,
        "extra_life" => game.session.gain_life(),
        _ => {}
    }
}

fn unlock(game: &mut OceanGame, events: &mut Vec<GameEvent>, id: AchievementId) {
    if game.achievements.unlock(id) {
        game.scoring.grant_achievement_bonus(&mut game.session);
        events.push(GameEvent::AchievementUnlocked {
            name: crate::achievements::def_for(id).name,
            bonus: game.scoring.config().achievement_bonus,
        });
    }
}

fn check_achievements(game: &mut OceanGame, events: &mut Vec<GameEvent>) {
    if game.session.resource_collected >= 10 {
        unlock(game, events, AchievementId::FirstCleanup);
    }
    if game.session.resource_collected >= 50 {
        unlock(game, events, AchievementId::OceanGuardian);
    }
    // Checked last so unlock bonuses above count toward the score gate.
    if game.session.score >= 500 {
        unlock(game, events, AchievementId::MarineProtector);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Entity, EntityState, EntityValue, SessionPhase};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn started() -> OceanGame {
        let mut game = OceanGame::new();
        game.start();
        game
    }

    fn falling(kind: EntityKind, subtype: &'static str, x: f64, y: f64, value: EntityValue) -> Entity {
        Entity {
            id: 9000,
            kind,
            subtype,
            x,
            y,
            speed: BASE_FALL_SPEED,
            value,
            state: EntityState::Active,
        }
    }

    fn trash_on_boat(game: &OceanGame) -> Entity {
        falling(
            EntityKind::Collectible,
            "plastic_bottle",
            game.boat_x + 1.0,
            super::super::types::BOAT_ROW,
            EntityValue {
                points: 10,
                penalty: 0,
                resource: 1,
            },
        )
    }

    fn shark_on_boat(game: &OceanGame) -> Entity {
        falling(
            EntityKind::Hazard,
            "shark",
            game.boat_x + 1.0,
            super::super::types::BOAT_ROW,
            EntityValue {
                points: 0,
                penalty: 20,
                resource: 0,
            },
        )
    }

    #[test]
    fn test_tick_is_inert_before_start() {
        let mut game = OceanGame::new();
        let events = tick_ocean(&mut game, 1000, &mut rng());
        assert!(events.is_empty());
        assert!(game.entities.is_empty());
    }

    #[test]
    fn test_spawning_follows_interval() {
        let mut game = started();
        tick_ocean(&mut game, 1999, &mut rng());
        assert!(game.entities.is_empty());
        tick_ocean(&mut game, 1, &mut rng());
        assert_eq!(game.entities.len(), 1);
    }

    #[test]
    fn test_catching_trash_scores_and_extends_streak() {
        let mut game = started();
        let trash = trash_on_boat(&game);
        game.entities.push(trash);
        let events = tick_ocean(&mut game, 50, &mut rng());

        assert_eq!(game.session.score, 10);
        assert_eq!(game.session.streak, 1);
        assert_eq!(game.session.resource_collected, 1);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Collected {
                name: "plastic_bottle",
                points: 10,
                ..
            }
        )));
    }

    #[test]
    fn test_hazard_costs_points_and_a_life() {
        let mut game = started();
        game.session.score = 30;
        game.entities.push(shark_on_boat(&game));
        let events = tick_ocean(&mut game, 50, &mut rng());

        assert_eq!(game.session.score, 10);
        assert_eq!(game.session.lives, Some(2));
        assert_eq!(game.session.streak, 0);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::Penalty { name: "shark", .. })));
    }

    #[test]
    fn test_shield_blocks_hazard() {
        let mut game = started();
        game.effects.shield_ms = SHIELD_MS;
        game.session.score = 30;
        game.entities.push(shark_on_boat(&game));
        let events = tick_ocean(&mut game, 50, &mut rng());

        assert_eq!(game.session.score, 30);
        assert_eq!(game.session.lives, Some(3));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::Shielded { name: "shark" })));
    }

    #[test]
    fn test_double_points_applies_before_multiplier() {
        let mut game = started();
        game.effects.double_points_ms = DOUBLE_POINTS_MS;
        game.session.streak = 5; // multiplier 2
        game.entities.push(trash_on_boat(&game));
        tick_ocean(&mut game, 50, &mut rng());
        // 10 base, doubled to 20, then x2 streak multiplier.
        assert_eq!(game.session.score, 40);
    }

    #[test]
    fn test_missed_trash_resets_streak_and_costs_a_life() {
        let mut game = started();
        game.session.streak = 3;
        let mut trash = trash_on_boat(&game);
        trash.x = 0.0; // off the boat
        trash.y = super::super::types::FIELD_HEIGHT - 0.01;
        game.entities.push(trash);
        let events = tick_ocean(&mut game, 50, &mut rng());

        assert_eq!(game.session.streak, 0);
        assert_eq!(game.session.lives, Some(2));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::CollectibleMissed { .. })));
    }

    #[test]
    fn test_missed_hazard_is_silent() {
        let mut game = started();
        let mut shark = shark_on_boat(&game);
        shark.x = 0.0;
        shark.y = super::super::types::FIELD_HEIGHT - 0.01;
        game.entities.push(shark);
        let events = tick_ocean(&mut game, 50, &mut rng());

        assert_eq!(game.session.lives, Some(3));
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::CollectibleMissed { .. })));
    }

    #[test]
    fn test_last_life_ends_the_session() {
        let mut game = started();
        game.session.lives = Some(1);
        game.entities.push(shark_on_boat(&game));
        let events = tick_ocean(&mut game, 50, &mut rng());

        assert_eq!(game.session.phase, SessionPhase::Ended);
        assert!(events.iter().any(|e| matches!(e, GameEvent::Ended(_))));
    }

    #[test]
    fn test_countdown_expiry_ends_with_summary() {
        let mut game = started();
        game.session.score = 125;
        game.session.time_left_ms = 40;
        let events = tick_ocean(&mut game, 50, &mut rng());

        let ended = events.iter().find_map(|e| match e {
            GameEvent::Ended(summary) => Some(*summary),
            _ => None,
        });
        let summary = ended.expect("session should have ended");
        assert_eq!(summary.points_earned, summary.final_score / 10);
        assert_eq!(game.session.phase, SessionPhase::Ended);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = started();
        game.effects.shield_ms = 1000;
        game.entities.push(falling(
            EntityKind::Collectible,
            "plastic_bag",
            5.0,
            3.0,
            EntityValue {
                points: 12,
                penalty: 0,
                resource: 1,
            },
        ));
        process_input(&mut game, GameInput::Pause);

        let events = tick_ocean(&mut game, 5000, &mut rng());
        assert!(events.is_empty());
        assert_eq!(game.session.time_left_ms, super::super::types::SESSION_MS);
        assert!((game.entities[0].y - 3.0).abs() < f64::EPSILON);
        assert_eq!(game.effects.shield_ms, 1000);
        assert_eq!(game.entities.len(), 1);
    }

    #[test]
    fn test_boat_clamps_to_field_edges() {
        let mut game = started();
        for _ in 0..100 {
            process_input(&mut game, GameInput::Left);
        }
        assert!((game.boat_x - 0.0).abs() < f64::EPSILON);
        for _ in 0..100 {
            process_input(&mut game, GameInput::Right);
        }
        assert!((game.boat_x - (FIELD_WIDTH - BOAT_WIDTH)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_boost_doubles_boat_step() {
        let mut game = started();
        let origin = game.boat_x;
        game.effects.speed_boost_ms = SPEED_BOOST_MS;
        process_input(&mut game, GameInput::Right);
        assert!((game.boat_x - origin - BOAT_BOOSTED_STEP).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extra_life_caps_at_starting_count() {
        let mut game = started();
        apply_powerup(&mut game, "extra_life");
        assert_eq!(game.session.lives, Some(3));
        game.session.lives = Some(1);
        apply_powerup(&mut game, "extra_life");
        assert_eq!(game.session.lives, Some(2));
    }

    #[test]
    fn test_level_up_after_twenty_trash() {
        let mut game = started();
        game.session.resource_collected = 19;
        game.entities.push(trash_on_boat(&game));
        let events = tick_ocean(&mut game, 50, &mut rng());

        assert_eq!(game.session.level, 2);
        assert!((game.session.speed_factor - 1.2).abs() < 1e-9);
        assert_eq!(game.session.spawn_interval_ms, 1800);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::LevelUp { level: 2 })));
    }

    #[test]
    fn test_first_cleanup_achievement_unlocks_once() {
        let mut game = started();
        game.session.resource_collected = 9;
        game.entities.push(trash_on_boat(&game));
        let events = tick_ocean(&mut game, 50, &mut rng());
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::AchievementUnlocked { .. })));
        // 10 for the catch plus the one-time bonus.
        assert_eq!(game.session.score, 110);

        // A later tick does not re-unlock.
        let events = tick_ocean(&mut game, 50, &mut rng());
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::AchievementUnlocked { .. })));
    }

    #[test]
    fn test_streak_decays_after_idle_window() {
        let mut game = started();
        game.entities.push(trash_on_boat(&game));
        tick_ocean(&mut game, 50, &mut rng());
        assert_eq!(game.session.streak, 1);

        let mut decayed = false;
        // Stay under the spawn interval so nothing else interferes.
        for _ in 0..4 {
            let events = tick_ocean(&mut game, 450, &mut rng());
            game.entities.clear();
            decayed |= events.iter().any(|e| matches!(e, GameEvent::StreakDecayed));
        }
        for _ in 0..4 {
            let events = tick_ocean(&mut game, 450, &mut rng());
            game.entities.clear();
            decayed |= events.iter().any(|e| matches!(e, GameEvent::StreakDecayed));
        }
        assert!(decayed);
        assert_eq!(game.session.streak, 0);
    }
}
