//! Forest Fire tick pipeline and input handling.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{
    CellState, ForestGame, ForestResult, BURNOUT_MS, BURNOUT_PENALTY, DANGER_DROP_RELIEF,
    DANGER_MAX, DANGER_PER_IGNITION, EXTINGUISH_POINTS, GRID_COLS, GRID_ROWS,
    HELICOPTER_COOLDOWN_MS, HELICOPTER_POINTS_PER_CELL, IGNITION_BASE_MS, IGNITION_FLOOR_MS,
    IGNITION_STEP_MS, SAVED_RECOVERY_MS, SPREAD_CHANCE_PER_LEVEL,
};
use crate::achievements::AchievementId;
use crate::engine::interval_for_level;
use crate::games::{GameEvent, GameInput};

/// Handle one input event. Returns the events it produced (clicks and
/// helicopter drops score immediately).
pub fn process_input(game: &mut ForestGame, input: GameInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if input == GameInput::Pause {
        game.session.toggle_pause();
        return events;
    }
    if !game.session.is_running() {
        return events;
    }

    match input {
        GameInput::Up => game.cursor.0 = game.cursor.0.saturating_sub(1),
        GameInput::Down => game.cursor.0 = (game.cursor.0 + 1).min(GRID_ROWS - 1),
        GameInput::Left => game.cursor.1 = game.cursor.1.saturating_sub(1),
        GameInput::Right => game.cursor.1 = (game.cursor.1 + 1).min(GRID_COLS - 1),
        GameInput::Primary => {
            let (row, col) = game.cursor;
            if game.grid[row][col].state == CellState::Burning {
                game.grid[row][col].extinguish();
                let points =
                    game.scoring
                        .apply_positive(&mut game.session, EXTINGUISH_POINTS, 1);
                game.trees_saved += 1;
                events.push(GameEvent::CellSaved { points });
            }
        }
        GameInput::Tool => {
            events.extend(helicopter_drop(game));
        }
        _ => {}
    }
    events
}

/// Extinguish every burning cell at once. No-op while the helicopter
/// is on cooldown or the forest has no fires.
fn helicopter_drop(game: &mut ForestGame) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !game.helicopter_ready() {
        return events;
    }

    let mut extinguished = 0u32;
    for row in game.grid.iter_mut() {
        for cell in row.iter_mut() {
            if cell.state == CellState::Burning {
                cell.extinguish();
                extinguished += 1;
            }
        }
    }
    if extinguished == 0 {
        return events;
    }

    let points = game.scoring.apply_positive(
        &mut game.session,
        HELICOPTER_POINTS_PER_CELL * extinguished as i64,
        extinguished as i64,
    );
    game.trees_saved += extinguished as u64;
    game.danger = game.danger.saturating_sub(DANGER_DROP_RELIEF);
    game.helicopter_cooldown_ms = HELICOPTER_COOLDOWN_MS;
    events.push(GameEvent::HelicopterDrop {
        extinguished,
        points,
    });
    events
}

/// Advance the game by `dt_ms`. Inert while paused or outside a session.
pub fn tick_forest<R: Rng>(game: &mut ForestGame, dt_ms: u64, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !game.session.is_running() {
        return events;
    }

    game.helicopter_cooldown_ms = game.helicopter_cooldown_ms.saturating_sub(dt_ms);

    advance_cell_timers(game, dt_ms, &mut events);

    for _ in 0..game.ignition.tick(dt_ms) {
        ignite_random_healthy(game, rng);
    }

    for _ in 0..game.spread.tick(dt_ms) {
        spread_step(game, rng);
    }

    let extinguished = game.fires_extinguished();
    let gained = game.scoring.check_level_up(&mut game.session, extinguished);
    for _ in 0..gained {
        let interval = interval_for_level(
            IGNITION_BASE_MS,
            IGNITION_STEP_MS,
            IGNITION_FLOOR_MS,
            game.session.level,
        );
        game.ignition.set_interval(interval);
        game.session.spawn_interval_ms = interval;
        events.push(GameEvent::LevelUp {
            level: game.session.level,
        });
    }

    check_achievements(game, &mut events);

    let counts = game.cell_counts();
    if counts.healthy == 0 && counts.burning == 0 {
        game.outcome = Some(ForestResult::BurntOut);
        events.push(GameEvent::Ended(game.session.end()));
        return events;
    }

    if game.session.tick_countdown(dt_ms) {
        game.outcome = Some(ForestResult::TimeUp);
        events.push(GameEvent::Ended(game.session.end()));
    }

    events
}

/// Advance burning and recovery timers, burning out cells that have
/// been alight past the burnout window.
fn advance_cell_timers(game: &mut ForestGame, dt_ms: u64, events: &mut Vec<GameEvent>) {
    let mut burnt_out = 0u32;
    for row in game.grid.iter_mut() {
        for cell in row.iter_mut() {
            match cell.state {
                CellState::Burning => {
                    cell.burning_ms += dt_ms;
                    if cell.burning_ms >= BURNOUT_MS {
                        cell.state = CellState::Burnt;
                        burnt_out += 1;
                    }
                }
                CellState::Saved => {
                    cell.saved_ms += dt_ms;
                    if cell.saved_ms >= SAVED_RECOVERY_MS {
                        *cell = super::types::Cell::healthy();
                    }
                }
                _ => {}
            }
        }
    }
    for _ in 0..burnt_out {
        game.scoring.apply_penalty(&mut game.session, BURNOUT_PENALTY);
        events.push(GameEvent::CellBurnt {
            penalty: BURNOUT_PENALTY,
        });
    }
}

fn ignite_random_healthy<R: Rng>(game: &mut ForestGame, rng: &mut R) {
    let healthy: Vec<(usize, usize)> = cells_in_state(game, CellState::Healthy);
    if let Some(&(row, col)) = healthy.choose(rng) {
        game.grid[row][col].ignite();
        game.danger = (game.danger + DANGER_PER_IGNITION).min(DANGER_MAX);
    }
}

/// One spread step: every burning cell tries each healthy Moore
/// neighbor independently. New ignitions are collected first so a fire
/// cannot chain across the whole grid in a single step.
fn spread_step<R: Rng>(game: &mut ForestGame, rng: &mut R) {
    let chance = (SPREAD_CHANCE_PER_LEVEL * game.session.level as f64).min(1.0);
    let burning = cells_in_state(game, CellState::Burning);

    let mut caught: Vec<(usize, usize)> = Vec::new();
    for (row, col) in burning {
        for (nr, nc) in moore_neighbors(row, col) {
            if game.grid[nr][nc].state == CellState::Healthy && rng.gen::<f64>() < chance {
                caught.push((nr, nc));
            }
        }
    }
    for (row, col) in caught {
        if game.grid[row][col].state == CellState::Healthy {
            game.grid[row][col].ignite();
            game.danger = (game.danger + DANGER_PER_IGNITION).min(DANGER_MAX);
        }
    }
}

fn cells_in_state(game: &ForestGame, state: CellState) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (row, cols) in game.grid.iter().enumerate() {
        for (col, cell) in cols.iter().enumerate() {
            if cell.state == state {
                cells.push((row, col));
            }
        }
    }
    cells
}

fn moore_neighbors(row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(8);
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = row as i64 + dr;
            let nc = col as i64 + dc;
            if (0..GRID_ROWS as i64).contains(&nr) && (0..GRID_COLS as i64).contains(&nc) {
                neighbors.push((nr as usize, nc as usize));
            }
        }
    }
    neighbors
}

fn unlock(game: &mut ForestGame, events: &mut Vec<GameEvent>, id: AchievementId) {
    if game.achievements.unlock(id) {
        game.scoring.grant_achievement_bonus(&mut game.session);
        events.push(GameEvent::AchievementUnlocked {
            name: crate::achievements::def_for(id).name,
            bonus: game.scoring.config().achievement_bonus,
        });
    }
}

fn check_achievements(game: &mut ForestGame, events: &mut Vec<GameEvent>) {
    if game.fires_extinguished() >= 15 {
        unlock(game, events, AchievementId::FireFighter);
    }
    if game.trees_saved >= 25 {
        unlock(game, events, AchievementId::ForestGuardian);
    }
    // Checked last so unlock bonuses above count toward the score gate.
    if game.session.score >= 600 {
        unlock(game, events, AchievementId::EcoHero);
    }
}
