//! Entity motion for continuous (falling-item) games.
//!
//! Positions advance in fixed steps of [`MOTION_TICK_MS`]; callers pass
//! wall-clock `dt_ms` and the step count is derived, matching the
//! fixed-increment approach used throughout the session layer.

use super::entity::{Entity, EntityState};

/// Base motion tick. Entity `speed` is expressed in rows per this interval.
pub const MOTION_TICK_MS: u64 = 50;

/// Play field dimensions for a continuous game, in columns × rows.
#[derive(Debug, Clone, Copy)]
pub struct FieldBounds {
    pub width: f64,
    pub height: f64,
}

/// Advance every active entity by `dt_ms` worth of falling and mark
/// entities past the bottom edge as `Expired`.
///
/// `speed_factor` is the session's level-derived speed multiplier.
pub fn advance(entities: &mut [Entity], dt_ms: u64, bounds: &FieldBounds, speed_factor: f64) {
    let steps = dt_ms as f64 / MOTION_TICK_MS as f64;
    for entity in entities.iter_mut() {
        if !entity.is_active() {
            continue;
        }
        entity.y += entity.speed * speed_factor * steps;
        if entity.y > bounds.height {
            entity.state = EntityState::Expired;
        }
    }
}

/// Remove and return entities that expired off the bottom edge.
///
/// The caller turns collectible expiries into misses (streak reset,
/// life loss); every other kind expires silently.
pub fn take_expired(entities: &mut Vec<Entity>) -> Vec<Entity> {
    let mut expired = Vec::new();
    entities.retain(|e| {
        if e.state == EntityState::Expired {
            expired.push(e.clone());
            false
        } else {
            true
        }
    });
    expired
}
