//! Spawned game objects shared by all continuous mini-games.
//!
//! An [`Entity`] is anything the spawner drops into the play field:
//! collectible trash, hazardous sea life, power-ups. Grid games manage
//! their own cell state and do not use entities.

/// Monotonically increasing per-session entity id. Collision resolution
/// processes matches in ascending id (spawn) order so scoring stays
/// deterministic when several entities are caught in one tick.
pub type EntityId = u64;

/// Broad behavioral class of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Worth points and resource when caught; missing one breaks the streak.
    Collectible,
    /// Penalty and a lost life when caught; harmless if it falls past.
    Hazard,
    /// Penalty only when caught, no life loss, silent on expiry.
    Obstacle,
    /// Grants a timed effect when caught, silent on expiry.
    Powerup,
}

/// Lifecycle of an entity. Only `Active` entities move and collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    Active,
    /// Intercepted by the collector; removed after scoring dispatch.
    Matched,
    /// Left the play field unmatched.
    Expired,
}

/// Per-subtype payload carried from the spawn table to the scoring engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityValue {
    /// Points awarded on a positive match (before multiplier).
    pub points: i64,
    /// Points removed on a negative match (stored as a positive magnitude).
    pub penalty: i64,
    /// Primary resource units granted on a positive match.
    pub resource: i64,
}

/// A single falling object in a continuous mini-game.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Stable subtype key, e.g. "plastic_bottle" or "turtle".
    pub subtype: &'static str,
    /// Horizontal position in field columns.
    pub x: f64,
    /// Vertical position in field rows; 0.0 is the top edge.
    pub y: f64,
    /// Fall speed in rows per motion tick, before the session speed factor.
    pub speed: f64,
    pub value: EntityValue,
    pub state: EntityState,
}

impl Entity {
    pub fn is_active(&self) -> bool {
        self.state == EntityState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(state: EntityState) -> Entity {
        Entity {
            id: 1,
            kind: EntityKind::Collectible,
            subtype: "plastic_bottle",
            x: 10.0,
            y: 0.0,
            speed: 1.0,
            value: EntityValue {
                points: 10,
                penalty: 0,
                resource: 1,
            },
            state,
        }
    }

    #[test]
    fn test_only_active_entities_report_active() {
        assert!(entity(EntityState::Active).is_active());
        assert!(!entity(EntityState::Matched).is_active());
        assert!(!entity(EntityState::Expired).is_active());
    }

    #[test]
    fn test_entity_value_default_is_zero() {
        let v = EntityValue::default();
        assert_eq!(v.points, 0);
        assert_eq!(v.penalty, 0);
        assert_eq!(v.resource, 0);
    }
}
