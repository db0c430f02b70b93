//! Collector-vs-entity collision for continuous games.
//!
//! The collector (boat, bucket) is an axis-aligned box at the bottom of
//! the field; entities are treated as 1×1 boxes at their position. All
//! overlaps found in a tick are resolved together, in ascending spawn
//! order, so multi-catch scoring is deterministic.

use super::entity::{Entity, EntityKind, EntityState, EntityValue};

/// Entity bounding-box edge length in field cells.
pub const ENTITY_SIZE: f64 = 1.0;

/// The player-controlled collector's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct CollectorBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CollectorBox {
    /// Axis-aligned overlap test against an entity's 1×1 box.
    pub fn overlaps(&self, entity: &Entity) -> bool {
        let e_left = entity.x;
        let e_right = entity.x + ENTITY_SIZE;
        let e_top = entity.y;
        let e_bottom = entity.y + ENTITY_SIZE;

        !(self.x + self.width < e_left
            || self.x > e_right
            || self.y + self.height < e_top
            || self.y > e_bottom)
    }
}

/// A resolved catch, dispatched to the scoring layer.
#[derive(Debug, Clone)]
pub struct MatchEvent {
    pub kind: EntityKind,
    pub subtype: &'static str,
    pub value: EntityValue,
}

/// Match every active entity overlapping the collector, remove them
/// from the live set, and return the match events in spawn order.
pub fn resolve(entities: &mut Vec<Entity>, collector: &CollectorBox) -> Vec<MatchEvent> {
    let mut matches = Vec::new();
    for entity in entities.iter_mut() {
        if entity.is_active() && collector.overlaps(entity) {
            entity.state = EntityState::Matched;
            matches.push(MatchEvent {
                kind: entity.kind,
                subtype: entity.subtype,
                value: entity.value,
            });
        }
    }
    entities.retain(|e| e.state != EntityState::Matched);
    matches
}
