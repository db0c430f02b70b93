//! Weighted entity spawning.
//!
//! Each continuous mini-game supplies a [`SpawnTable`] (weights summing
//! to 1.0) and a [`SpawnScheduler`] turns elapsed time into at most one
//! spawn per interval. The interval tightens with level, bounded below
//! by a floor, which is how difficulty scales.

use rand::Rng;

use super::entity::{Entity, EntityId, EntityKind, EntityState, EntityValue};

/// One row of a spawn table.
#[derive(Debug, Clone, Copy)]
pub struct SpawnEntry {
    pub kind: EntityKind,
    pub subtype: &'static str,
    /// Probability mass of this subtype; table weights sum to 1.0.
    pub weight: f64,
    pub value: EntityValue,
    /// Relative fall speed (1.0 = the game's base fall speed).
    pub speed: f64,
}

/// Weighted-probability table over entity subtypes.
#[derive(Debug, Clone)]
pub struct SpawnTable {
    entries: Vec<SpawnEntry>,
}

impl SpawnTable {
    pub fn new(entries: Vec<SpawnEntry>) -> Self {
        debug_assert!(!entries.is_empty());
        debug_assert!(
            (entries.iter().map(|e| e.weight).sum::<f64>() - 1.0).abs() < 1e-9,
            "spawn table weights must sum to 1.0"
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[SpawnEntry] {
        &self.entries
    }

    /// Roll one entry according to the table weights.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> &SpawnEntry {
        let mut remaining = rng.gen::<f64>();
        for entry in &self.entries {
            if remaining < entry.weight {
                return entry;
            }
            remaining -= entry.weight;
        }
        // Float rounding can leave a sliver past the last weight.
        self.entries
            .last()
            .unwrap_or_else(|| unreachable!("spawn table is never empty"))
    }
}

/// Spawn interval for a level: `base - step·(level-1)`, never below `floor`.
///
/// Shared by the falling-item scheduler and the grid games' ignition clocks.
pub fn interval_for_level(base_ms: u64, step_ms: u64, floor_ms: u64, level: u32) -> u64 {
    let tightened = base_ms.saturating_sub(step_ms.saturating_mul(level.saturating_sub(1) as u64));
    tightened.max(floor_ms)
}

/// Turns elapsed time into spawned entities for a continuous game.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    base_interval_ms: u64,
    step_ms: u64,
    floor_ms: u64,
    elapsed_ms: u64,
    next_id: EntityId,
}

impl SpawnScheduler {
    pub fn new(base_interval_ms: u64, step_ms: u64, floor_ms: u64) -> Self {
        Self {
            base_interval_ms,
            step_ms,
            floor_ms,
            elapsed_ms: 0,
            next_id: 0,
        }
    }

    /// Current spawn interval for the given level.
    pub fn interval_ms(&self, level: u32) -> u64 {
        interval_for_level(self.base_interval_ms, self.step_ms, self.floor_ms, level)
    }

    /// Advance the scheduler by `dt_ms` and spawn entities for every
    /// completed interval, each at a random column across `field_width`.
    /// Inert while paused: paused time does not accumulate.
    pub fn tick<R: Rng>(
        &mut self,
        dt_ms: u64,
        level: u32,
        paused: bool,
        table: &SpawnTable,
        field_width: f64,
        base_fall_speed: f64,
        rng: &mut R,
    ) -> Vec<Entity> {
        if paused {
            return Vec::new();
        }

        self.elapsed_ms += dt_ms;
        let interval = self.interval_ms(level);
        let mut spawned = Vec::new();

        while self.elapsed_ms >= interval {
            self.elapsed_ms -= interval;
            let entry = *table.roll(rng);
            let x = rng.gen_range(0.0..field_width.max(1.0));
            spawned.push(self.make_entity(&entry, x, base_fall_speed));
        }

        spawned
    }

    fn make_entity(&mut self, entry: &SpawnEntry, x: f64, base_fall_speed: f64) -> Entity {
        let id = self.next_id;
        self.next_id += 1;
        Entity {
            id,
            kind: entry.kind,
            subtype: entry.subtype,
            x,
            y: 0.0,
            speed: entry.speed * base_fall_speed,
            value: entry.value,
            state: EntityState::Active,
        }
    }

    /// Discard accumulated time and restart id numbering for a new session.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.next_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn table() -> SpawnTable {
        SpawnTable::new(vec![
            SpawnEntry {
                kind: EntityKind::Collectible,
                subtype: "common",
                weight: 0.7,
                value: EntityValue {
                    points: 5,
                    penalty: 0,
                    resource: 1,
                },
                speed: 1.0,
            },
            SpawnEntry {
                kind: EntityKind::Collectible,
                subtype: "rare",
                weight: 0.2,
                value: EntityValue {
                    points: 15,
                    penalty: 0,
                    resource: 3,
                },
                speed: 1.0,
            },
            SpawnEntry {
                kind: EntityKind::Hazard,
                subtype: "hazard",
                weight: 0.1,
                value: EntityValue {
                    points: 0,
                    penalty: 10,
                    resource: 0,
                },
                speed: 1.0,
            },
        ])
    }

    #[test]
    fn test_interval_tightens_with_level_down_to_floor() {
        assert_eq!(interval_for_level(2000, 200, 1000, 1), 2000);
        assert_eq!(interval_for_level(2000, 200, 1000, 3), 1600);
        assert_eq!(interval_for_level(2000, 200, 1000, 6), 1000);
        // Far past the floor: clamped, no underflow.
        assert_eq!(interval_for_level(2000, 200, 1000, 100), 1000);
    }

    #[test]
    fn test_no_spawn_before_interval_elapses() {
        let mut sched = SpawnScheduler::new(2000, 200, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let spawned = sched.tick(1999, 1, false, &table(), 60.0, 1.0, &mut rng);
        assert!(spawned.is_empty());
    }

    #[test]
    fn test_spawn_after_interval_elapses() {
        let mut sched = SpawnScheduler::new(2000, 200, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let spawned = sched.tick(2000, 1, false, &table(), 60.0, 1.0, &mut rng);
        assert_eq!(spawned.len(), 1);
        let e = &spawned[0];
        assert!(e.is_active());
        assert!((0.0..60.0).contains(&e.x));
        assert_eq!(e.y, 0.0);
    }

    #[test]
    fn test_multiple_intervals_in_one_tick_spawn_multiple() {
        let mut sched = SpawnScheduler::new(1000, 0, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let spawned = sched.tick(3500, 1, false, &table(), 60.0, 1.0, &mut rng);
        assert_eq!(spawned.len(), 3);
        // Ids are assigned in spawn order.
        assert_eq!(spawned[0].id, 0);
        assert_eq!(spawned[1].id, 1);
        assert_eq!(spawned[2].id, 2);
    }

    #[test]
    fn test_paused_scheduler_is_inert() {
        let mut sched = SpawnScheduler::new(1000, 0, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spawned = sched.tick(5000, 1, true, &table(), 60.0, 1.0, &mut rng);
        assert!(spawned.is_empty());
        // Paused time did not accumulate either.
        let spawned = sched.tick(999, 1, false, &table(), 60.0, 1.0, &mut rng);
        assert!(spawned.is_empty());
    }

    #[test]
    fn test_roll_distribution_roughly_matches_weights() {
        let t = table();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut counts = [0u32; 3];
        for _ in 0..10_000 {
            match t.roll(&mut rng).subtype {
                "common" => counts[0] += 1,
                "rare" => counts[1] += 1,
                _ => counts[2] += 1,
            }
        }
        assert!(counts[0] > 6500 && counts[0] < 7500, "common: {}", counts[0]);
        assert!(counts[1] > 1600 && counts[1] < 2400, "rare: {}", counts[1]);
        assert!(counts[2] > 700 && counts[2] < 1300, "hazard: {}", counts[2]);
    }

    #[test]
    fn test_reset_clears_elapsed_and_ids() {
        let mut sched = SpawnScheduler::new(1000, 0, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        sched.tick(2500, 1, false, &table(), 60.0, 1.0, &mut rng);
        sched.reset();
        let spawned = sched.tick(1000, 1, false, &table(), 60.0, 1.0, &mut rng);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].id, 0);
    }

    #[test]
    #[should_panic(expected = "weights must sum")]
    #[cfg(debug_assertions)]
    fn test_bad_weights_rejected() {
        SpawnTable::new(vec![SpawnEntry {
            kind: EntityKind::Collectible,
            subtype: "only",
            weight: 0.5,
            value: EntityValue::default(),
            speed: 1.0,
        }]);
    }
}
