//! Achievement identifiers and per-session unlock tracking.

use std::collections::HashSet;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    // Ocean Cleanup
    FirstCleanup,    // 10 trash collected
    OceanGuardian,   // 50 trash collected
    MarineProtector, // score >= 500

    // Forest Fire
    FireFighter,    // 15 fires extinguished
    ForestGuardian, // 25 trees saved
    EcoHero,        // score >= 600
}

/// Static definition of an achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Unlock flags for one session. Monotonic: an unlocked achievement
/// stays unlocked until the session is reset.
#[derive(Debug, Clone, Default)]
pub struct SessionAchievements {
    unlocked: HashSet<AchievementId>,
}

impl SessionAchievements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Flip an achievement to unlocked. Returns true only on the first
    /// call for that id, so the one-time score bonus cannot repeat.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        self.unlocked.insert(id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}
