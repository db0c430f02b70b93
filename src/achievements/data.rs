//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ── Ocean Cleanup ───────────────────────────────────────────
    AchievementDef {
        id: AchievementId::FirstCleanup,
        name: "First Cleanup",
        description: "Collect 10 pieces of trash in one voyage",
        icon: "~",
    },
    AchievementDef {
        id: AchievementId::OceanGuardian,
        name: "Ocean Guardian",
        description: "Collect 50 pieces of trash in one voyage",
        icon: "~",
    },
    AchievementDef {
        id: AchievementId::MarineProtector,
        name: "Marine Protector",
        description: "Reach a score of 500",
        icon: "~",
    },
    // ── Forest Fire ─────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::FireFighter,
        name: "Fire Fighter",
        description: "Extinguish 15 fires in one session",
        icon: "^",
    },
    AchievementDef {
        id: AchievementId::ForestGuardian,
        name: "Forest Guardian",
        description: "Save 25 trees in one session",
        icon: "^",
    },
    AchievementDef {
        id: AchievementId::EcoHero,
        name: "Eco Hero",
        description: "Reach a score of 600",
        icon: "^",
    },
];

/// Look up the static definition for an achievement id.
pub fn def_for(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .unwrap_or_else(|| unreachable!("every AchievementId has a definition"))
}
