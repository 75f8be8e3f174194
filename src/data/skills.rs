//! Built-in skill tree

use crate::progression::{SkillCatalog, SkillIcon, SkillNode};

/// The default skill tree: one root, three branches, cross-branch tier 3
/// and two ultimates.
pub fn default_skill_nodes() -> Vec<SkillNode> {
    vec![
        // Tier 0 - Root
        SkillNode::new("core_systems", "Core Systems", "Base operational systems unlocked.")
            .with_icon(SkillIcon::Cpu)
            .at(0, 50, 10),

        // Tier 1 - Branches from Core
        SkillNode::new("def_up", "Kinetic Plating", "Increases base armor by 10%.")
            .with_icon(SkillIcon::Shield)
            .requires("core_systems")
            .at(1, 20, 30),
        SkillNode::new("atk_up", "Weapon Overclock", "Increases base weapon damage by 5%.")
            .with_icon(SkillIcon::Bolt)
            .requires("core_systems")
            .at(1, 50, 30),
        SkillNode::new("util_up", "Tactical Visor", "Highlights enemies and weak points.")
            .with_icon(SkillIcon::Eye)
            .requires("core_systems")
            .at(1, 80, 30),

        // Tier 2 - Defense
        SkillNode::new("def_t2_regen", "Shield Capacitor", "Shield starts regenerating sooner after taking damage.")
            .with_icon(SkillIcon::Shield)
            .requires("def_up")
            .at(2, 10, 50),
        SkillNode::new("def_t2_blast", "Blast Shielding", "Reduces damage from explosive sources.")
            .with_icon(SkillIcon::Shield)
            .requires("def_up")
            .at(2, 30, 50),

        // Tier 2 - Attack
        SkillNode::new("atk_t2_crit", "Targeting Computer", "Increases critical hit damage by 25%.")
            .with_icon(SkillIcon::Target)
            .requires("atk_up")
            .at(2, 50, 50),

        // Tier 2 - Utility
        SkillNode::new("util_t2_speed", "Maneuvering Thrusters", "Increases sprint speed by 15%.")
            .with_icon(SkillIcon::Zap)
            .requires("util_up")
            .at(2, 70, 50),
        SkillNode::new("util_t2_resource", "Resource Scavenger", "Find more resources from salvage.")
            .with_icon(SkillIcon::Plus)
            .requires("util_up")
            .at(2, 90, 50),

        // Tier 3 - Cross-branch
        SkillNode::new("def_atk_t3", "Vengeance Protocol", "Gain a temporary damage boost after your shield breaks.")
            .with_icon(SkillIcon::Bolt)
            .requires("def_t2_blast")
            .at(3, 40, 70),
        SkillNode::new("atk_util_t3", "Adrenaline Killers", "Getting a critical hit grants a temporary movement speed boost.")
            .with_icon(SkillIcon::Zap)
            .requires("atk_t2_crit")
            .at(3, 60, 70),

        // Tier 4 - Ultimates
        SkillNode::new("ultimate_overload", "Annihilation Protocol", "Ultimate: Massively boosts damage and speed for a short duration, but disables shields.")
            .with_icon(SkillIcon::Cpu)
            .requires("def_atk_t3")
            .at(4, 40, 90),
        SkillNode::new("ultimate_stealth", "Ghostweave Cloak", "Ultimate: Become nearly invisible for a short duration.")
            .with_icon(SkillIcon::Eye)
            .requires("atk_util_t3")
            .at(4, 60, 90),
    ]
}

pub fn default_skill_catalog() -> SkillCatalog {
    SkillCatalog::new(default_skill_nodes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tree_is_valid_forest() {
        let catalog = default_skill_catalog();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.roots().count(), 1);
    }

    #[test]
    fn test_core_has_three_branches() {
        let catalog = default_skill_catalog();
        assert_eq!(catalog.dependents("core_systems").len(), 3);
    }
}
