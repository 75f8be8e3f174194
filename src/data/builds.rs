//! Built-in equipment table and example builds

use std::collections::HashMap;

use crate::items::{Build, Equipment, EquipmentKind, Raider, Rarity};

/// Equipment keyed by ID
pub fn default_equipment() -> HashMap<String, Equipment> {
    let items = vec![
        // Weapons
        Equipment::new("starfall", EquipmentKind::Weapon, "R-36 \"Starfall\"", Rarity::Rare)
            .with_description("A versatile assault rifle, effective at most ranges. The backbone of any squad.")
            .with_stat("damage", 32)
            .with_stat("rpm", 600)
            .with_stat("magazine", 30)
            .with_stat("range", 75),
        Equipment::new("javelin", EquipmentKind::Weapon, "T-04 \"Javelin\"", Rarity::Epic)
            .with_description("Precision energy rifle that charges up to release a devastating beam.")
            .with_stat("damage", 150)
            .with_stat_text("rpm", "Charge")
            .with_stat("magazine", 5)
            .with_stat("range", 200),
        Equipment::new("halberd", EquipmentKind::Weapon, "L-86 \"Halberd\"", Rarity::Rare)
            .with_description("Heavy machine gun capable of laying down withering suppressive fire.")
            .with_stat("damage", 45)
            .with_stat("rpm", 450)
            .with_stat("magazine", 100)
            .with_stat("range", 90),
        Equipment::new("katana", EquipmentKind::Weapon, "K-22 \"Katana\"", Rarity::Uncommon)
            .with_description("A deadly close-range SMG that shreds armor.")
            .with_stat("damage", 24)
            .with_stat("rpm", 900)
            .with_stat("magazine", 40)
            .with_stat("range", 40),

        // Gadgets
        Equipment::new("shield_dome", EquipmentKind::Gadget, "Shield Dome", Rarity::Epic)
            .with_description("Deploys a large, stationary energy barrier that blocks incoming projectiles."),
        Equipment::new("stasis_grenade", EquipmentKind::Gadget, "Stasis Grenade", Rarity::Rare)
            .with_description("A thrown device that creates a field, slowing all enemies caught inside."),
        Equipment::new("grapple_hook", EquipmentKind::Gadget, "Grapple Hook", Rarity::Uncommon)
            .with_description("Allows for rapid vertical and horizontal traversal of the environment."),

        // Armor
        Equipment::new("raider_armor", EquipmentKind::Armor, "Standard Issue Raider Plating", Rarity::Common)
            .with_description("Customizable armor plating, balanced for mobility and protection."),
    ];

    items.into_iter().map(|item| (item.id.clone(), item)).collect()
}

pub fn default_builds() -> Vec<Build> {
    let table = default_equipment();
    let pick = |ids: &[&str]| -> Vec<Equipment> {
        ids.iter().filter_map(|id| table.get(*id).cloned()).collect()
    };

    vec![
        Build {
            id: 1,
            name: "Apex Predator".to_string(),
            raider: Raider::Celeste,
            description: "A highly mobile build for Celeste, focusing on flanking and high-value target elimination from any range.".to_string(),
            equipment: pick(&["starfall", "javelin", "grapple_hook"]),
        },
        Build {
            id: 2,
            name: "Ironclad Defender".to_string(),
            raider: Raider::Isabel,
            description: "An area-denial build for Isabel, designed to hold the line and protect the squad with heavy fire and defensive gadgets.".to_string(),
            equipment: pick(&["halberd", "raider_armor", "shield_dome"]),
        },
        Build {
            id: 3,
            name: "Shock Trooper".to_string(),
            raider: Raider::Lance,
            description: "An aggressive, close-quarters build for Lance that uses speed and crowd control to disrupt enemy formations.".to_string(),
            equipment: pick(&["katana", "raider_armor", "stasis_grenade"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_build_has_full_loadout() {
        for build in default_builds() {
            assert_eq!(build.equipment.len(), 3, "{} is missing equipment", build.name);
        }
    }

    #[test]
    fn test_equipment_table() {
        let table = default_equipment();
        assert_eq!(table.len(), 8);
        assert_eq!(table["javelin"].rarity, Rarity::Epic);
    }
}
