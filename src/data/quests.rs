//! Built-in quests

use crate::quests::{Faction, Quest, QuestStatus};

fn quest(
    id: u32,
    title: &str,
    description: &str,
    status: QuestStatus,
    faction: Faction,
    objectives: &[&str],
    rewards: &[&str],
) -> Quest {
    Quest {
        id,
        title: title.to_string(),
        description: description.to_string(),
        status,
        faction,
        objectives: objectives.iter().map(|s| s.to_string()).collect(),
        rewards: rewards.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn default_quests() -> Vec<Quest> {
    vec![
        quest(
            1,
            "X-Isle Extraction",
            "Intel suggests a high-value data core is in a downed ARC vessel on X-Isle. Secure the asset for the Free Rangers.",
            QuestStatus::Incomplete,
            Faction::FreeRangers,
            &["Reach the crash site", "Defend against ARC waves", "Extract the data core"],
            &["+250 Faction Rep (Free Rangers)", "Uncommon Weapon Mod"],
        ),
        quest(
            2,
            "Forge Sabotage",
            "The Iron Assembly is using a geothermal forge to produce new war machines. Infiltrate the facility and overload the primary converter.",
            QuestStatus::Incomplete,
            Faction::Arc,
            &["Infiltrate the forge undetected", "Plant explosive charges on the converter", "Escape before detonation"],
            &["+300 Faction Rep (ARC)", "Epic Gadget Blueprint"],
        ),
        quest(
            3,
            "Barony Barricade",
            "A massive BAR-L unit is blocking a critical supply route through the Dust Devil Barony. Eliminate it.",
            QuestStatus::Incomplete,
            Faction::FreeRangers,
            &["Locate the BAR-L Behemoth", "Destroy its armor plating", "Eliminate the BAR-L"],
            &["+150 Faction Rep (Free Rangers)", "Rare Armor Plating"],
        ),
        quest(
            4,
            "Supply Run",
            "Recovered a lost medical crate for the Free Rangers camp.",
            QuestStatus::Complete,
            Faction::FreeRangers,
            &["Find the lost crate", "Return it to camp"],
            &["+50 Faction Rep (Free Rangers)"],
        ),
    ]
}
