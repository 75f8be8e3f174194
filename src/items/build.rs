//! Builds
//!
//! Example loadouts for each raider, and the prompt used to ask for an
//! analysis of one.

use serde::{Deserialize, Serialize};

use super::equipment::Equipment;

/// Playable raider a build is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Raider {
    Celeste,
    Isabel,
    Lance,
}

impl Raider {
    pub fn name(&self) -> &'static str {
        match self {
            Raider::Celeste => "Celeste",
            Raider::Isabel => "Isabel",
            Raider::Lance => "Lance",
        }
    }
}

/// A named loadout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub id: u32,
    pub name: String,
    pub raider: Raider,
    pub description: String,
    pub equipment: Vec<Equipment>,
}

impl Build {
    /// Natural-language prompt describing this build for the analysis service
    pub fn analysis_prompt(&self) -> String {
        let mut prompt = format!(
            "Analyze the following loadout for the raider {} in a cooperative extraction shooter.\n\
             Build name: {}\n\
             Playstyle: {}\n\
             Equipment:\n",
            self.raider.name(),
            self.name,
            self.description
        );
        for item in &self.equipment {
            prompt.push_str(&format!(
                "- {} ({}, {}): {}",
                item.name,
                item.kind.name(),
                item.rarity.name(),
                item.description
            ));
            let stats = item.stats_summary();
            if !stats.is_empty() {
                prompt.push_str(&format!(" [{}]", stats));
            }
            prompt.push('\n');
        }
        prompt.push_str(
            "Describe the strengths and weaknesses of this build, the situations it suits, \
             and one or two concrete suggestions to improve it.",
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::equipment::{EquipmentKind, Rarity};

    #[test]
    fn test_prompt_lists_every_item() {
        let build = Build {
            id: 7,
            name: "Test Build".to_string(),
            raider: Raider::Lance,
            description: "Close quarters".to_string(),
            equipment: vec![
                Equipment::new("smg", EquipmentKind::Weapon, "K-22", Rarity::Uncommon)
                    .with_description("Fast")
                    .with_stat("damage", 24),
                Equipment::new("hook", EquipmentKind::Gadget, "Grapple", Rarity::Uncommon),
            ],
        };

        let prompt = build.analysis_prompt();
        assert!(prompt.contains("raider Lance"));
        assert!(prompt.contains("Build name: Test Build"));
        assert!(prompt.contains("- K-22 (Weapon, Uncommon): Fast [damage: 24]"));
        assert!(prompt.contains("- Grapple (Gadget, Uncommon): \n"));
    }

    #[test]
    fn test_prompt_header_lines() {
        let build = Build {
            id: 1,
            name: "Empty".to_string(),
            raider: Raider::Celeste,
            description: "Nothing equipped".to_string(),
            equipment: Vec::new(),
        };

        let prompt = build.analysis_prompt();
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(
            lines[..4],
            [
                "Analyze the following loadout for the raider Celeste in a cooperative extraction shooter.",
                "Build name: Empty",
                "Playstyle: Nothing equipped",
                "Equipment:",
            ]
        );
        assert!(lines[4].starts_with("Describe the strengths"));
    }
}
