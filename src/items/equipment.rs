//! Equipment definitions
//!
//! Weapons, armor and gadgets that make up a build's loadout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
}

impl Rarity {
    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Rarity::Common => (200, 200, 200),
            Rarity::Uncommon => (100, 255, 100),
            Rarity::Rare => (100, 150, 255),
            Rarity::Epic => (200, 100, 255),
        }
    }

    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
        }
    }
}

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    Weapon,
    Armor,
    Gadget,
}

impl EquipmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentKind::Weapon => "Weapon",
            EquipmentKind::Armor => "Armor",
            EquipmentKind::Gadget => "Gadget",
        }
    }
}

/// A stat value: most are numeric, some weapons use a label (e.g. "Charge")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatValue {
    Number(i32),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Named stat line, kept in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: StatValue,
}

/// A piece of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub kind: EquipmentKind,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl Equipment {
    pub fn new(id: &str, kind: EquipmentKind, name: &str, rarity: Rarity) -> Self {
        Self {
            id: id.to_string(),
            kind,
            name: name.to_string(),
            description: String::new(),
            rarity,
            stats: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Append a numeric stat
    pub fn with_stat(mut self, name: &str, value: i32) -> Self {
        self.stats.push(Stat {
            name: name.to_string(),
            value: StatValue::Number(value),
        });
        self
    }

    /// Append a labelled stat
    pub fn with_stat_text(mut self, name: &str, value: &str) -> Self {
        self.stats.push(Stat {
            name: name.to_string(),
            value: StatValue::Text(value.to_string()),
        });
        self
    }

    /// Look up a stat by name
    pub fn stat(&self, name: &str) -> Option<&StatValue> {
        self.stats.iter().find(|s| s.name == name).map(|s| &s.value)
    }

    /// "damage: 32, rpm: 600" style summary, empty if no stats
    pub fn stats_summary(&self) -> String {
        self.stats
            .iter()
            .map(|s| format!("{}: {}", s.name, s.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
