//! Equipment and builds

pub mod equipment;
pub mod build;

pub use equipment::{Equipment, EquipmentKind, Rarity, Stat, StatValue};
pub use build::{Build, Raider};
