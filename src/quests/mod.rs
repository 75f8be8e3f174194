//! Quest tracking

pub mod tracker;

pub use tracker::{Quest, QuestLog, QuestStatus, Faction};
