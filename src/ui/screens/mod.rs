//! Per-view screens

pub mod skill_tree;
pub mod builds;
pub mod quests;
