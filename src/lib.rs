//! Raidplanner - a terminal companion for extraction raiders
//!
//! Plan skill points, study example builds and keep track of quests.

pub mod progression;
pub mod items;
pub mod quests;
pub mod data;
pub mod i18n;
pub mod analysis;
pub mod config;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use progression::{SkillCatalog, SkillNode, SkillPlanner, AllocationError, NodeState};
pub use session::{Session, Screen, View};
