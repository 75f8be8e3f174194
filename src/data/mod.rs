//! Data loading and built-in content
//!
//! The skill tree, builds and quests ship as defaults and can be replaced
//! by RON files in the data directory.

pub mod loader;
pub mod skills;
pub mod builds;
pub mod quests;

pub use loader::{DataManager, DataError, export_default_data};
pub use skills::{default_skill_catalog, default_skill_nodes};
pub use builds::{default_builds, default_equipment};
pub use quests::default_quests;
