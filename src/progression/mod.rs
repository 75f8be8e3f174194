//! Progression systems
//!
//! The skill tree: a static catalog of nodes and the point allocation
//! planned against it.

pub mod skills;
pub mod allocation;

pub use skills::{SkillId, SkillNode, SkillIcon, SkillCatalog, CatalogError};
pub use allocation::{SkillPlanner, SkillAllocation, AllocationError, NodeState, Toggle};
