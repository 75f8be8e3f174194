//! Skill point allocation
//!
//! Tracks which skills are unlocked against a point budget and enforces
//! the prerequisite rules when unlocking or relearning.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::skills::{SkillCatalog, SkillId, SkillNode};

/// Why a toggle was rejected. The allocation is unchanged in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("unknown skill '{0}'")]
    UnknownSkill(SkillId),
    #[error("skill '{0}' is not available to unlock")]
    Unavailable(SkillId),
    #[error("cannot relearn '{skill}': other skills depend on it ({})", .dependents.join(", "))]
    DependencyConflict {
        skill: SkillId,
        dependents: Vec<SkillId>,
    },
}

/// What a successful toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Skill was unlocked, spending one point
    Unlocked,
    /// Skill was relearned, refunding one point
    Relearned,
}

/// Derived per-node state for drawing the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Locked and not currently eligible
    Locked,
    /// Locked but eligible to unlock
    Available,
    Unlocked,
}

impl NodeState {
    pub fn name(&self) -> &'static str {
        match self {
            NodeState::Locked => "Locked",
            NodeState::Available => "Available",
            NodeState::Unlocked => "Unlocked",
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            NodeState::Locked => (90, 96, 110),
            NodeState::Available => (103, 232, 249),
            NodeState::Unlocked => (34, 211, 238),
        }
    }
}

/// Session allocation: unlocked skill IDs plus the point budget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAllocation {
    unlocked: BTreeSet<SkillId>,
    budget: u32,
}

impl SkillAllocation {
    pub fn new(budget: u32) -> Self {
        Self {
            unlocked: BTreeSet::new(),
            budget,
        }
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    pub fn unlocked(&self) -> impl Iterator<Item = &str> {
        self.unlocked.iter().map(String::as_str)
    }

    /// Points currently spent (one per unlocked skill)
    pub fn spent(&self) -> u32 {
        self.unlocked.len() as u32
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn remaining(&self) -> u32 {
        self.budget.saturating_sub(self.spent())
    }
}

/// The allocation engine: an immutable catalog plus the mutable allocation
#[derive(Debug, Clone)]
pub struct SkillPlanner {
    catalog: SkillCatalog,
    allocation: SkillAllocation,
}

impl SkillPlanner {
    pub fn new(catalog: SkillCatalog, budget: u32) -> Self {
        Self {
            catalog,
            allocation: SkillAllocation::new(budget),
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn allocation(&self) -> &SkillAllocation {
        &self.allocation
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.allocation.is_unlocked(id)
    }

    /// Check if a skill can be unlocked right now
    pub fn is_available(&self, id: &str) -> bool {
        self.catalog
            .get(id)
            .is_some_and(|node| self.node_available(node))
    }

    fn node_available(&self, node: &SkillNode) -> bool {
        !self.allocation.is_unlocked(&node.id)
            && self.allocation.spent() < self.allocation.budget
            && node
                .prereq
                .as_deref()
                .map_or(true, |prereq| self.allocation.is_unlocked(prereq))
    }

    /// Tri-state classification of a node, computed from the current allocation
    pub fn node_state(&self, id: &str) -> NodeState {
        if self.allocation.is_unlocked(id) {
            NodeState::Unlocked
        } else if self.is_available(id) {
            NodeState::Available
        } else {
            NodeState::Locked
        }
    }

    /// Whether the edge into `id` from its prerequisite should be highlighted
    pub fn is_path_unlocked(&self, id: &str) -> bool {
        self.catalog
            .prerequisite(id)
            .is_some_and(|prereq| self.allocation.is_unlocked(prereq) && self.allocation.is_unlocked(id))
    }

    /// Dependents of `id` that are themselves unlocked
    pub fn unlocked_dependents(&self, id: &str) -> Vec<SkillId> {
        self.catalog
            .dependents(id)
            .iter()
            .filter(|dep| self.allocation.is_unlocked(dep))
            .cloned()
            .collect()
    }

    /// Unlock a locked skill or relearn an unlocked one
    pub fn toggle(&mut self, id: &str) -> Result<Toggle, AllocationError> {
        let node = self
            .catalog
            .get(id)
            .ok_or_else(|| AllocationError::UnknownSkill(id.to_string()))?;

        if self.allocation.is_unlocked(id) {
            let dependents = self.unlocked_dependents(id);
            if !dependents.is_empty() {
                return Err(AllocationError::DependencyConflict {
                    skill: id.to_string(),
                    dependents,
                });
            }
            self.allocation.unlocked.remove(id);
            log::debug!("Relearned skill {} ({} points spent)", id, self.allocation.spent());
            Ok(Toggle::Relearned)
        } else if self.node_available(node) {
            self.allocation.unlocked.insert(node.id.clone());
            log::debug!("Unlocked skill {} ({} points spent)", id, self.allocation.spent());
            Ok(Toggle::Unlocked)
        } else {
            Err(AllocationError::Unavailable(id.to_string()))
        }
    }

    /// Relearn everything. The budget is kept.
    pub fn reset(&mut self) {
        self.allocation.unlocked.clear();
    }

    /// Raise the budget; nothing is unlocked by this alone
    pub fn grant_points(&mut self, points: u32) {
        self.allocation.budget = self.allocation.budget.saturating_add(points);
    }
}
