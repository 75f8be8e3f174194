//! Skill catalog
//!
//! Static skill nodes and the prerequisite forest that links them.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique skill ID
pub type SkillId = String;

/// Visual family of a skill, used to pick a glyph when drawing the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillIcon {
    #[default]
    Cpu,
    Shield,
    Bolt,
    Eye,
    Target,
    Zap,
    Plus,
}

impl SkillIcon {
    pub fn glyph(&self) -> char {
        match self {
            SkillIcon::Cpu => '◈',
            SkillIcon::Shield => '⛨',
            SkillIcon::Bolt => '↯',
            SkillIcon::Eye => '◉',
            SkillIcon::Target => '⌖',
            SkillIcon::Zap => '⚡',
            SkillIcon::Plus => '✚',
        }
    }
}

/// A single node of the skill tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: SkillId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: SkillIcon,
    /// Skill that must be unlocked first (None for roots)
    #[serde(default)]
    pub prereq: Option<SkillId>,
    /// Presentation grouping only
    pub tier: u8,
    /// Horizontal placement, percent of the tree area
    pub x: u8,
    /// Vertical placement, percent of the tree area
    pub y: u8,
}

impl SkillNode {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: SkillIcon::default(),
            prereq: None,
            tier: 0,
            x: 50,
            y: 50,
        }
    }

    /// Builder-style prerequisite setter
    pub fn requires(mut self, prereq: &str) -> Self {
        self.prereq = Some(prereq.to_string());
        self
    }

    pub fn with_icon(mut self, icon: SkillIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn at(mut self, tier: u8, x: u8, y: u8) -> Self {
        self.tier = tier;
        self.x = x;
        self.y = y;
        self
    }

    pub fn is_root(&self) -> bool {
        self.prereq.is_none()
    }
}

/// Problems found when validating a catalog from an external source
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate skill id '{0}'")]
    DuplicateId(SkillId),
    #[error("skill '{skill}' requires unknown skill '{prereq}'")]
    MissingPrerequisite { skill: SkillId, prereq: SkillId },
    #[error("prerequisite cycle through skill '{0}'")]
    Cycle(SkillId),
}

/// Immutable, ordered collection of skill nodes
///
/// Prerequisites are stored as parent pointers on each node. The reverse
/// (prerequisite -> dependents) lookup is derived on first use.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    nodes: Vec<SkillNode>,
    index: HashMap<SkillId, usize>,
    dependents: OnceLock<HashMap<SkillId, Vec<SkillId>>>,
}

impl SkillCatalog {
    pub fn new(nodes: Vec<SkillNode>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            // First occurrence wins; validate() reports the duplicate
            index.entry(node.id.clone()).or_insert(i);
        }
        Self {
            nodes,
            index,
            dependents: OnceLock::new(),
        }
    }

    /// Find a skill by ID
    pub fn get(&self, id: &str) -> Option<&SkillNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes in catalog order
    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct prerequisite of a skill, if any
    pub fn prerequisite(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|node| node.prereq.as_deref())
    }

    /// Skills naming `id` as their prerequisite, in catalog order
    pub fn dependents(&self, id: &str) -> &[SkillId] {
        self.dependents
            .get_or_init(|| {
                let mut map: HashMap<SkillId, Vec<SkillId>> = HashMap::new();
                for node in &self.nodes {
                    if let Some(prereq) = &node.prereq {
                        map.entry(prereq.clone()).or_default().push(node.id.clone());
                    }
                }
                map
            })
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Root skills (no prerequisite)
    pub fn roots(&self) -> impl Iterator<Item = &SkillNode> {
        self.nodes.iter().filter(|node| node.is_root())
    }

    /// Every prerequisite edge as (prerequisite, dependent)
    pub fn edges(&self) -> impl Iterator<Item = (&SkillNode, &SkillNode)> {
        self.nodes.iter().filter_map(move |node| {
            let prereq = self.get(node.prereq.as_deref()?)?;
            Some((prereq, node))
        })
    }

    /// Check the catalog forms a forest of uniquely named nodes
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(CatalogError::DuplicateId(node.id.clone()));
            }
        }

        for node in &self.nodes {
            if let Some(prereq) = &node.prereq {
                if !self.contains(prereq) {
                    return Err(CatalogError::MissingPrerequisite {
                        skill: node.id.clone(),
                        prereq: prereq.clone(),
                    });
                }
            }
        }

        // With a single parent per node, a walk that revisits a node is a cycle
        for node in &self.nodes {
            let mut visited = HashSet::new();
            let mut current = Some(node.id.as_str());
            while let Some(id) = current {
                if !visited.insert(id) {
                    return Err(CatalogError::Cycle(node.id.clone()));
                }
                current = self.prerequisite(id);
            }
        }

        Ok(())
    }
}

impl From<Vec<SkillNode>> for SkillCatalog {
    fn from(nodes: Vec<SkillNode>) -> Self {
        Self::new(nodes)
    }
}
