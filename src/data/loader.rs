//! RON data loader
//!
//! Loads catalog data from external RON files, with fallback to the
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::items::Build;
use crate::progression::{CatalogError, SkillCatalog, SkillNode};
use crate::quests::Quest;
use super::builds::default_builds;
use super::quests::default_quests;
use super::skills::{default_skill_catalog, default_skill_nodes};

const SKILLS_FILE: &str = "skills.ron";
const BUILDS_FILE: &str = "builds.ron";
const QUESTS_FILE: &str = "quests.ron";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize {name}: {source}")]
    Serialize {
        name: &'static str,
        source: ron::Error,
    },
    #[error("invalid skill tree: {0}")]
    InvalidCatalog(#[from] CatalogError),
}

/// All static content the companion works with
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Skill tree
    pub skills: SkillCatalog,
    /// Example builds
    pub builds: Vec<Build>,
    /// Quest definitions with their starting status
    pub quests: Vec<Quest>,
}

impl DataManager {
    /// Load data from `dir`, falling back per file to the defaults
    pub fn load(dir: &Path) -> Self {
        let skills = match Self::load_skills(dir) {
            Ok(Some(catalog)) => catalog,
            Ok(None) => default_skill_catalog(),
            Err(e) => {
                log::warn!("{}. Using default skill tree.", e);
                default_skill_catalog()
            }
        };
        let builds = Self::load_or_default(dir, BUILDS_FILE, default_builds);
        let quests = Self::load_or_default(dir, QUESTS_FILE, default_quests);

        log::info!(
            "Loaded {} skills, {} builds, {} quests",
            skills.len(),
            builds.len(),
            quests.len()
        );

        Self {
            skills,
            builds,
            quests,
        }
    }

    /// Load and validate the skill tree
    fn load_skills(dir: &Path) -> Result<Option<SkillCatalog>, DataError> {
        let Some(nodes) = read_ron::<Vec<SkillNode>>(&dir.join(SKILLS_FILE))? else {
            return Ok(None);
        };
        let catalog = SkillCatalog::new(nodes);
        catalog.validate()?;
        Ok(Some(catalog))
    }

    fn load_or_default<T: DeserializeOwned>(dir: &Path, file: &str, default: fn() -> T) -> T {
        match read_ron(&dir.join(file)) {
            Ok(Some(value)) => {
                log::info!("Loaded {} from {:?}", file, dir);
                value
            }
            Ok(None) => default(),
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                default()
            }
        }
    }

    pub fn build(&self, id: u32) -> Option<&Build> {
        self.builds.iter().find(|b| b.id == id)
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            skills: default_skill_catalog(),
            builds: default_builds(),
            quests: default_quests(),
        }
    }
}

/// Read a RON file. A missing file is `Ok(None)`.
fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, DataError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content)
        .map(Some)
        .map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn write_ron<T: Serialize>(dir: &Path, file: &'static str, value: &T) -> Result<(), DataError> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|source| DataError::Serialize { name: file, source })?;
    let path = dir.join(file);
    fs::write(&path, text).map_err(|source| DataError::Write { path, source })
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(dir: &Path) -> Result<(), DataError> {
    fs::create_dir_all(dir).map_err(|source| DataError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    write_ron(dir, SKILLS_FILE, &default_skill_nodes())?;
    write_ron(dir, BUILDS_FILE, &default_builds())?;
    write_ron(dir, QUESTS_FILE, &default_quests())?;

    log::info!("Exported default data to {:?}", dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = DataManager::load(&dir.path().join("nothing-here"));
        assert_eq!(manager.skills.len(), 13);
        assert_eq!(manager.builds.len(), 3);
        assert_eq!(manager.quests.len(), 4);
    }

    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let result = export_default_data(dir.path());
        assert!(result.is_ok(), "Failed to export default data: {:?}", result.err());

        assert!(dir.path().join(SKILLS_FILE).exists(), "skills.ron not created");
        assert!(dir.path().join(BUILDS_FILE).exists(), "builds.ron not created");
        assert!(dir.path().join(QUESTS_FILE).exists(), "quests.ron not created");

        let manager = DataManager::load(dir.path());
        assert_eq!(manager.skills.nodes(), default_skill_nodes().as_slice());
        assert_eq!(manager.builds, default_builds());
        assert_eq!(manager.quests, default_quests());
    }

    #[test]
    fn test_custom_skill_file() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = vec![
            SkillNode::new("a", "Alpha", "first"),
            SkillNode::new("b", "Beta", "second").requires("a"),
        ];
        write_ron(dir.path(), SKILLS_FILE, &nodes).unwrap();

        let manager = DataManager::load(dir.path());
        assert_eq!(manager.skills.len(), 2);
        assert_eq!(manager.skills.prerequisite("b"), Some("a"));
    }

    #[test]
    fn test_cyclic_skill_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = vec![
            SkillNode::new("a", "Alpha", "").requires("b"),
            SkillNode::new("b", "Beta", "").requires("a"),
        ];
        write_ron(dir.path(), SKILLS_FILE, &nodes).unwrap();

        assert!(matches!(
            DataManager::load_skills(dir.path()),
            Err(DataError::InvalidCatalog(CatalogError::Cycle(_)))
        ));
        assert_eq!(DataManager::load(dir.path()).skills.len(), 13);
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUESTS_FILE), "this is not ron (").unwrap();

        let manager = DataManager::load(dir.path());
        assert_eq!(manager.quests, default_quests());
    }
}
