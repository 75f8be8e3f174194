//! Configuration
//!
//! Read from `config.ron` in the platform config directory, then
//! overridden by environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::DEFAULT_MODEL;
use crate::i18n::Language;

/// Skill points available at the start of a session
pub const DEFAULT_TOTAL_POINTS: u32 = 20;

const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface language
    pub language: Language,
    /// Starting skill point budget
    pub total_points: u32,
    /// Text-generation model used for build analysis
    pub model: String,
    /// API key for the analysis service
    pub api_key: Option<String>,
    /// Directory with skills.ron / builds.ron / quests.ron overrides
    pub data_dir: PathBuf,
    /// Directory with en.json / no.json overrides
    pub locale_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            total_points: DEFAULT_TOTAL_POINTS,
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            data_dir: PathBuf::from("assets/data"),
            locale_dir: None,
        }
    }
}

impl Config {
    /// Load the user config (or defaults) and apply environment overrides
    pub fn load() -> Self {
        let path = config_path();
        let mut config = if path.exists() {
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Config loaded from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("{}, using defaults", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `RAIDPLANNER_*` and API key variables, looked up through `var`
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(code) = var("RAIDPLANNER_LANG") {
            match Language::from_code(&code) {
                Some(lang) => self.language = lang,
                None => log::warn!("Ignoring unknown language '{}'", code),
            }
        }
        if let Some(points) = var("RAIDPLANNER_POINTS") {
            match points.trim().parse() {
                Ok(points) => self.total_points = points,
                Err(_) => log::warn!("Ignoring invalid RAIDPLANNER_POINTS '{}'", points),
            }
        }
        if let Some(dir) = var("RAIDPLANNER_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(model) = var("RAIDPLANNER_MODEL") {
            self.model = model;
        }
        if let Some(key) = var("GEMINI_API_KEY").or_else(|| var("API_KEY")) {
            self.api_key = Some(key);
        }
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "raidplanner", "Raidplanner") {
        proj_dirs.config_dir().join(CONFIG_FILE)
    } else {
        PathBuf::from(".").join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.total_points, 20);
        assert_eq!(config.language, Language::No);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("RAIDPLANNER_LANG", "en"),
            ("RAIDPLANNER_POINTS", "12"),
            ("API_KEY", "secret"),
        ]));
        assert_eq!(config.language, Language::En);
        assert_eq!(config.total_points, 12);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_gemini_key_preferred() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("API_KEY", "generic"), ("GEMINI_API_KEY", "gemini")]));
        assert_eq!(config.api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn test_bad_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("RAIDPLANNER_LANG", "xx"), ("RAIDPLANNER_POINTS", "-3")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "(language: En, total_points: 30)").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.total_points, 30);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_unparsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not ron at all (").unwrap();
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse { .. })));
    }
}
