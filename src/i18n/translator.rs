//! Translation lookup
//!
//! Dotted keys ("skills.title") are resolved against nested JSON tables.
//! Missing keys fall back to English, then to the key itself.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const BUNDLED_EN: &str = include_str!("../../assets/locales/en.json");
const BUNDLED_NO: &str = include_str!("../../assets/locales/no.json");

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    En,
    #[default]
    No,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::No => "no",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::No => "Norsk",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "no" | "nb" | "nn" => Some(Language::No),
            _ => None,
        }
    }

    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::No,
            Language::No => Language::En,
        }
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read locale {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid locale {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
}

/// Translation tables for every language plus the active one
#[derive(Debug)]
pub struct Translator {
    lang: Language,
    en: Value,
    no: Value,
    /// Keys already reported missing, so the render loop doesn't flood the log
    warned: Mutex<HashSet<String>>,
}

impl Translator {
    pub fn new(lang: Language, en: Value, no: Value) -> Self {
        Self {
            lang,
            en,
            no,
            warned: Mutex::new(HashSet::new()),
        }
    }

    /// Tables compiled into the binary
    pub fn bundled(lang: Language) -> Result<Self, I18nError> {
        Ok(Self::new(
            lang,
            parse_table("en.json", BUNDLED_EN)?,
            parse_table("no.json", BUNDLED_NO)?,
        ))
    }

    /// Tables from `dir/en.json` and `dir/no.json`; a missing file keeps the bundled table
    pub fn from_dir(dir: &Path, lang: Language) -> Result<Self, I18nError> {
        let load = |file: &str, bundled: &str| -> Result<Value, I18nError> {
            let path = dir.join(file);
            if !path.exists() {
                return parse_table(file, bundled);
            }
            let text = fs::read_to_string(&path).map_err(|source| I18nError::Read {
                path: path.clone(),
                source,
            })?;
            log::info!("Loaded locale from {:?}", path);
            parse_table(file, &text)
        };
        Ok(Self::new(
            lang,
            load("en.json", BUNDLED_EN)?,
            load("no.json", BUNDLED_NO)?,
        ))
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn set_language(&mut self, lang: Language) {
        log::info!("Language set to {}", lang.code());
        self.lang = lang;
    }

    fn table(&self, lang: Language) -> &Value {
        match lang {
            Language::En => &self.en,
            Language::No => &self.no,
        }
    }

    /// Translate a key
    pub fn t(&self, key: &str) -> String {
        self.t_args(key, &[])
    }

    /// Translate a key and fill `{name}` placeholders
    pub fn t_args(&self, key: &str, values: &[(&str, &str)]) -> String {
        let found = match lookup(self.table(self.lang), key) {
            Some(text) => Some(text),
            None => {
                let fallback = lookup(&self.en, key);
                if fallback.is_some() && self.lang != Language::En {
                    self.warn_once(key, || {
                        format!(
                            "Translation key \"{}\" not found for language \"{}\". Falling back to English.",
                            key,
                            self.lang.code()
                        )
                    });
                }
                fallback
            }
        };

        let Some(text) = found else {
            self.warn_once(key, || format!("Translation key \"{}\" not found in any language.", key));
            return key.to_string();
        };

        let mut text = text.to_string();
        for (name, value) in values {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    fn warn_once(&self, key: &str, message: impl FnOnce() -> String) {
        if self.warned.lock().insert(key.to_string()) {
            log::warn!("{}", message());
        }
    }
}

fn parse_table(name: &str, text: &str) -> Result<Value, I18nError> {
    serde_json::from_str(text).map_err(|source| I18nError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Walk a dotted key through nested objects; only string leaves count
fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(table, |node, part| node.get(part))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translator(lang: Language) -> Translator {
        Translator::new(
            lang,
            json!({
                "nav": { "quests": "Quests", "builds": "Builds" },
                "skills": { "remaining": "{remaining} / {total}" }
            }),
            json!({
                "nav": { "quests": "Oppdrag" }
            }),
        )
    }

    #[test]
    fn test_nested_lookup() {
        let t = translator(Language::No);
        assert_eq!(t.t("nav.quests"), "Oppdrag");
    }

    #[test]
    fn test_falls_back_to_english() {
        let t = translator(Language::No);
        assert_eq!(t.t("nav.builds"), "Builds");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let t = translator(Language::En);
        assert_eq!(t.t("nav.nowhere"), "nav.nowhere");
        // A non-leaf key isn't a translation
        assert_eq!(t.t("nav"), "nav");
    }

    #[test]
    fn test_placeholders() {
        let t = translator(Language::En);
        assert_eq!(
            t.t_args("skills.remaining", &[("remaining", "18"), ("total", "20")]),
            "18 / 20"
        );
    }

    #[test]
    fn test_switch_language() {
        let mut t = translator(Language::En);
        assert_eq!(t.t("nav.quests"), "Quests");
        t.set_language(t.language().toggled());
        assert_eq!(t.t("nav.quests"), "Oppdrag");
    }

    #[test]
    fn test_bundled_tables_share_keys() {
        let t = Translator::bundled(Language::No).unwrap();
        for key in ["header.title", "skills.conflict", "builds.analysis_error", "quests.completed"] {
            assert!(lookup(&t.en, key).is_some(), "en missing {}", key);
            assert!(lookup(&t.no, key).is_some(), "no missing {}", key);
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("nb"), Some(Language::No));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::default(), Language::No);
    }
}
