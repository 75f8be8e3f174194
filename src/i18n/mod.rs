//! Interface translations (English and Norwegian)

pub mod translator;

pub use translator::{Language, Translator, I18nError};
