//! User Interface module
//!
//! Terminal UI using ratatui.

pub mod app;
pub mod screens;
pub mod widgets;

pub use app::App;
