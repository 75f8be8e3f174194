//! UI widgets and layout helpers

pub mod layout;

pub use layout::{centered_rect, rgb, truncate_name};
