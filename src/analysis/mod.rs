//! Build analysis through an external text-generation service

pub mod client;
pub mod task;

pub use client::{BuildAnalyst, GeminiClient, AnalysisError, DEFAULT_MODEL};
pub use task::{AnalysisTask, AnalysisState};
