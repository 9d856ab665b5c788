//! Item record extraction module.

pub mod merge;
mod orchestrator;
pub mod rules;

pub use orchestrator::ItemExtractor;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
