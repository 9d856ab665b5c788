//! Core library for lost & found item intake.
//!
//! This crate turns free-text item descriptions (and image-pipeline outputs)
//! into normalized structured records:
//! - Rule-based extraction: category taxonomy, colors, brands, locations,
//!   dates, contact info, rewards, titles
//! - Optional generative-model enhancement with graceful degradation
//! - Deterministic merging of partial records with a fixed precedence policy
//! - Confidence scoring derived from field completeness

pub mod enhance;
pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod vision;

pub use enhance::GenerativeEnhancer;
pub use error::{ExtractionError, LostlinkError, Result};
pub use extract::merge::merge_partial;
pub use extract::ItemExtractor;
pub use models::config::LostlinkConfig;
pub use models::record::{
    BoundingBox, Category, ConfidenceScores, ContactInfo, DetectedObject, Location, PartialRecord,
    PostType, StructuredRecord,
};

/// Re-export generation types.
pub use lostlink_genai::{GenerationOptions, TextGenerator};
