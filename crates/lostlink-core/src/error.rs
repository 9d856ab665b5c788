//! Error types for the lostlink-core library.

use thiserror::Error;

/// Main error type for the lostlink library.
#[derive(Error, Debug)]
pub enum LostlinkError {
    /// Extraction input error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Generation backend setup error.
    #[error("generation error: {0}")]
    Generation(#[from] lostlink_genai::GenError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised when extraction input fails validation.
///
/// These are caller errors, kept distinct from internal failures so a
/// transport layer can map them to a different response code. Failures in
/// the optional generative enhancement never appear here: enhancement
/// degrades to an empty contribution instead.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input text is below the minimum length for extraction.
    #[error("text too short: {len} characters (minimum {min})")]
    TextTooShort { len: usize, min: usize },

    /// A required input was missing.
    #[error("missing required input: {0}")]
    MissingInput(String),
}

/// Result type for the lostlink library.
pub type Result<T> = std::result::Result<T, LostlinkError>;
