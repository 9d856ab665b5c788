//! Error types for the generation layer.

use thiserror::Error;

/// Errors that can occur while invoking a generative model.
#[derive(Error, Debug)]
pub enum GenError {
    /// Backend configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request to the model endpoint failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint response could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The model produced no output.
    #[error("model produced an empty response")]
    EmptyResponse,
}
