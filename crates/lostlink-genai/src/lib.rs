//! Text generation abstraction layer for lostlink.
//!
//! This crate provides a unified interface for prompting a generative text
//! model. The extraction core treats the generator as an optional capability
//! injected at construction time: any [`TextGenerator`] implementation can be
//! plugged in, and the bundled backend talks to an Ollama-compatible HTTP
//! endpoint.

mod backend;
mod error;

pub use backend::{GenerationOptions, TextGenerator};
pub use error::GenError;

#[cfg(feature = "ollama")]
pub use backend::ollama::OllamaBackend;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
