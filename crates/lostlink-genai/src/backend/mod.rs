//! Generation backend implementations.

#[cfg(feature = "ollama")]
pub mod ollama;

use async_trait::async_trait;

use crate::Result;

/// Options controlling a single generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            temperature: 0.3,
        }
    }
}

/// Trait for text generation backends.
///
/// Implementations make a single attempt per call: retry and deadline policy
/// belongs to the hosting layer, not to the backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;

    /// Name of the underlying model, for diagnostics.
    fn model_name(&self) -> &str;
}
