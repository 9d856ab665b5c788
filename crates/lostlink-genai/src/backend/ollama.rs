//! Ollama HTTP backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationOptions, TextGenerator};
use crate::{GenError, Result};

/// Backend that prompts a model served by an Ollama-compatible endpoint.
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: RequestOptions,
}

#[derive(Serialize)]
struct RequestOptions {
    num_predict: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaBackend {
    /// Create a backend for the given base URL (e.g. `http://localhost:11434`)
    /// and model name.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let base_url: String = base_url.into();
        let model: String = model.into();

        if model.is_empty() {
            return Err(GenError::Config("model name is empty".to_string()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaBackend {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: RequestOptions {
                num_predict: options.max_tokens,
                temperature: options.temperature,
            },
        };

        debug!(
            "Requesting up to {} tokens from {}",
            options.max_tokens, self.model
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenError::MalformedResponse(e.to_string()))?;

        if body.response.trim().is_empty() {
            return Err(GenError::EmptyResponse);
        }

        Ok(body.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_model() {
        assert!(OllamaBackend::new("http://localhost:11434", "").is_err());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let backend = OllamaBackend::new("http://localhost:11434/", "phi").unwrap();
        assert_eq!(backend.base_url, "http://localhost:11434");
        assert_eq!(backend.model_name(), "phi");
    }
}
