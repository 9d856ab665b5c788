//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the lostlink pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LostlinkConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Generative enhancement configuration.
    pub enhancement: EnhancementConfig,
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum stripped text length accepted for full extraction.
    pub min_text_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { min_text_len: 10 }
    }
}

/// Generative enhancement configuration.
///
/// Enhancement is off by default; the deterministic path is fully
/// functional on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    /// Enable generative enhancement.
    pub enabled: bool,

    /// Endpoint base URL for the generation backend.
    pub base_url: String,

    /// Model name to prompt.
    pub model: String,

    /// Maximum tokens to request per call.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:11434".to_string(),
            model: "phi".to_string(),
            max_tokens: 200,
            temperature: 0.3,
        }
    }
}

impl LostlinkConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
