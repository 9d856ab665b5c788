//! CLI subcommands.

pub mod batch;
pub mod extract;
pub mod identify;

use std::path::Path;
use std::sync::Arc;

use lostlink_core::{GenerativeEnhancer, ItemExtractor, LostlinkConfig, PostType};
use lostlink_genai::{GenerationOptions, OllamaBackend};

/// Load configuration, falling back to defaults when no file is given.
pub fn load_config(path: Option<&str>) -> anyhow::Result<LostlinkConfig> {
    match path {
        Some(p) => Ok(LostlinkConfig::from_file(Path::new(p))?),
        None => Ok(LostlinkConfig::default()),
    }
}

/// Build an extractor from config plus command-line overrides.
///
/// An Ollama URL on the command line enables enhancement even when the
/// config has it disabled; without either, the extractor is rule-based
/// only.
pub fn build_extractor(
    config: &LostlinkConfig,
    ollama_url: Option<&str>,
    model: Option<&str>,
) -> anyhow::Result<ItemExtractor> {
    let mut extractor = ItemExtractor::new().with_min_text_len(config.extraction.min_text_len);

    let enhancement = &config.enhancement;
    let url = ollama_url
        .map(str::to_string)
        .or_else(|| enhancement.enabled.then(|| enhancement.base_url.clone()));

    if let Some(url) = url {
        let model = model.unwrap_or(&enhancement.model);
        let backend = OllamaBackend::new(url, model)?;
        let options = GenerationOptions {
            max_tokens: enhancement.max_tokens,
            temperature: enhancement.temperature,
        };
        let enhancer = GenerativeEnhancer::new(Arc::new(backend)).with_options(options);
        extractor = extractor.with_enhancer(enhancer);
    }

    Ok(extractor)
}

/// Parse a post type argument.
pub fn parse_post_type(s: &str) -> anyhow::Result<PostType> {
    PostType::parse(s)
        .ok_or_else(|| anyhow::anyhow!("invalid post type: {} (expected lost or found)", s))
}
