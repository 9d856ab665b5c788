//! Generative enhancement of rule-based extraction results.
//!
//! Enhancement is strictly best-effort. The public signature is infallible:
//! every failure along the way (backend error, unparsable response) degrades
//! to an empty contribution, logged as a diagnostic and never surfaced to
//! the caller.

pub mod prompts;

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use lostlink_genai::{GenError, GenerationOptions, TextGenerator};

use crate::extract::rules::patterns::{JSON_OBJECT, LLM_BRAND, LLM_CATEGORY, LLM_COLOR, LLM_TITLE};
use crate::models::record::{Category, Location, PartialRecord, PostType};

/// Maximum number of input characters forwarded in the prompt.
const MAX_INPUT_CHARS: usize = 1000;

/// Attribute keys accepted from a generative response.
const ATTRIBUTE_KEYS: &[&str] = &["color", "brand", "model", "size", "material"];

/// Prompts a generative model and parses its response into a partial record.
pub struct GenerativeEnhancer {
    generator: Arc<dyn TextGenerator>,
    options: GenerationOptions,
}

impl GenerativeEnhancer {
    /// Create an enhancer around an injected generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            options: GenerationOptions::default(),
        }
    }

    /// Override generation options.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Enhance a description with the generative model.
    ///
    /// Always returns a record; failures contribute nothing. A single
    /// attempt is made per call, with no retries.
    pub async fn enhance(&self, text: &str, post_type: Option<PostType>) -> PartialRecord {
        match self.try_enhance(text, post_type).await {
            Ok(record) => record,
            Err(e) => {
                debug!("Generative enhancement skipped: {}", e);
                PartialRecord::default()
            }
        }
    }

    async fn try_enhance(
        &self,
        text: &str,
        post_type: Option<PostType>,
    ) -> Result<PartialRecord, GenError> {
        let excerpt: String = text.chars().take(MAX_INPUT_CHARS).collect();
        let prompt = prompts::text_extraction(post_type, &excerpt);
        let response = self.generator.generate(&prompt, &self.options).await?;
        Ok(parse_response(&response))
    }
}

/// Parse a generative response: a JSON object substring first, then a
/// line-oriented key:value fallback.
pub(crate) fn parse_response(response: &str) -> PartialRecord {
    if let Some(m) = JSON_OBJECT.find(response) {
        if let Ok(value) = serde_json::from_str::<Value>(m.as_str()) {
            return from_json(&value);
        }
    }
    from_lines(response)
}

/// Tolerant typed conversion of a parsed JSON object. Junk-valued fields
/// are ignored rather than rejected.
fn from_json(value: &Value) -> PartialRecord {
    let mut record = PartialRecord::default();

    record.title = string_field(value, "title");
    record.category = string_field(value, "category")
        .and_then(|c| Category::parse(&c))
        .filter(|c| *c != Category::Other);
    record.date = string_field(value, "date");

    if let Some(attrs) = value.get("attributes").and_then(Value::as_object) {
        for (key, val) in attrs {
            if let Some(s) = val.as_str() {
                let s = s.trim();
                if !s.is_empty() {
                    record.attributes.insert(key.clone(), s.to_string());
                }
            }
        }
    }
    // Models sometimes flatten attribute keys to the top level.
    for key in ATTRIBUTE_KEYS {
        if !record.attributes.contains_key(*key) {
            if let Some(s) = string_field(value, key) {
                record.attributes.insert((*key).to_string(), s);
            }
        }
    }

    match value.get("location") {
        Some(Value::Object(loc)) => {
            let description = loc
                .get("description")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty());
            if let Some(description) = description {
                let city = loc
                    .get("city")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from);
                record.location = Some(Location {
                    description: description.to_string(),
                    city,
                });
            }
        }
        Some(Value::String(s)) if !s.trim().is_empty() => {
            record.location = Some(Location {
                description: s.trim().to_string(),
                city: None,
            });
        }
        _ => {}
    }

    record
}

/// Line-oriented fallback for responses that are not valid JSON.
fn from_lines(response: &str) -> PartialRecord {
    let mut record = PartialRecord::default();

    if let Some(caps) = LLM_TITLE.captures(response) {
        record.title = non_empty(&caps[1]);
    }
    if let Some(caps) = LLM_CATEGORY.captures(response) {
        record.category = Category::parse(caps[1].trim()).filter(|c| *c != Category::Other);
    }
    if let Some(caps) = LLM_COLOR.captures(response) {
        if let Some(color) = non_empty(&caps[1]) {
            record.attributes.insert("color".to_string(), color);
        }
    }
    if let Some(caps) = LLM_BRAND.captures(response) {
        if let Some(brand) = non_empty(&caps[1]) {
            record.attributes.insert("brand".to_string(), brand);
        }
    }

    record
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
