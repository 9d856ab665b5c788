//! Extraction orchestrator combining rules and optional enhancement.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::enhance::GenerativeEnhancer;
use crate::error::ExtractionError;
use crate::models::record::{
    Category, ConfidenceScores, DetectedObject, PartialRecord, PostType, StructuredRecord,
};
use crate::ocr;

use super::merge::{merge_into_record, merge_partial};
use super::rules;
use super::rules::patterns::{HASHTAG, MENTION, RETWEET, URL, WHITESPACE};
use super::Result;

/// Keywords counted toward a lost classification.
const LOST_KEYWORDS: &[&str] = &[
    "lost",
    "missing",
    "misplaced",
    "left behind",
    "dropped",
    "can't find",
    "cannot find",
    "stolen",
];

/// Keywords counted toward a found classification.
const FOUND_KEYWORDS: &[&str] = &[
    "found",
    "discovered",
    "picked up",
    "came across",
    "turned in",
    "recovered",
];

/// Minimum stripped text length accepted for full extraction.
const MIN_TEXT_LEN: usize = 10;

/// Maximum length of the cleaned description.
const MAX_DESCRIPTION_LEN: usize = 1000;

/// Extracts structured item records from text and image-pipeline outputs.
///
/// Stateless per call: each invocation is a pure function of its inputs and
/// the injected capabilities. The optional generative enhancer is the only
/// suspension point; its absence means rule-based-only output, which is
/// fully functional on its own.
pub struct ItemExtractor {
    enhancer: Option<GenerativeEnhancer>,
    min_text_len: usize,
}

impl ItemExtractor {
    /// Create an extractor with rule-based extraction only.
    pub fn new() -> Self {
        Self {
            enhancer: None,
            min_text_len: MIN_TEXT_LEN,
        }
    }

    /// Attach a generative enhancer.
    pub fn with_enhancer(mut self, enhancer: GenerativeEnhancer) -> Self {
        self.enhancer = Some(enhancer);
        self
    }

    /// Override the minimum accepted text length.
    pub fn with_min_text_len(mut self, min: usize) -> Self {
        self.min_text_len = min;
        self
    }

    /// Extract a structured record from a free-text description.
    ///
    /// Rejects input shorter than the minimum length before any extraction
    /// work begins. A failing or absent generative backend never surfaces
    /// here: the deterministic path always produces a complete record.
    pub async fn extract_from_text(
        &self,
        text: &str,
        post_type: Option<PostType>,
    ) -> Result<StructuredRecord> {
        let stripped_len = text.trim().chars().count();
        if stripped_len < self.min_text_len {
            return Err(ExtractionError::TextTooShort {
                len: stripped_len,
                min: self.min_text_len,
            });
        }

        info!("Extracting record from {} characters of text", text.len());

        let mut partial = rules::extract(text);

        if let Some(enhancer) = &self.enhancer {
            let enhanced = enhancer.enhance(text, post_type).await;
            if enhanced.is_empty() {
                debug!("Generative enhancement contributed nothing");
            }
            partial = merge_partial(partial, enhanced);
        }

        let post_type = post_type.unwrap_or_else(|| classify_post_type(text));
        let record = self.assemble(text, post_type, partial);

        debug!(
            "Extracted {} record in category {} with overall confidence {:.2}",
            record.post_type.label(),
            record.category,
            record.confidence_scores.overall
        );

        Ok(record)
    }

    /// Build a partial record from vision and OCR collaborator outputs.
    ///
    /// `detected_objects` is expected sorted by descending confidence; the
    /// highest-confidence object drives title and category.
    pub fn extract_from_image(
        &self,
        detected_objects: &[DetectedObject],
        ocr_text: Option<&str>,
    ) -> PartialRecord {
        let mut partial = PartialRecord::default();

        if let Some(primary) = detected_objects.first() {
            partial.title = Some(rules::title_case(&primary.label));
            if primary.category != Category::Other {
                partial.category = Some(primary.category);
            }

            let names: Vec<&str> = detected_objects
                .iter()
                .take(3)
                .map(|o| o.label.as_str())
                .collect();
            partial.description = Some(format!("Image shows: {}", names.join(", ")));
        }

        if let Some(text) = ocr_text {
            for (key, value) in ocr::extract_identifiers(text) {
                partial.attributes.insert(key, value);
            }
        }

        partial.detected_objects = detected_objects.to_vec();
        partial.extracted_text = ocr_text.map(str::to_string);

        partial
    }

    /// Merge a text-derived record with an image-derived partial record.
    ///
    /// The text record is authoritative; the image record fills gaps, except
    /// for attributes (accumulated) and the image-pipeline fields (always
    /// taken from the image side). Confidence scores are not recomputed.
    pub fn merge_extractions(
        &self,
        text_record: &StructuredRecord,
        image_record: &PartialRecord,
    ) -> StructuredRecord {
        merge_into_record(text_record, image_record)
    }

    fn assemble(&self, text: &str, post_type: PostType, partial: PartialRecord) -> StructuredRecord {
        let category = partial.category.unwrap_or_default();
        let title = partial
            .title
            .clone()
            .unwrap_or_else(|| rules::truncate_chars(text.trim(), rules::TITLE_EXCERPT_LEN));
        let clean = clean_description(text);
        let tags = build_tags(category, &partial, &title);
        let confidence_scores = score_confidence(&title, category, &partial);

        StructuredRecord {
            post_type,
            category,
            title,
            clean_description: clean.clone(),
            description: clean,
            item_attributes: partial.attributes.clone(),
            attributes: partial.attributes,
            location: partial.location,
            date_time: partial.date.clone(),
            date: partial.date,
            contact_info: partial.contact_info,
            reward: partial.reward,
            tags,
            confidence_scores,
            detected_objects: partial.detected_objects,
            extracted_text: partial.extracted_text,
            original_text: Some(text.to_string()),
        }
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify lost-vs-found by keyword occurrence scoring over the whole text.
///
/// Found wins only on a strictly greater score; ties default to lost.
fn classify_post_type(text: &str) -> PostType {
    let text_lower = text.to_lowercase();
    let lost = keyword_score(&text_lower, LOST_KEYWORDS);
    let found = keyword_score(&text_lower, FOUND_KEYWORDS);

    if found > lost {
        PostType::Found
    } else {
        PostType::Lost
    }
}

fn keyword_score(text_lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .map(|kw| text_lower.matches(kw).count())
        .sum()
}

/// Sanitize a description: collapse whitespace, strip URLs, hashtags,
/// mentions and retweet markers, and cap the length.
///
/// Idempotent: cleaning already-clean text is a no-op. An input that cleans
/// down to nothing falls back to the raw text, truncated.
pub(crate) fn clean_description(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ");
    let without_urls = URL.replace_all(&collapsed, "");
    let without_hashtags = HASHTAG.replace_all(&without_urls, "");
    let without_mentions = MENTION.replace_all(&without_hashtags, "");
    let without_rt = RETWEET.replace_all(&without_mentions, "");
    let recollapsed = WHITESPACE.replace_all(without_rt.trim(), " ");
    let cleaned = rules::truncate_chars(recollapsed.trim(), MAX_DESCRIPTION_LEN);
    let cleaned = cleaned.trim_end().to_string();

    if cleaned.is_empty() {
        rules::truncate_chars(text.trim(), MAX_DESCRIPTION_LEN)
    } else {
        cleaned
    }
}

fn build_tags(category: Category, partial: &PartialRecord, title: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    if category != Category::Other {
        tags.insert(category.as_str().to_string());
    }
    if let Some(color) = partial.attributes.get("color") {
        tags.insert(color.to_lowercase());
    }
    if let Some(brand) = partial.attributes.get("brand") {
        tags.insert(brand.to_lowercase());
    }
    let title_lower = title.to_lowercase();
    if let Some(item) = rules::find_item_type(&title_lower) {
        tags.insert(item.to_string());
    }

    tags
}

fn score_confidence(title: &str, category: Category, partial: &PartialRecord) -> ConfidenceScores {
    let filled = [
        !title.is_empty(),
        category != Category::Other,
        !partial.attributes.is_empty(),
        partial.location.is_some(),
        partial.date.is_some(),
    ]
    .iter()
    .filter(|&&present| present)
    .count();

    ConfidenceScores {
        overall: (filled as f32 / 5.0).clamp(0.0, 1.0),
        category: if category != Category::Other { 0.8 } else { 0.3 },
        title: if title.chars().count() > 5 { 0.9 } else { 0.5 },
    }
}
