//! Prompt templates for generative extraction.

use crate::models::record::PostType;

/// Render the text-extraction prompt for a post type and description
/// excerpt.
pub fn text_extraction(post_type: Option<PostType>, excerpt: &str) -> String {
    let post_type = post_type.map_or("lost or found", |p| p.label());
    format!(
        r#"Extract item details from this {post_type} item description.

Text: "{excerpt}"

Extract the following information as JSON:
- title: A short descriptive title for the item
- category: One of [electronics, documents, accessories, clothing, bags, keys, pets, jewelry, sports, books, toys, medical, instruments, other]
- attributes: Object with color, brand, model, size, material if mentioned
- location: Object with description, city if mentioned
- date: Date when lost/found if mentioned

Return ONLY valid JSON, no explanation."#
    )
}
