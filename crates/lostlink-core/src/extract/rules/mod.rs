//! Rule-based field extraction for item descriptions.

pub mod attributes;
pub mod contact;
pub mod dates;
pub mod location;
pub mod patterns;
pub mod taxonomy;

pub use attributes::{find_brand, find_color, find_item_type, title_case, BRANDS, COLORS, ITEM_TYPES};
pub use contact::{extract_contact, extract_reward};
pub use dates::extract_date;
pub use location::extract_location;
pub use taxonomy::{classify, CATEGORY_KEYWORDS};

use crate::models::record::{Category, PartialRecord};

use patterns::TITLE_EXCLUSION;

/// Maximum length of the excerpt used as a fallback title.
pub(crate) const TITLE_EXCERPT_LEN: usize = 80;

/// Run the full rule-based extraction over a description.
///
/// Pure function of the input text; never fails on any string input.
pub fn extract(text: &str) -> PartialRecord {
    let text_lower = text.to_lowercase();

    let mut record = PartialRecord::default();

    let category = classify(&text_lower);
    if category != Category::Other {
        record.category = Some(category);
    }

    if let Some(color) = find_color(&text_lower) {
        record
            .attributes
            .insert("color".to_string(), color.to_string());
    }
    if let Some(brand) = find_brand(&text_lower) {
        record.attributes.insert("brand".to_string(), brand);
    }

    record.location = extract_location(text);
    record.date = extract_date(text);
    record.contact_info = extract_contact(text);
    record.reward = extract_reward(text);

    let title = build_title(text, &text_lower, &record);
    record.title = if title.is_empty() { None } else { Some(title) };

    record
}

/// Build a title from extracted color/brand/item-type pieces, falling back
/// to a qualifying sentence and finally to a plain excerpt.
fn build_title(text: &str, text_lower: &str, record: &PartialRecord) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(color) = record.attributes.get("color") {
        parts.push(title_case(color));
    }
    if let Some(brand) = record.attributes.get("brand") {
        parts.push(brand.clone());
    }
    if let Some(item) = find_item_type(text_lower) {
        parts.push(title_case(item));
    }

    if !parts.is_empty() {
        return parts.join(" ");
    }

    // No recognizable pieces: take the first sentence that reads like a
    // description rather than contact boilerplate.
    for sentence in text.split('.') {
        let sentence = sentence.trim();
        if sentence.len() > 10 && sentence.len() < 100 && !TITLE_EXCLUSION.is_match(sentence) {
            return sentence.to_string();
        }
    }

    truncate_chars(text.trim(), TITLE_EXCERPT_LEN)
}

/// Truncate to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_full_description() {
        let record =
            extract("Lost my black iPhone near Central Park yesterday, reward $50, call 555-123-4567");

        assert_eq!(record.category, Some(Category::Electronics));
        assert_eq!(record.attributes.get("color").map(String::as_str), Some("black"));
        assert_eq!(record.attributes.get("brand").map(String::as_str), Some("Iphone"));
        assert!(record.title.as_deref().unwrap().contains("Black Iphone"));
        assert!(record
            .location
            .as_ref()
            .unwrap()
            .description
            .contains("Central Park"));
        assert_eq!(record.date.as_deref(), Some("yesterday"));
        assert_eq!(record.reward.as_deref(), Some("$50"));
        assert!(record.contact_info.as_ref().unwrap().phone.is_some());
    }

    #[test]
    fn test_extract_title_pieces_in_order() {
        let record = extract("Found a red Samsung phone on a bench");
        assert_eq!(record.title.as_deref(), Some("Red Samsung Phone"));
    }

    #[test]
    fn test_title_sentence_fallback() {
        let record = extract("A small item went missing near here. Call 555-123-4567.");
        assert_eq!(record.title.as_deref(), Some("A small item went missing near here"));
    }

    #[test]
    fn test_title_excerpt_fallback() {
        let text = "Please call about the thing";
        let record = extract(text);
        assert_eq!(record.title.as_deref(), Some(text));
    }

    #[test]
    fn test_extract_empty_text() {
        let record = extract("");
        assert_eq!(record.category, None);
        assert_eq!(record.title, None);
        assert!(record.attributes.is_empty());
        assert!(record.location.is_none());
    }
}
