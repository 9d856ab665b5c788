//! Deterministic merging of partial records.
//!
//! The policy is asymmetric: the base record is authoritative and the
//! overlay only fills gaps. Two exceptions: attributes accumulate (with the
//! overlay winning key collisions) and the image-pipeline fields
//! (`detected_objects`, `extracted_text`) are always taken from the overlay.

use std::collections::BTreeMap;

use crate::models::record::{Category, PartialRecord, StructuredRecord};

/// Merge two partial records under the gap-fill policy.
pub fn merge_partial(base: PartialRecord, overlay: PartialRecord) -> PartialRecord {
    let mut merged = base;

    merged.attributes = merge_attributes(&merged.attributes, &overlay.attributes);
    merged.detected_objects = overlay.detected_objects;
    merged.extracted_text = overlay.extracted_text;

    if vacant(&merged.title) && !vacant(&overlay.title) {
        merged.title = overlay.title;
    }
    if merged.category.is_none() {
        merged.category = overlay.category;
    }
    if vacant(&merged.description) && !vacant(&overlay.description) {
        merged.description = overlay.description;
    }
    if merged.location.is_none() {
        merged.location = overlay.location;
    }
    if vacant(&merged.date) && !vacant(&overlay.date) {
        merged.date = overlay.date;
    }
    if merged.contact_info.as_ref().is_none_or(|c| c.is_empty()) && overlay.contact_info.is_some()
    {
        merged.contact_info = overlay.contact_info;
    }
    if vacant(&merged.reward) && !vacant(&overlay.reward) {
        merged.reward = overlay.reward;
    }

    merged
}

/// Merge an image-derived partial into a finished text record.
///
/// Same policy as [`merge_partial`], with the text record as base. Derived
/// fields (post type, tags, confidence scores) stay with the base, and the
/// legacy twin fields are kept identical to their canonical counterparts.
pub fn merge_into_record(base: &StructuredRecord, overlay: &PartialRecord) -> StructuredRecord {
    let mut merged = base.clone();

    let attributes = merge_attributes(&base.item_attributes, &overlay.attributes);
    merged.item_attributes = attributes.clone();
    merged.attributes = attributes;

    merged.detected_objects = overlay.detected_objects.clone();
    merged.extracted_text = overlay.extracted_text.clone();

    if merged.title.is_empty() {
        if let Some(title) = &overlay.title {
            merged.title = title.clone();
        }
    }
    if merged.category == Category::Other {
        if let Some(category) = overlay.category {
            merged.category = category;
        }
    }
    if merged.clean_description.is_empty() {
        if let Some(description) = &overlay.description {
            merged.clean_description = description.clone();
            merged.description = description.clone();
        }
    }
    if merged.location.is_none() {
        merged.location = overlay.location.clone();
    }
    if merged.date_time.is_none() {
        merged.date_time = overlay.date.clone();
        merged.date = overlay.date.clone();
    }
    if merged.contact_info.is_none() {
        merged.contact_info = overlay.contact_info.clone();
    }
    if merged.reward.is_none() {
        merged.reward = overlay.reward.clone();
    }

    merged
}

fn merge_attributes(
    base: &BTreeMap<String, String>,
    overlay: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

fn vacant(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{DetectedObject, Location};
    use pretty_assertions::assert_eq;

    fn with_attribute(key: &str, value: &str) -> PartialRecord {
        let mut record = PartialRecord::default();
        record
            .attributes
            .insert(key.to_string(), value.to_string());
        record
    }

    #[test]
    fn test_attributes_accumulate() {
        let base = with_attribute("color", "red");
        let overlay = with_attribute("brand", "Nike");

        let merged = merge_partial(base, overlay);

        assert_eq!(merged.attributes.get("color").map(String::as_str), Some("red"));
        assert_eq!(merged.attributes.get("brand").map(String::as_str), Some("Nike"));
    }

    #[test]
    fn test_overlay_wins_attribute_collision() {
        let base = with_attribute("color", "red");
        let overlay = with_attribute("color", "maroon");

        let merged = merge_partial(base, overlay);

        assert_eq!(merged.attributes.get("color").map(String::as_str), Some("maroon"));
    }

    #[test]
    fn test_base_title_wins() {
        let base = PartialRecord {
            title: Some("Black Wallet".to_string()),
            ..Default::default()
        };
        let overlay = PartialRecord {
            title: Some("Leather Wallet".to_string()),
            ..Default::default()
        };

        let merged = merge_partial(base, overlay);

        assert_eq!(merged.title.as_deref(), Some("Black Wallet"));
    }

    #[test]
    fn test_overlay_fills_gaps() {
        let base = PartialRecord::default();
        let overlay = PartialRecord {
            title: Some("Blue Backpack".to_string()),
            category: Some(Category::Bags),
            date: Some("yesterday".to_string()),
            location: Some(Location {
                description: "Main Hall".to_string(),
                city: None,
            }),
            ..Default::default()
        };

        let merged = merge_partial(base, overlay);

        assert_eq!(merged.title.as_deref(), Some("Blue Backpack"));
        assert_eq!(merged.category, Some(Category::Bags));
        assert_eq!(merged.date.as_deref(), Some("yesterday"));
        assert_eq!(merged.location.unwrap().description, "Main Hall");
    }

    #[test]
    fn test_image_fields_taken_from_overlay() {
        let base = PartialRecord::default();
        let overlay = PartialRecord {
            detected_objects: vec![DetectedObject {
                label: "backpack".to_string(),
                confidence: 0.92,
                bounding_box: Default::default(),
                category: Category::Bags,
            }],
            extracted_text: Some("ACME 123".to_string()),
            ..Default::default()
        };

        let merged = merge_partial(base, overlay);

        assert_eq!(merged.detected_objects.len(), 1);
        assert_eq!(merged.extracted_text.as_deref(), Some("ACME 123"));
    }

    #[test]
    fn test_merge_keeps_all_attribute_keys() {
        let mut base = with_attribute("color", "red");
        base.attributes
            .insert("serial_number".to_string(), "X1".to_string());
        let overlay = with_attribute("brand", "Sony");

        let merged = merge_partial(base.clone(), overlay.clone());

        for key in base.attributes.keys().chain(overlay.attributes.keys()) {
            assert!(merged.attributes.contains_key(key));
        }
    }
}
