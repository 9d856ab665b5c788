//! Vision-boundary helpers: label remapping and color naming.
//!
//! Object detection and captioning run in an external collaborator; this
//! module owns the category remapping table for common lost & found labels,
//! a confidence-weighted category vote, and the RGB color-name heuristic.

use std::collections::BTreeMap;

use crate::models::record::{Category, DetectedObject};

/// Detection-label to category mapping for common lost & found items.
const LABEL_CATEGORIES: &[(&str, Category)] = &[
    ("cell phone", Category::Electronics),
    ("laptop", Category::Electronics),
    ("remote", Category::Electronics),
    ("keyboard", Category::Electronics),
    ("mouse", Category::Electronics),
    ("tv", Category::Electronics),
    ("tablet", Category::Electronics),
    ("handbag", Category::Bags),
    ("backpack", Category::Bags),
    ("suitcase", Category::Bags),
    ("umbrella", Category::Accessories),
    ("watch", Category::Accessories),
    ("sunglasses", Category::Accessories),
    ("tie", Category::Accessories),
    ("key", Category::Keys),
    ("ring", Category::Jewelry),
    ("necklace", Category::Jewelry),
    ("bracelet", Category::Jewelry),
    ("earring", Category::Jewelry),
    ("book", Category::Books),
    ("hat", Category::Clothing),
    ("shoe", Category::Clothing),
    ("jacket", Category::Clothing),
    ("coat", Category::Clothing),
    ("shirt", Category::Clothing),
    ("dog", Category::Pets),
    ("cat", Category::Pets),
    ("bird", Category::Pets),
    ("sports ball", Category::Sports),
    ("tennis racket", Category::Sports),
    ("skateboard", Category::Sports),
    ("bicycle", Category::Sports),
    ("teddy bear", Category::Toys),
    ("toy", Category::Toys),
];

/// Map a detection label to an item category.
pub fn category_for_label(label: &str) -> Category {
    let label = label.to_lowercase();
    LABEL_CATEGORIES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

/// Suggest a category from detected objects by confidence-weighted vote.
pub fn suggest_category(objects: &[DetectedObject]) -> Option<Category> {
    if objects.is_empty() {
        return None;
    }

    let mut scores: BTreeMap<Category, f32> = BTreeMap::new();
    for object in objects {
        *scores.entry(object.category).or_insert(0.0) += object.confidence;
    }

    scores
        .into_iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(category, _)| category)
}

/// Name the closest basic color for an RGB triple.
pub fn color_name(r: u8, g: u8, b: u8) -> &'static str {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));

    if r > 200 && g > 200 && b > 200 {
        return "white";
    }
    if r < 50 && g < 50 && b < 50 {
        return "black";
    }
    if r > 150 && g < 100 && b < 100 {
        return "red";
    }
    if r < 100 && g > 150 && b < 100 {
        return "green";
    }
    if r < 100 && g < 100 && b > 150 {
        return "blue";
    }
    if r > 150 && g > 150 && b < 100 {
        return "yellow";
    }
    if r > 150 && g < 100 && b > 150 {
        return "purple";
    }
    if r > 150 && g > 100 && b < 50 {
        return "orange";
    }
    if r > 100 && r < 180 && g > 80 && b > 60 {
        return "brown";
    }
    if (r - g).abs() < 30 && (g - b).abs() < 30 {
        return "gray";
    }

    "multicolor"
}
