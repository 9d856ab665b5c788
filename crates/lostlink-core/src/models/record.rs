//! Structured record models for lost & found item intake.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Whether a post reports a lost or a found item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    /// The poster lost the item.
    #[default]
    #[serde(rename = "LOST")]
    Lost,

    /// The poster found the item.
    #[serde(rename = "FOUND")]
    Found,
}

impl PostType {
    /// Parse a post type from a case-insensitive string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lost" => Some(PostType::Lost),
            "found" => Some(PostType::Found),
            _ => None,
        }
    }

    /// Lowercase label, as used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            PostType::Lost => "lost",
            PostType::Found => "found",
        }
    }
}

/// Item category.
///
/// The closed set of taxonomy keys plus [`Category::Other`]. Variant order
/// here is not significant; classification precedence is defined by the
/// table order in [`crate::extract::rules::taxonomy`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Documents,
    Accessories,
    Clothing,
    Bags,
    Keys,
    Pets,
    Jewelry,
    Sports,
    Books,
    Toys,
    Medical,
    Instruments,
    /// Fallback when no taxonomy keyword matches.
    #[default]
    Other,
}

impl Category {
    /// Parse a category from a case-insensitive string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "documents" => Some(Category::Documents),
            "accessories" => Some(Category::Accessories),
            "clothing" => Some(Category::Clothing),
            "bags" => Some(Category::Bags),
            "keys" => Some(Category::Keys),
            "pets" => Some(Category::Pets),
            "jewelry" => Some(Category::Jewelry),
            "sports" => Some(Category::Sports),
            "books" => Some(Category::Books),
            "toys" => Some(Category::Toys),
            "medical" => Some(Category::Medical),
            "instruments" => Some(Category::Instruments),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Documents => "documents",
            Category::Accessories => "accessories",
            Category::Clothing => "clothing",
            Category::Bags => "bags",
            Category::Keys => "keys",
            Category::Pets => "pets",
            Category::Jewelry => "jewelry",
            Category::Sports => "sports",
            Category::Books => "books",
            Category::Toys => "toys",
            Category::Medical => "medical",
            Category::Instruments => "instruments",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A location reference extracted from a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Free-text description of the place.
    pub description: String,

    /// City, when a source provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Contact details extracted from a description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Normalized phone number (digits and a leading plus only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactInfo {
    /// Check whether any contact field is set.
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// Axis-aligned bounding box in image pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An object reported by the vision collaborator.
///
/// Sequences arrive sorted by descending confidence, capped at 10 entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedObject {
    /// Detection label (e.g. "cell phone").
    pub label: String,

    /// Detection confidence (0.0 - 1.0).
    pub confidence: f32,

    /// Bounding box in the source image.
    #[serde(default)]
    pub bounding_box: BoundingBox,

    /// Category pre-mapped from the label.
    #[serde(default)]
    pub category: Category,
}

/// Confidence scores derived from field completeness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    /// Overall completeness score.
    pub overall: f32,

    /// Category classification confidence.
    pub category: f32,

    /// Title construction confidence.
    pub title: f32,
}

/// A record with some fields populated and others empty, produced by one
/// extraction stage before merging.
///
/// String-valued fields are stored only when non-empty, and `category` only
/// when informative (a no-match classification leaves the field vacant so a
/// later stage can fill it); the final record defaults to
/// [`Category::Other`] at assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Raw matched date substring, never normalized to a calendar type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,

    /// Owned by the image pipeline; merged in untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detected_objects: Vec<DetectedObject>,

    /// Owned by the image pipeline; merged in untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

impl PartialRecord {
    /// Check whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.attributes.is_empty()
            && self.location.is_none()
            && self.date.is_none()
            && self.contact_info.is_none()
            && self.reward.is_none()
            && self.detected_objects.is_empty()
            && self.extracted_text.is_none()
    }
}

/// The final normalized record produced by the extraction orchestrator.
///
/// Canonical and legacy field pairs (`item_attributes`/`attributes`,
/// `date_time`/`date`, `clean_description`/`description`) are populated
/// identically for backward compatibility with older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredRecord {
    pub post_type: PostType,

    pub category: Category,

    /// Never empty: falls back to a text excerpt when nothing better exists.
    pub title: String,

    pub clean_description: String,

    /// Legacy duplicate of `clean_description`.
    pub description: String,

    pub item_attributes: BTreeMap<String, String>,

    /// Legacy duplicate of `item_attributes`.
    pub attributes: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    /// Legacy duplicate of `date_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    pub confidence_scores: ConfidenceScores,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detected_objects: Vec<DetectedObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}
