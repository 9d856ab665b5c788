//! Date extraction: raw matched substrings, no calendar normalization.

use super::patterns::{DATE_MONTH_NAME, DATE_NUMERIC, DATE_PART_OF_DAY, DATE_RELATIVE};

/// Extract a date reference from text.
///
/// Patterns are tried in order; the stored value is the matched substring
/// (the captured date for the labeled numeric form), never a parsed
/// calendar type.
pub fn extract_date(text: &str) -> Option<String> {
    if let Some(caps) = DATE_NUMERIC.captures(text) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = DATE_MONTH_NAME.captures(text) {
        return Some(caps[1].to_string());
    }
    if let Some(m) = DATE_RELATIVE.find(text) {
        return Some(m.as_str().to_string());
    }
    DATE_PART_OF_DAY.find(text).map(|m| m.as_str().to_string())
}
