//! Location extraction: a cascade of patterns of decreasing specificity.

use super::patterns::{LOCATION_LANDMARK, LOCATION_PREPOSITION, LOCATION_STREET};
use crate::models::record::Location;

/// Extract a location reference from text.
///
/// Patterns are tried from most to least specific; the first whose captured
/// phrase is longer than 3 characters wins. A pattern that matches with a
/// shorter capture does not stop the cascade.
pub fn extract_location(text: &str) -> Option<Location> {
    for pattern in [&*LOCATION_LANDMARK, &*LOCATION_PREPOSITION, &*LOCATION_STREET] {
        if let Some(caps) = pattern.captures(text) {
            let phrase = caps[1].trim();
            if phrase.len() > 3 {
                return Some(Location {
                    description: phrase.to_string(),
                    city: None,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_pattern() {
        let location = extract_location("I left it at the Penn station exit").unwrap();
        assert_eq!(location.description, "Penn station");
    }

    #[test]
    fn test_general_preposition_pattern() {
        let location = extract_location("dropped it near Central Park yesterday, call me").unwrap();
        assert!(location.description.contains("Central Park"));
    }

    #[test]
    fn test_street_pattern() {
        let location = extract_location("dropped somewhere on Baker Street").unwrap();
        assert_eq!(location.description, "Baker Street");
    }

    #[test]
    fn test_short_capture_rejected() {
        assert!(extract_location("it was at Xy.").is_none());
    }

    #[test]
    fn test_no_location() {
        assert!(extract_location("no place mentioned here").is_none());
    }
}
