//! Identifier extraction from OCR text.
//!
//! The OCR engine itself is an external collaborator; this module holds the
//! only original logic at that boundary: regex extractors for serial
//! numbers, phone numbers, emails, and model numbers found in recognized
//! text (labels, stickers, engravings).

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Serial number patterns, tried in order; the first match wins.
    static ref SERIAL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b[A-Z0-9]{10,20}\b").unwrap(),
        Regex::new(r"(?i)\bS/N[\s:]*([A-Z0-9]+)\b").unwrap(),
        Regex::new(r"(?i)\bSerial[\s:]*([A-Z0-9]+)\b").unwrap(),
        Regex::new(r"(?i)\bIMEI[\s:]*(\d{15})\b").unwrap(),
    ];

    static ref OCR_PHONE: Regex = Regex::new(
        r"\b(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b"
    ).unwrap();

    static ref OCR_EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    // Model number patterns, tried in order; the first match wins.
    static ref MODEL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bModel[\s:]*([A-Z0-9-]+)\b").unwrap(),
        Regex::new(r"(?i)\b(iPhone\s*\d+(?:\s*(?:Pro|Max|Plus))?)\b").unwrap(),
        Regex::new(r"(?i)\b(Galaxy\s*[A-Z]\d+)\b").unwrap(),
        Regex::new(r"(?i)\b(MacBook(?:\s*(?:Pro|Air))?)\b").unwrap(),
    ];
}

/// Pull potential identifiers out of raw OCR text.
///
/// Serial and model numbers are first-match-wins across their pattern
/// lists; phone and email keep the first occurrence found.
pub fn extract_identifiers(text: &str) -> BTreeMap<String, String> {
    let mut identifiers = BTreeMap::new();

    if text.trim().is_empty() {
        return identifiers;
    }

    for pattern in SERIAL_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let value = caps
                .get(1)
                .unwrap_or_else(|| caps.get(0).unwrap())
                .as_str()
                .trim();
            identifiers.insert("serial_number".to_string(), value.to_string());
            break;
        }
    }

    if let Some(m) = OCR_PHONE.find(text) {
        identifiers.insert("phone_number".to_string(), m.as_str().trim().to_string());
    }

    if let Some(m) = OCR_EMAIL.find(text) {
        identifiers.insert("email".to_string(), m.as_str().to_string());
    }

    for pattern in MODEL_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            identifiers.insert("model".to_string(), caps[1].trim().to_string());
            break;
        }
    }

    identifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text() {
        assert!(extract_identifiers("").is_empty());
        assert!(extract_identifiers("   ").is_empty());
    }

    #[test]
    fn test_generic_serial() {
        let ids = extract_identifiers("sticker says ABCD1234567890 on the back");
        assert_eq!(
            ids.get("serial_number").map(String::as_str),
            Some("ABCD1234567890")
        );
    }

    #[test]
    fn test_labeled_serial() {
        let ids = extract_identifiers("S/N: QWERTY123");
        assert_eq!(ids.get("serial_number").map(String::as_str), Some("QWERTY123"));
    }

    #[test]
    fn test_imei() {
        let ids = extract_identifiers("IMEI 490154203237518");
        // The 15-digit IMEI also satisfies the generic alphanumeric pattern,
        // which is tried first.
        assert_eq!(
            ids.get("serial_number").map(String::as_str),
            Some("490154203237518")
        );
    }

    #[test]
    fn test_phone_and_email() {
        let ids = extract_identifiers("if found call 555-123-4567 or mail me@example.com");
        assert_eq!(ids.get("phone_number").map(String::as_str), Some("555-123-4567"));
        assert_eq!(ids.get("email").map(String::as_str), Some("me@example.com"));
    }

    #[test]
    fn test_model_labeled() {
        let ids = extract_identifiers("Model: A2342");
        assert_eq!(ids.get("model").map(String::as_str), Some("A2342"));
    }

    #[test]
    fn test_model_product_name() {
        let ids = extract_identifiers("engraved iPhone 13 Pro");
        assert_eq!(ids.get("model").map(String::as_str), Some("iPhone 13 Pro"));
    }
}
