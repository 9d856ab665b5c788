//! Contact info and reward extraction.

use super::patterns::{EMAIL, PHONE, REWARD};
use crate::models::record::ContactInfo;

/// Extract contact details from text.
///
/// Phone and email are extracted independently and may both be present;
/// this step does not short-circuit on the first hit the way the ordered
/// scans do.
pub fn extract_contact(text: &str) -> Option<ContactInfo> {
    let phone = PHONE
        .find(text)
        .map(|m| normalize_phone(m.as_str()))
        .filter(|p| digit_count(p) >= 10);
    let email = EMAIL.find(text).map(|m| m.as_str().to_string());

    if phone.is_none() && email.is_none() {
        return None;
    }

    Some(ContactInfo { phone, email })
}

/// Strip everything but digits and a leading plus.
fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Extract a reward amount as a currency-prefixed string.
pub fn extract_reward(text: &str) -> Option<String> {
    REWARD.captures(text).map(|caps| format!("${}", &caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_normalized() {
        let contact = extract_contact("call me at (555) 123-4567 anytime").unwrap();
        assert_eq!(contact.phone.as_deref(), Some("5551234567"));
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_phone_keeps_leading_plus() {
        let contact = extract_contact("reach me at +1 555 123 4567").unwrap();
        assert_eq!(contact.phone.as_deref(), Some("+15551234567"));
    }

    #[test]
    fn test_email() {
        let contact = extract_contact("email john.doe@example.com please").unwrap();
        assert_eq!(contact.email.as_deref(), Some("john.doe@example.com"));
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_phone_and_email_together() {
        let contact =
            extract_contact("call 555-123-4567 or write to jane@example.org").unwrap();
        assert!(contact.phone.is_some());
        assert!(contact.email.is_some());
    }

    #[test]
    fn test_no_contact() {
        assert!(extract_contact("nothing to reach me by").is_none());
    }

    #[test]
    fn test_reward() {
        assert_eq!(extract_reward("reward $50 for return"), Some("$50".to_string()));
        assert_eq!(
            extract_reward("offering of $100 to the finder"),
            Some("$100".to_string())
        );
        assert_eq!(extract_reward("cash reward: 25"), Some("$25".to_string()));
        assert_eq!(extract_reward("no incentive mentioned"), None);
    }
}
