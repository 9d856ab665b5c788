//! Common regex patterns for item description extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Location patterns, tried in order of decreasing specificity. The
    // landmark suffix list is matched literally in lowercase, so a
    // capitalized place name like "Central Park" falls through to the
    // general preposition pattern.
    pub static ref LOCATION_LANDMARK: Regex = Regex::new(
        r"(?:at|near|in|around|by)\s+(?:the\s+)?([A-Z][a-zA-Z\s]+(?:station|park|mall|center|centre|street|road|avenue|plaza|square|building))"
    ).unwrap();

    pub static ref LOCATION_PREPOSITION: Regex = Regex::new(
        r"(?:at|near|in|around|by)\s+(?:the\s+)?([A-Z][a-zA-Z\s]+)"
    ).unwrap();

    pub static ref LOCATION_STREET: Regex = Regex::new(
        r"(?:on|along)\s+([A-Z][a-zA-Z\s]+(?:[Ss]treet|[Rr]oad|[Aa]venue|[Bb]oulevard|[Ll]ane|[Dd]rive))"
    ).unwrap();

    // Date patterns, tried in order; matches are stored verbatim, never
    // normalized to a calendar type.
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"(?i)(?:on|dated)\s+(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})"
    ).unwrap();

    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:\s+\d{4})?)\b"
    ).unwrap();

    pub static ref DATE_RELATIVE: Regex = Regex::new(
        r"(?i)\b(?:yesterday|today|last\s+(?:night|week|month|monday|tuesday|wednesday|thursday|friday|saturday|sunday))\b"
    ).unwrap();

    pub static ref DATE_PART_OF_DAY: Regex = Regex::new(
        r"(?i)\bthis\s+(?:morning|afternoon|evening|night)\b"
    ).unwrap();

    // Contact patterns. The phone match is normalized before the digit
    // count check.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    pub static ref REWARD: Regex = Regex::new(
        r"(?i)(?:cash\s+reward|reward|offering)(?:\s+of)?[\s:]*\$?\s*(\d+)"
    ).unwrap();

    // Sentences that read like contact or reward boilerplate never become
    // titles.
    pub static ref TITLE_EXCLUSION: Regex = Regex::new(
        r"(?i)call|contact|reward|email|phone|@"
    ).unwrap();

    // clean_description removals.
    pub static ref HASHTAG: Regex = Regex::new(r"#\w+").unwrap();
    pub static ref MENTION: Regex = Regex::new(r"@\w+").unwrap();
    pub static ref URL: Regex = Regex::new(r"(?:https?://|www\.)\S+").unwrap();
    pub static ref RETWEET: Regex = Regex::new(r"\bRT:\s*").unwrap();
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Single non-nested JSON object inside a generative response.
    pub static ref JSON_OBJECT: Regex = Regex::new(r"\{[^{}]*\}").unwrap();

    // Line-oriented fallback for generative responses that are not valid
    // JSON.
    pub static ref LLM_TITLE: Regex = Regex::new(r"(?i)title[:\s]+(.+)").unwrap();
    pub static ref LLM_CATEGORY: Regex = Regex::new(r"(?i)category[:\s]+(.+)").unwrap();
    pub static ref LLM_COLOR: Regex = Regex::new(r"(?i)color[:\s]+(.+)").unwrap();
    pub static ref LLM_BRAND: Regex = Regex::new(r"(?i)brand[:\s]+(.+)").unwrap();
}
