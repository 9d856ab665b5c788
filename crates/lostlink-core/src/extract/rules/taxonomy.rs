//! Category taxonomy: fixed keyword table and classification.

use crate::models::record::Category;

/// Category trigger keywords, in classification precedence order.
///
/// Multiple categories may match the same text and the first entry in this
/// table wins, so the table order is part of the public contract and must
/// not be rearranged.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Electronics,
        &[
            "phone", "iphone", "android", "samsung", "laptop", "computer", "tablet", "ipad",
            "airpods", "headphones", "earbuds", "charger", "cable", "camera", "gopro", "drone",
            "smartwatch", "fitbit", "kindle", "e-reader", "speaker", "powerbank", "usb", "mouse",
            "keyboard",
        ],
    ),
    (
        Category::Documents,
        &[
            "passport",
            "id",
            "license",
            "driver's license",
            "driving license",
            "credit card",
            "debit card",
            "bank card",
            "social security",
            "birth certificate",
            "visa",
            "green card",
            "permit",
            "ticket",
            "boarding pass",
            "certificate",
            "diploma",
        ],
    ),
    (
        Category::Accessories,
        &[
            "watch",
            "glasses",
            "sunglasses",
            "umbrella",
            "scarf",
            "gloves",
            "belt",
            "tie",
            "hat",
            "cap",
            "wallet",
            "purse",
            "case",
        ],
    ),
    (
        Category::Clothing,
        &[
            "jacket", "coat", "sweater", "hoodie", "shirt", "pants", "jeans", "dress", "skirt",
            "shoes", "boots", "sneakers", "sandals",
        ],
    ),
    (
        Category::Bags,
        &[
            "bag",
            "backpack",
            "purse",
            "handbag",
            "briefcase",
            "suitcase",
            "luggage",
            "duffel",
            "tote",
            "messenger bag",
            "laptop bag",
        ],
    ),
    (
        Category::Keys,
        &["keys", "key", "keychain", "car key", "house key", "key fob"],
    ),
    (
        Category::Pets,
        &[
            "dog",
            "cat",
            "puppy",
            "kitten",
            "bird",
            "parrot",
            "rabbit",
            "hamster",
            "pet",
            "golden retriever",
            "labrador",
            "bulldog",
            "poodle",
            "beagle",
            "german shepherd",
            "husky",
        ],
    ),
    (
        Category::Jewelry,
        &[
            "ring",
            "necklace",
            "bracelet",
            "earring",
            "watch",
            "pendant",
            "chain",
            "diamond",
            "gold",
            "silver",
            "engagement ring",
            "wedding ring",
        ],
    ),
    (
        Category::Sports,
        &[
            "ball",
            "soccer",
            "football",
            "basketball",
            "tennis",
            "golf",
            "skateboard",
            "bicycle",
            "bike",
            "helmet",
            "racket",
            "bat",
            "glove",
        ],
    ),
    (
        Category::Books,
        &["book", "notebook", "journal", "diary", "textbook", "novel"],
    ),
    (
        Category::Toys,
        &[
            "toy",
            "doll",
            "teddy bear",
            "stuffed animal",
            "lego",
            "game",
            "puzzle",
        ],
    ),
    (
        Category::Medical,
        &[
            "medication",
            "medicine",
            "insulin",
            "inhaler",
            "hearing aid",
            "glasses",
            "prescription",
            "medical device",
        ],
    ),
    (
        Category::Instruments,
        &[
            "guitar",
            "violin",
            "piano",
            "keyboard",
            "drums",
            "flute",
            "saxophone",
            "trumpet",
            "ukulele",
        ],
    ),
];

/// Classify lowercased text against the keyword table.
///
/// Returns the first category with any keyword substring match, in table
/// order, or [`Category::Other`] when nothing matches.
pub fn classify(text_lower: &str) -> Category {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| text_lower.contains(kw)) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_electronics() {
        assert_eq!(classify("lost my iphone somewhere"), Category::Electronics);
    }

    #[test]
    fn test_classify_keys() {
        assert_eq!(classify("found a set of keys"), Category::Keys);
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(classify("something happened"), Category::Other);
    }

    #[test]
    fn test_table_order_wins_over_text_order() {
        // "wallet" (accessories) appears before "phone" (electronics) in the
        // text, but electronics comes first in the table.
        assert_eq!(
            classify("my wallet and my phone are gone"),
            Category::Electronics
        );
    }

    #[test]
    fn test_accessories_without_earlier_match() {
        assert_eq!(classify("lost a brown wallet"), Category::Accessories);
    }
}
