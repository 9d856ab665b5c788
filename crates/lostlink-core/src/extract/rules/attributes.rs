//! Ordered attribute scans: colors, brands, item types.

/// Color names, scanned in order; the first list entry found wins.
pub const COLORS: &[&str] = &[
    "black", "white", "red", "blue", "green", "yellow", "orange", "purple", "pink", "brown",
    "gray", "grey", "silver", "gold", "beige", "navy", "maroon",
];

/// Brand tokens, scanned in order; the first list entry found wins.
pub const BRANDS: &[&str] = &[
    "apple",
    "iphone",
    "samsung",
    "galaxy",
    "google",
    "pixel",
    "huawei",
    "xiaomi",
    "oneplus",
    "sony",
    "lg",
    "motorola",
    "nokia",
    "hp",
    "dell",
    "lenovo",
    "asus",
    "acer",
    "microsoft",
    "surface",
    "macbook",
    "ipad",
    "airpods",
    "nike",
    "adidas",
    "puma",
    "reebok",
    "converse",
    "vans",
    "gucci",
    "louis vuitton",
    "prada",
    "coach",
    "michael kors",
    "ray-ban",
    "oakley",
    "rolex",
    "casio",
    "fossil",
];

/// Item-type keywords used for title construction and tagging, scanned in
/// order; the first list entry found wins.
pub const ITEM_TYPES: &[&str] = &[
    "phone",
    "wallet",
    "keys",
    "bag",
    "laptop",
    "watch",
    "glasses",
    "umbrella",
    "jacket",
    "dog",
    "cat",
    "earbuds",
    "headphones",
    "ring",
    "necklace",
    "camera",
    "tablet",
    "id card",
];

/// First color mentioned in the lowercased text.
pub fn find_color(text_lower: &str) -> Option<&'static str> {
    COLORS.iter().find(|c| text_lower.contains(*c)).copied()
}

/// First brand mentioned in the lowercased text, title-cased.
pub fn find_brand(text_lower: &str) -> Option<String> {
    BRANDS
        .iter()
        .find(|b| text_lower.contains(*b))
        .map(|b| title_case(b))
}

/// First item-type keyword in the lowercased text.
pub fn find_item_type(text_lower: &str) -> Option<&'static str> {
    ITEM_TYPES.iter().find(|t| text_lower.contains(*t)).copied()
}

/// Title-case a phrase: uppercase the first letter of every alphabetic run.
///
/// A new word starts after any non-alphabetic character, so hyphenated and
/// multi-word tokens come out as "Ray-Ban" and "Louis Vuitton".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_color_list_order_wins() {
        // "blue" appears first in the text, but "black" comes first in the
        // color list.
        assert_eq!(find_color("a blue and black jacket"), Some("black"));
    }

    #[test]
    fn test_find_color_none() {
        assert_eq!(find_color("a plain jacket"), None);
    }

    #[test]
    fn test_find_brand_title_cased() {
        assert_eq!(find_brand("my nike sneakers"), Some("Nike".to_string()));
        assert_eq!(
            find_brand("a louis vuitton handbag"),
            Some("Louis Vuitton".to_string())
        );
        assert_eq!(
            find_brand("ray-ban sunglasses"),
            Some("Ray-Ban".to_string())
        );
    }

    #[test]
    fn test_find_item_type() {
        assert_eq!(find_item_type("found a set of keys"), Some("keys"));
        assert_eq!(find_item_type("nothing recognizable"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("black"), "Black");
        assert_eq!(title_case("id card"), "Id Card");
        assert_eq!(title_case("IPHONE"), "Iphone");
    }
}
