//! Keyword filter for weeding out accessory listings.

/// Substrings that mark a listing as an accessory rather than a device.
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "case",
    "screen protector",
    "cover",
    "tempered glass",
    "skin",
    "film",
    "charger",
    "cable",
    "adapter",
    "box only",
    "empty box",
    "just box",
    "accessory",
    "accessories",
];

/// True if any exclusion keyword appears anywhere in `text`, ignoring case.
pub fn is_excluded(text: &str) -> bool {
    let text = text.to_lowercase();
    EXCLUDE_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_anywhere_in_text_excludes() {
        assert!(is_excluded("Phone Case for Pixel 7"));
        assert!(is_excluded("USB-C cable 2m"));
        assert!(is_excluded("Pixel 6 box only, no phone"));
    }

    #[test]
    fn test_clean_title_is_not_excluded() {
        assert!(!is_excluded("Google Pixel 7 128GB Obsidian Unlocked"));
        assert!(!is_excluded("Samsung Galaxy S21 5G"));
        assert!(!is_excluded(""));
    }

    #[test]
    fn test_case_invariance() {
        for text in [
            "TEMPERED GLASS for Galaxy S21",
            "Tempered Glass for Galaxy S21",
            "tEmPeReD gLaSs",
        ] {
            assert!(is_excluded(text));
            assert_eq!(is_excluded(text), is_excluded(&text.to_uppercase()));
            assert_eq!(is_excluded(text), is_excluded(&text.to_lowercase()));
        }
    }

    #[test]
    fn test_every_listed_keyword_triggers() {
        for keyword in EXCLUDE_KEYWORDS {
            let text = format!("Pixel 7 {} bundle", keyword);
            assert!(is_excluded(&text), "keyword {:?} should exclude", keyword);
        }
    }
}
