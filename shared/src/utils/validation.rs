//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Media references are stored file names or CDN paths, already uploaded by
/// the media pipeline. Accept path-ish tokens, reject whitespace and control
/// characters.
static MEDIA_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._/-]*$").expect("valid regex"));

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds (inclusive)
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if a string is a plausible uploaded-media reference
pub fn valid_media_reference(value: &str) -> bool {
    MEDIA_REFERENCE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("boubou"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("abc", 1, 3));
        assert!(!length_between("abcd", 1, 3));
        assert!(!length_between("", 1, 3));
    }

    #[test]
    fn test_media_reference() {
        assert!(valid_media_reference("uploads/2024/modele-wax.png"));
        assert!(valid_media_reference("photo_1.jpg"));
        assert!(!valid_media_reference(""));
        assert!(!valid_media_reference("two words.png"));
        assert!(!valid_media_reference("/leading-slash.png"));
    }
}
