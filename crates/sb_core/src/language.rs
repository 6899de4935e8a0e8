use crate::types::Language;

const MYANMAR_FIRST: char = '\u{1000}';
const MYANMAR_LAST: char = '\u{109F}';

/// Whether `c` falls in the Myanmar Unicode block (U+1000..=U+109F).
pub fn is_myanmar_char(c: char) -> bool {
    (MYANMAR_FIRST..=MYANMAR_LAST).contains(&c)
}

/// Classifies text by script.
///
/// A single Myanmar character anywhere routes the whole text to
/// [`Language::Myanmar`], so mixed-script input is never split between
/// paths. Everything else, including empty input, is [`Language::English`].
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_myanmar_char) {
        Language::Myanmar
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_boundaries() {
        assert!(is_myanmar_char('\u{1000}'));
        assert!(is_myanmar_char('\u{109F}'));
        assert!(!is_myanmar_char('\u{0FFF}'));
        assert!(!is_myanmar_char('\u{10A0}'));
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("The quick brown fox."), Language::English);
        assert_eq!(detect_language("日本語のテキスト"), Language::English);
        assert_eq!(detect_language("ဒီနေ့ မိုးရွာတယ်။"), Language::Myanmar);
    }

    #[test]
    fn test_single_myanmar_char_routes_mixed_text() {
        let text = "A long English paragraph with one stray character: က and more English.";
        assert_eq!(detect_language(text), Language::Myanmar);
        assert_eq!(detect_language("trailing \u{109F}"), Language::Myanmar);
    }
}
