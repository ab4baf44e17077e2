// desclint - core/text.rs
//
// Pure text normalisation used by the comparator. No I/O.
//
// The relaxed "first sentence of" comparison exists because catalog
// descriptions abbreviate the longer README/metadata text to one
// sentence. The exact special-character set is part of the check's
// observable behaviour and must not be changed.

use crate::util::constants;
use regex::Regex;
use std::sync::OnceLock;

/// Compiled special-character class, built once on first use.
fn special_chars() -> &'static Regex {
    static SPECIAL_CHARS: OnceLock<Regex> = OnceLock::new();
    SPECIAL_CHARS.get_or_init(|| {
        Regex::new(constants::SPECIAL_CHAR_PATTERN).expect("special-char pattern is valid")
    })
}

/// Remove every special character in the fixed class from `s`.
pub fn strip_special_chars(s: &str) -> String {
    special_chars().replace_all(s, "").into_owned()
}

/// Return the text of `s` up to its first period, special characters
/// stripped and the period re-appended.
///
/// A string with no period yields the whole stripped string plus `.`.
pub fn first_sentence(s: &str) -> String {
    let head = s.split('.').next().unwrap_or(s);
    let mut sentence = strip_special_chars(head);
    sentence.push('.');
    sentence
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_active_character_set() {
        assert_eq!(
            strip_special_chars("a@b_c!d#e$f%g^h&i*j<k>l?m|n/o\\p}q{r~s:t"),
            "abcdefghijklmnopqrst"
        );
    }

    #[test]
    fn test_strip_keeps_ordinary_punctuation() {
        // Periods, commas, parentheses, and quotes are outside the class.
        assert_eq!(
            strip_special_chars("Show a map. (With extent, \"zoomed\".)"),
            "Show a map. (With extent, \"zoomed\".)"
        );
    }

    #[test]
    fn test_strip_is_idempotent() {
        let once = strip_special_chars("a#b$c & d?");
        let twice = strip_special_chars(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_sentence_takes_text_up_to_period() {
        assert_eq!(
            first_sentence("Display a map. It shows basemap and extent."),
            "Display a map."
        );
    }

    #[test]
    fn test_first_sentence_without_period_appends_one() {
        assert_eq!(first_sentence("Show a #map"), "Show a map.");
    }

    #[test]
    fn test_first_sentence_of_empty_string() {
        assert_eq!(first_sentence(""), ".");
    }
}
