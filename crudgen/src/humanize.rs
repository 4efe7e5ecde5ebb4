//! Identifier humanization.
//!
//! Turns identifier-style strings (camelCase or snake_case) into
//! human-readable phrases: every uppercase letter and every underscore opens
//! a word boundary, words are joined by single spaces, and the whole phrase
//! is lowercased. [`humanize_sentence`] additionally capitalizes the first
//! character. The skeleton templates consume both through the `humanize_lc`
//! and `humanize_uc` helpers registered by the template registry.

use once_cell::sync::Lazy;
use regex::Regex;

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("([A-Z])").expect("uppercase pattern"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\s]+").expect("separator pattern"));

/// Split `text` on uppercase letters and underscores and return the words as
/// a lowercase phrase separated by single spaces, with no leading or
/// trailing whitespace.
///
/// Every single uppercase letter opens its own word, so acronym runs come
/// apart letter by letter: `"FIRST_NAME"` becomes `"f i r s t n a m e"`.
/// Total over all inputs; an empty or separator-only string yields `""`.
#[must_use]
pub fn humanize_lower(text: &str) -> String {
    let marked = UPPERCASE.replace_all(text, "_$1");
    let spaced = SEPARATORS.replace_all(&marked, " ");
    spaced.trim().to_lowercase()
}

/// Like [`humanize_lower`], with the first character of the phrase
/// uppercased. Empty input stays empty.
#[must_use]
pub fn humanize_sentence(text: &str) -> String {
    let phrase = humanize_lower(text);
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(humanize_lower(""), "");
        assert_eq!(humanize_sentence(""), "");
    }

    #[test]
    fn splits_camel_case() {
        assert_eq!(humanize_lower("firstName"), "first name");
    }

    #[test]
    fn splits_snake_case() {
        assert_eq!(humanize_lower("first_name"), "first name");
    }

    #[test]
    fn uppercase_runs_split_per_letter() {
        assert_eq!(humanize_lower("FIRST_NAME"), "f i r s t n a m e");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(humanize_lower("already lowercase"), "already lowercase");
    }

    #[test]
    fn leading_uppercase_leaves_no_leading_space() {
        assert_eq!(humanize_lower("FirstName"), "first name");
        assert_eq!(humanize_lower("_first"), "first");
    }

    #[test]
    fn separator_only_input_yields_empty() {
        assert_eq!(humanize_lower("___"), "");
        assert_eq!(humanize_lower("  \t "), "");
        assert_eq!(humanize_lower("_ _"), "");
    }

    #[test]
    fn digits_and_symbols_pass_through() {
        assert_eq!(humanize_lower("field2"), "field2");
        assert_eq!(humanize_lower("42"), "42");
        assert_eq!(humanize_lower("a-b"), "a-b");
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        assert_eq!(humanize_lower("  first \t name "), "first name");
    }

    #[test]
    fn sentence_capitalizes_only_the_first_char() {
        assert_eq!(humanize_sentence("firstName"), "First name");
        assert_eq!(humanize_sentence("first_name"), "First name");
        assert_eq!(humanize_sentence("x"), "X");
        assert_eq!(humanize_sentence("42"), "42");
    }

    proptest! {
        #[test]
        fn humanize_lower_is_idempotent(input in ".*") {
            let once = humanize_lower(&input);
            let twice = humanize_lower(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_contains_no_separator_artifacts(input in ".*") {
            let phrase = humanize_lower(&input);
            prop_assert!(!phrase.contains('_'));
            prop_assert!(!phrase.contains("  "));
            prop_assert!(!phrase.chars().any(|c| c.is_ascii_uppercase()));
            prop_assert_eq!(phrase.trim().len(), phrase.len());
        }

        #[test]
        fn sentence_differs_only_in_the_first_char(input in ".*") {
            let lower = humanize_lower(&input);
            let sentence = humanize_sentence(&input);
            if let Some(first) = lower.chars().next() {
                let upper: String = first.to_uppercase().collect();
                prop_assert!(sentence.starts_with(&upper));
                prop_assert_eq!(&sentence[upper.len()..], &lower[first.len_utf8()..]);
            } else {
                prop_assert_eq!(sentence, "");
            }
        }
    }
}
