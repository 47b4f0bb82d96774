//! Property-based tests for the word wrapper.

use proptest::prelude::*;

use super::wrap::{PAGE_LINE_WIDTH, wrap_text};

/// A word of 1 to 20 letters.
fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9.,%-]{1,20}"
}

/// A line of words separated by single spaces.
fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..40).prop_map(|words| words.join(" "))
}

/// Several lines joined with newlines.
fn report() -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 1..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every emitted line honours the width.
    #[test]
    fn prop_lines_within_width(text in report()) {
        for out in wrap_text(&text, PAGE_LINE_WIDTH) {
            prop_assert!(out.chars().count() <= PAGE_LINE_WIDTH, "too long: {out:?}");
        }
    }

    /// Words come out in the same order, none dropped or duplicated.
    #[test]
    fn prop_words_preserved(text in report()) {
        let wrapped = wrap_text(&text, PAGE_LINE_WIDTH);
        let expected: Vec<&str> = text.split_whitespace().collect();
        let actual: Vec<&str> = wrapped.iter().flat_map(|l| l.split_whitespace()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Input lines that fit are never touched, so the line count can only grow.
    #[test]
    fn prop_fitting_lines_untouched(text in report()) {
        let wrapped = wrap_text(&text, PAGE_LINE_WIDTH);
        prop_assert!(wrapped.len() >= text.split('\n').count());
        if text.split('\n').all(|l| l.chars().count() <= PAGE_LINE_WIDTH) {
            let original: Vec<&str> = text.split('\n').collect();
            prop_assert_eq!(wrapped, original);
        }
    }

    /// Wrapped lines never start or end with a space.
    #[test]
    fn prop_wrapped_lines_trimmed(l in line()) {
        prop_assume!(l.chars().count() > PAGE_LINE_WIDTH);
        for out in wrap_text(&l, PAGE_LINE_WIDTH) {
            prop_assert!(!out.is_empty());
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }

    /// Words at or above the width are rebuilt exactly from their chunks.
    #[test]
    fn prop_long_words_rebuilt(len in PAGE_LINE_WIDTH..400usize) {
        let word = "w".repeat(len);
        let wrapped = wrap_text(&word, PAGE_LINE_WIDTH);
        if len == PAGE_LINE_WIDTH {
            prop_assert_eq!(wrapped, vec![word]);
        } else {
            prop_assert!(wrapped.len() >= 2);
            prop_assert_eq!(wrapped.concat(), word);
        }
    }
}
