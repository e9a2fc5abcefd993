//! Property-based tests for the line tokenizer.

use super::tokenizer::{tokenize, TokenBuffer};
use proptest::prelude::*;

// Lines built from the characters the tokenizer treats specially plus a
// few ordinary ones.
fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('"'),
            Just('\''),
            Just('\\'),
            Just('a'),
            Just('b'),
            Just(':'),
            Just('/'),
            Just('é'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn plain_word_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_./:-]{1,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Dequoting never adds characters.
    #[test]
    fn output_never_longer_than_input(line in line_strategy()) {
        let total: usize = tokenize(&line).iter().map(String::len).sum();
        prop_assert!(total <= line.len());
    }

    // No argument is ever empty.
    #[test]
    fn no_empty_arguments(line in line_strategy()) {
        for arg in tokenize(&line) {
            prop_assert!(!arg.is_empty());
        }
    }

    // Without quotes, tokenizing is plain whitespace splitting.
    #[test]
    fn unquoted_matches_whitespace_split(words in prop::collection::vec(plain_word_strategy(), 0..10), sep in "[ \t]{1,3}") {
        let line = words.join(&sep);
        let expected: Vec<&str> = line.split([' ', '\t']).filter(|w| !w.is_empty()).collect();
        prop_assert_eq!(tokenize(&line), expected);
    }

    // Single-quoting any quote-free text yields it back as one argument.
    #[test]
    fn single_quotes_preserve_text(text in "[^']{1,40}") {
        let line = format!("'{text}'");
        prop_assert_eq!(tokenize(&line), vec![text]);
    }

    // The argument cap is honored and the drop count adds up.
    #[test]
    fn argument_cap_respected(line in line_strategy(), cap in 0usize..6) {
        let uncapped = tokenize(&line).len();
        let mut buffer = TokenBuffer::new();
        let kept = buffer.tokenize(&line, cap).len();
        prop_assert!(kept <= cap);
        prop_assert_eq!(kept + buffer.dropped(), uncapped);
    }
}
