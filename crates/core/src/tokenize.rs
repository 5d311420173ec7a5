//! Word tokenization.

use std::collections::BTreeSet;

use crate::stopwords::StopWords;

/// Split a sentence into lowercase word tokens.
///
/// Any character that is not alphanumeric separates tokens, so punctuation
/// never appears in the output. Repeated words are kept.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Unique tokens that are not stop-words, in sorted order
pub fn term_set<'a>(tokens: &'a [String], stop_words: &StopWords) -> BTreeSet<&'a str> {
    tokens
        .iter()
        .map(String::as_str)
        .filter(|token| !stop_words.is_stop_word(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello, World!", &["hello", "world"])]
    #[case("don't stop", &["don", "t", "stop"])]
    #[case("state-of-the-art  results", &["state", "of", "the", "art", "results"])]
    #[case("Rust 2024 edition", &["rust", "2024", "edition"])]
    #[case("ÉCOLE Straße", &["école", "straße"])]
    #[case("...", &[])]
    fn test_tokenize(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(input), expected);
    }

    #[test]
    fn test_tokenize_keeps_repeats() {
        assert_eq!(tokenize("the cat and the hat"), vec!["the", "cat", "and", "the", "hat"]);
    }

    #[test]
    fn test_term_set_drops_stop_words_and_duplicates() {
        let tokens = tokenize("The cat sat on the cat mat");
        let terms = term_set(&tokens, StopWords::english());
        assert_eq!(terms.into_iter().collect::<Vec<_>>(), vec!["cat", "mat", "sat"]);
    }
}
