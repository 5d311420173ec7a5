//! Sentence similarity.
//!
//! Similarity is the cosine of two binary term-presence vectors built over
//! the union of both sentences' non-stop-word tokens. The result is
//! symmetric and lies in `[0, 1]`. Sentences that share no vocabulary, or
//! whose vocabulary is made only of stop-words, score `0.0`.

use std::collections::{BTreeSet, HashSet};

use crate::stopwords::StopWords;
use crate::tokenize::{term_set, tokenize};

/// Similarity of two sentences using the shared English stop-words
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_with(a, b, StopWords::english())
}

/// Similarity of two sentences using a custom stop-word set
pub fn similarity_with(a: &str, b: &str, stop_words: &StopWords) -> f64 {
    cosine_similarity(&tokenize(a), &tokenize(b), stop_words)
}

/// Cosine similarity over already tokenized sentences
pub fn cosine_similarity(a_tokens: &[String], b_tokens: &[String], stop_words: &StopWords) -> f64 {
    let mut vocabulary = term_set(a_tokens, stop_words);
    vocabulary.extend(term_set(b_tokens, stop_words));

    if vocabulary.is_empty() {
        return 0.0;
    }

    let a_vector = presence_vector(&vocabulary, a_tokens);
    let b_vector = presence_vector(&vocabulary, b_tokens);

    let dot: f64 = a_vector.iter().zip(&b_vector).map(|(x, y)| x * y).sum();
    let norm_a = norm(&a_vector);
    let norm_b = norm(&b_vector);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// 1.0 for each vocabulary term found in the unfiltered token list, else 0.0
fn presence_vector(vocabulary: &BTreeSet<&str>, tokens: &[String]) -> Vec<f64> {
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    vocabulary
        .iter()
        .map(|term| if present.contains(term) { 1.0 } else { 0.0 })
        .collect()
}

fn norm(vector: &[f64]) -> f64 {
    vector.iter().map(|x| x * x).sum::<f64>().sqrt()
}
