//! Sentence ranking.
//!
//! Each sentence is scored by its summed similarity to every other sentence,
//! a simple centrality measure over the complete similarity graph. Cue-phrase
//! boosts are then applied multiplicatively, once per sentence.

use crate::similarity::cosine_similarity;
use crate::stopwords::StopWords;
use crate::tokenize::tokenize;

/// Multiplies a sentence's score when its text contains any of the phrases.
///
/// Phrases are matched as case-insensitive substrings, so `"summar"` matches
/// "summary", "summarize" and "summarizing".
#[derive(Debug, Clone, PartialEq)]
pub struct CueBoost {
    /// Lowercase phrases to look for
    pub phrases: Vec<String>,
    /// Score multiplier when any phrase matches
    pub factor: f64,
}

impl CueBoost {
    pub fn new<S: AsRef<str>>(phrases: &[S], factor: f64) -> Self {
        Self { phrases: phrases.iter().map(|p| p.as_ref().to_lowercase()).collect(), factor }
    }

    /// Whether any phrase occurs in the already-lowercased text
    fn matches(&self, lowered: &str) -> bool {
        self.phrases.iter().any(|phrase| lowered.contains(phrase.as_str()))
    }

    /// Concluding and summarizing language: x1.2
    pub fn conclusion() -> Self {
        Self::new(&["in conclusion", "summar"], 1.2)
    }

    /// Emphasis words: x1.1
    pub fn emphasis() -> Self {
        Self::new(&["important", "significant"], 1.1)
    }

    /// The default boosts, both applied when both match
    pub fn defaults() -> Vec<CueBoost> {
        vec![Self::conclusion(), Self::emphasis()]
    }
}

/// Score every sentence; the returned vector is indexed like `sentences`.
///
/// Each unordered pair is compared once and its similarity added to both
/// accumulators. Contributions reach every accumulator in ascending partner
/// order, so the scores equal the plain ordered double sum.
pub fn rank_sentences<S: AsRef<str>>(sentences: &[S], stop_words: &StopWords, boosts: &[CueBoost]) -> Vec<f64> {
    let tokens: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s.as_ref())).collect();
    let mut scores = vec![0.0; sentences.len()];

    for i in 0..tokens.len() {
        for j in (i + 1)..tokens.len() {
            let sim = cosine_similarity(&tokens[i], &tokens[j], stop_words);
            scores[i] += sim;
            scores[j] += sim;
        }
    }

    for (score, sentence) in scores.iter_mut().zip(sentences) {
        *score *= boost_factor(sentence.as_ref(), boosts);
    }

    scores
}

/// Product of the factors of every boost whose phrases occur in the sentence
pub fn boost_factor(sentence: &str, boosts: &[CueBoost]) -> f64 {
    let lowered = sentence.to_lowercase();
    boosts
        .iter()
        .filter(|boost| boost.matches(&lowered))
        .map(|boost| boost.factor)
        .product()
}
