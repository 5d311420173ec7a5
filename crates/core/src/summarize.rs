//! Extractive summarization API.
//!
//! This module provides the primary API for summarizing text. The main entry
//! point is the [`Summarizer`] struct, along with the [`summarize`]
//! convenience function that uses the default configuration.
//!
//! The pipeline is: split into sentences, score every sentence by its summed
//! similarity to all others, boost sentences with cue phrases, keep the top
//! scorers and put them back in document order.
//!
//! # Example
//!
//! ```rust
//! use precis_core::{Summarizer, SummaryConfig, summarize};
//!
//! let text = "Rust is fast. Rust is safe. Cargo builds Rust code. \
//!             Bananas are yellow. In conclusion, Rust is fast and safe.";
//! let summary = summarize(text);
//! assert!(summary.contains("In conclusion"));
//!
//! let config = SummaryConfig::builder().max_sentences(4).build();
//! let detailed = Summarizer::with_config(config).summarize_detailed(text);
//! assert_eq!(detailed.sentence_count, 5);
//! ```

use std::borrow::Cow;

use serde::Serialize;

use crate::rank::{CueBoost, rank_sentences};
use crate::select::{select_sentences, summary_length};
use crate::sentence::split_sentences;
use crate::stopwords::{Language, StopWords};
use crate::{PrecisError, Result};

/// Configuration for the summarizer.
///
/// # Example
///
/// ```rust
/// use precis_core::SummaryConfig;
///
/// let config = SummaryConfig::builder()
///     .max_sentences(7)
///     .ratio(0.4)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Upper bound on summary sentences (default: 5).
    pub max_sentences: usize,

    /// Lower bound on summary sentences (default: 3). Documents with this
    /// many sentences or fewer are returned unchanged.
    pub min_sentences: usize,

    /// Share of the document's sentences to keep (default: 0.3).
    pub ratio: f64,

    /// Stop-word language (default: English).
    pub language: Language,

    /// Cue-phrase score multipliers (default: conclusion x1.2, emphasis x1.1).
    pub boosts: Vec<CueBoost>,

    /// Additional stop-words layered on the language list (default: none).
    pub extra_stop_words: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_sentences: 5,
            min_sentences: 3,
            ratio: 0.3,
            language: Language::English,
            boosts: CueBoost::defaults(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl SummaryConfig {
    /// Creates a new builder for SummaryConfig.
    pub fn builder() -> SummaryConfigBuilder {
        SummaryConfigBuilder::new()
    }

    /// Checks that the bounds and ratio describe a usable summary length.
    pub fn validate(&self) -> Result<()> {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(PrecisError::InvalidConfig(format!(
                "ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }
        if self.min_sentences == 0 {
            return Err(PrecisError::InvalidConfig("min_sentences must be at least 1".to_string()));
        }
        if self.min_sentences > self.max_sentences {
            return Err(PrecisError::InvalidConfig(format!(
                "min_sentences ({}) exceeds max_sentences ({})",
                self.min_sentences, self.max_sentences
            )));
        }
        if let Some(boost) = self.boosts.iter().find(|b| !(b.factor.is_finite() && b.factor > 0.0)) {
            return Err(PrecisError::InvalidConfig(format!(
                "boost factor must be positive, got {}",
                boost.factor
            )));
        }
        Ok(())
    }
}

/// Builder for SummaryConfig.
///
/// Provides a fluent API for configuring the [`Summarizer`].
pub struct SummaryConfigBuilder {
    config: SummaryConfig,
}

impl SummaryConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: SummaryConfig::default() }
    }

    /// Sets the maximum number of summary sentences.
    pub fn max_sentences(mut self, value: usize) -> Self {
        self.config.max_sentences = value;
        self
    }

    /// Sets the minimum number of summary sentences.
    pub fn min_sentences(mut self, value: usize) -> Self {
        self.config.min_sentences = value;
        self
    }

    /// Sets the share of sentences to keep.
    pub fn ratio(mut self, value: f64) -> Self {
        self.config.ratio = value;
        self
    }

    /// Sets the stop-word language.
    pub fn language(mut self, value: Language) -> Self {
        self.config.language = value;
        self
    }

    /// Replaces the cue-phrase boosts.
    pub fn boosts(mut self, value: Vec<CueBoost>) -> Self {
        self.config.boosts = value;
        self
    }

    /// Adds stop-words on top of the language list.
    pub fn extra_stop_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.config
            .extra_stop_words
            .extend(words.iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Builds the SummaryConfig.
    pub fn build(self) -> SummaryConfig {
        self.config
    }
}

impl Default for SummaryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    /// Position in the document, starting at 0
    pub index: usize,
    /// Final score after boosts
    pub score: f64,
    pub text: String,
}

/// The complete result of summarizing a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Summary text: the selected sentences joined by single spaces, or the
    /// original text when the document was too short to summarize.
    pub summary: String,

    /// Number of sentences found in the input.
    pub sentence_count: usize,

    /// Sentences making up the summary, in document order. When the input
    /// was short-circuited this lists every sentence with a score of 0.
    pub selected: Vec<ScoredSentence>,

    /// Whether ranking was skipped because the input was too short.
    pub short_circuited: bool,
}

impl Summary {
    /// Number of sentences in the summary.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Gets the summary as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(PrecisError::from)
    }
}

/// Extractive summarizer.
///
/// Holds only immutable configuration; every call allocates its own working
/// state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummaryConfig,
    stop_words: Cow<'static, StopWords>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Creates a summarizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Creates a summarizer with a custom configuration.
    ///
    /// The configuration is not validated here; call
    /// [`SummaryConfig::validate`] first when it comes from user input.
    pub fn with_config(config: SummaryConfig) -> Self {
        let base = StopWords::for_language(config.language);
        let stop_words = if config.extra_stop_words.is_empty() {
            Cow::Borrowed(base)
        } else {
            Cow::Owned(base.with_extra(&config.extra_stop_words))
        };

        Self { config, stop_words }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarizes text, returning only the summary string.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).summary
    }

    /// Summarizes text, returning the selected sentences and their scores.
    pub fn summarize_detailed(&self, text: &str) -> Summary {
        if text.is_empty() {
            return Summary { summary: String::new(), sentence_count: 0, selected: Vec::new(), short_circuited: true };
        }

        let sentences = split_sentences(text);
        tracing::debug!(sentences = sentences.len(), chars = text.len(), "split document");

        if sentences.len() <= self.config.min_sentences {
            tracing::debug!(sentences = sentences.len(), "document too short, returning it unchanged");
            let sentence_count = sentences.len();
            let selected = sentences
                .into_iter()
                .enumerate()
                .map(|(index, text)| ScoredSentence { index, score: 0.0, text })
                .collect();
            return Summary { summary: text.to_string(), sentence_count, selected, short_circuited: true };
        }

        let scores = rank_sentences(&sentences[..], &self.stop_words, &self.config.boosts);
        let count = summary_length(sentences.len(), &self.config);
        let indices = select_sentences(&scores, count);
        tracing::debug!(selected = indices.len(), of = sentences.len(), "selected summary sentences");

        let selected: Vec<ScoredSentence> = indices
            .into_iter()
            .map(|index| ScoredSentence { index, score: scores[index], text: sentences[index].clone() })
            .collect();

        let summary = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Summary { summary, sentence_count: sentences.len(), selected, short_circuited: false }
    }
}

/// Summarizes text with the default configuration.
///
/// Empty input yields an empty string; input of three sentences or fewer is
/// returned unchanged.
pub fn summarize(text: &str) -> String {
    Summarizer::new().summarize(text)
}

/// Summarizes text with a custom configuration.
pub fn summarize_with_config(text: &str, config: &SummaryConfig) -> String {
    Summarizer::with_config(config.clone()).summarize(text)
}
