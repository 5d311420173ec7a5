//! Stop-word filtering.
//!
//! The canonical English list is built once per process and shared by every
//! summarizer. Extra entries can be layered on at configuration time with
//! [`StopWords::with_extra`], which returns a new owned set and leaves the
//! shared list untouched.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::PrecisError;

/// Languages with a stop-word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
}

impl FromStr for Language {
    type Err = PrecisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Self::English),
            other => Err(PrecisError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
        }
    }
}

/// Common English function words: articles, pronouns, prepositions,
/// conjunctions, auxiliary and modal verbs, and frequent adverbs.
const ENGLISH: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "ago", "all", "almost", "alone",
    "along", "already", "also", "although", "always", "am", "among", "amongst", "an", "and", "another", "any",
    "anybody", "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "aren", "around", "as", "at", "away",
    "back", "be", "became", "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "both", "but", "by", "can", "cannot", "could",
    "couldn", "d", "did", "didn", "do", "does", "doesn", "doing", "don", "done", "down", "due", "during", "each",
    "either", "else", "elsewhere", "enough", "even", "ever", "every", "everybody", "everyone", "everything",
    "everywhere", "except", "few", "for", "former", "formerly", "from", "further", "furthermore", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "indeed", "into", "is", "isn",
    "it", "its", "itself", "just", "least", "less", "ll", "m", "many", "may", "maybe", "me", "meanwhile", "might",
    "mightn", "mine", "more", "moreover", "most", "mostly", "much", "must", "mustn", "my", "myself", "namely",
    "neither", "never", "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
    "nowhere", "o", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others",
    "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please", "quite",
    "rather", "re", "really", "s", "same", "seem", "seemed", "seeming", "seems", "several", "shall", "shan", "she",
    "should", "shouldn", "since", "so", "some", "somebody", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
    "these", "they", "this", "those", "though", "through", "throughout", "thru", "thus", "to", "together", "too",
    "toward", "towards", "under", "unless", "until", "up", "upon", "us", "ve", "very", "via", "was", "wasn", "we",
    "well", "were", "weren", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "won", "would", "wouldn", "y", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

static ENGLISH_STOP_WORDS: LazyLock<StopWords> = LazyLock::new(|| StopWords::from_list(ENGLISH));

/// An immutable set of lowercase stop-words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The shared English stop-word list
    pub fn english() -> &'static StopWords {
        &ENGLISH_STOP_WORDS
    }

    /// The shared stop-word list for a language
    pub fn for_language(language: Language) -> &'static StopWords {
        match language {
            Language::English => Self::english(),
        }
    }

    /// Build a set from a custom list; entries are lowercased
    pub fn from_list(words: &[&str]) -> Self {
        Self { words: words.iter().map(|w| w.to_lowercase()).collect() }
    }

    /// Copy of this set with additional entries
    pub fn with_extra<S: AsRef<str>>(&self, extra: &[S]) -> Self {
        let mut words = self.words.clone();
        words.extend(extra.iter().map(|w| w.as_ref().to_lowercase()));
        Self { words }
    }

    /// Check whether a token is a stop-word.
    ///
    /// Tokens from [`crate::tokenize`] are already lowercase; other input is
    /// lowercased before the lookup.
    pub fn is_stop_word(&self, token: &str) -> bool {
        if token.chars().any(char::is_uppercase) {
            self.words.contains(&token.to_lowercase())
        } else {
            self.words.contains(token)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Check a token against the shared English list
pub fn is_stop_word(token: &str) -> bool {
    StopWords::english().is_stop_word(token)
}
