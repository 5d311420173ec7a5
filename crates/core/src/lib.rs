pub mod error;
pub mod input;
pub mod rank;
pub mod select;
pub mod sentence;
pub mod similarity;
pub mod stopwords;
pub mod summarize;
pub mod tokenize;

pub use error::{PrecisError, Result};
#[cfg(feature = "html")]
pub use input::html_to_text;
#[cfg(feature = "fetch")]
pub use input::{FetchConfig, fetch_url};
pub use input::{looks_like_html, read_file, read_stdin, truncate_chars};
pub use rank::{CueBoost, boost_factor, rank_sentences};
pub use select::{select_sentences, summary_length};
pub use sentence::{count_sentences, split_sentences};
pub use similarity::{cosine_similarity, similarity, similarity_with};
pub use stopwords::{Language, StopWords, is_stop_word};
pub use summarize::{
    ScoredSentence, Summarizer, Summary, SummaryConfig, SummaryConfigBuilder, summarize, summarize_with_config,
};
pub use tokenize::{term_set, tokenize};
