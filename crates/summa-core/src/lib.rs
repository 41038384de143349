use thiserror::Error;

pub mod backend;
pub mod config;
pub mod config_file;
pub mod frequency;
pub mod keywords;
pub mod scoring;
pub mod selector;
pub mod sentences;
pub mod stopwords;
pub mod summarizer;
pub mod text_processing;

pub use backend::{BackendError, PdfBackend};
pub use config::{ListOverride, MIN_TEXT_LENGTH_FLOOR, SummarizerConfig, SummarizerConfigBuilder};
pub use frequency::WordFrequencies;
pub use keywords::top_keywords;
pub use scoring::{ScoringWeights, SentenceScore, score_sentence};
pub use selector::{ScoredSentence, select_top};
pub use sentences::{BoundaryPolicy, Candidate, split_sentences, split_sentences_with_config};
pub use summarizer::{
    BRIEF_CONTENT_MESSAGE, SUMMARY_HEADER, Summarizer, Summary, SummaryOutcome, SummaryStats,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_sentences must be at least 1")]
    ZeroMaxSentences,
    #[error("invalid scoring weight for {name}: {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("min_text_length must be at least {floor}, got {value}")]
    MinTextLengthBelowFloor { value: usize, floor: usize },
    #[error("unknown boundary policy: {0}")]
    UnknownBoundaryPolicy(String),
}

/// Summarize `text`, keeping at most `max_sentences` sentences.
///
/// Uses the default configuration (punctuation boundaries, 10-char sentence
/// floor, built-in stop words). Always returns a string: input shorter than
/// 50 characters yields [`BRIEF_CONTENT_MESSAGE`]. A `max_sentences` of zero
/// is treated as one.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let config = SummarizerConfig {
        max_sentences: max_sentences.max(1),
        ..SummarizerConfig::default()
    };
    Summarizer::with_config(config).summarize(text)
}
