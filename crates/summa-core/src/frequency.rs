use std::collections::HashMap;

use crate::config::SummarizerConfig;
use crate::stopwords::StopWords;
use crate::text_processing::tokenize;

/// Document-wide word counts used for keyword-density scoring.
///
/// Built fresh for every document; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
    max_count: usize,
}

impl WordFrequencies {
    /// Count every token of `text` that is not a stop word and is longer
    /// than the configured minimum keyword length.
    pub fn build(text: &str, config: &SummarizerConfig) -> Self {
        let stop_words = StopWords::from_config(config);
        Self::build_with_stop_words(text, &stop_words, config.min_keyword_length())
    }

    pub(crate) fn build_with_stop_words(
        text: &str,
        stop_words: &StopWords,
        min_keyword_length: usize,
    ) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in tokenize(text) {
            if word.chars().count() > min_keyword_length && !stop_words.contains(&word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        let max_count = counts.values().copied().max().unwrap_or(0);
        Self { counts, max_count }
    }

    /// Count for `word` (lowercase), zero when absent.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Highest single-word count; zero for an empty table.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}
