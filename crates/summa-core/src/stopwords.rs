use std::collections::HashSet;

use crate::config::SummarizerConfig;

/// Built-in stop words: articles, conjunctions, common prepositions,
/// auxiliary verbs and demonstratives.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
];

/// Closed, lowercase set of words excluded from keyword scoring.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl StopWords {
    /// Resolve the configured stop-word override against the built-in list.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let defaults: Vec<String> = DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect();
        let words = config
            .stop_words
            .resolve(&defaults)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SummarizerConfigBuilder;

    #[test]
    fn test_default_set() {
        let stop = StopWords::default();
        assert_eq!(stop.len(), DEFAULT_STOP_WORDS.len());
        assert!(stop.contains("these"));
        assert!(stop.contains("might"));
        assert!(!stop.contains("summary"));
    }

    #[test]
    fn test_extend_lowercases() {
        let config = SummarizerConfigBuilder::new()
            .add_stop_word("However".to_string())
            .build()
            .unwrap();
        let stop = StopWords::from_config(&config);
        assert!(stop.contains("however"));
        assert!(stop.contains("the"));
    }

    #[test]
    fn test_replace_drops_defaults() {
        let config = SummarizerConfigBuilder::new()
            .set_stop_words(vec!["report".to_string()])
            .build()
            .unwrap();
        let stop = StopWords::from_config(&config);
        assert!(stop.contains("report"));
        assert!(!stop.contains("the"));
        assert_eq!(stop.len(), 1);
    }
}
