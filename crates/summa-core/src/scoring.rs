//! Salience scoring for candidate sentences.
//!
//! Each sentence gets three sub-scores in [0, 1] which are combined by fixed
//! weights:
//! - `length`: token count relative to a 15-token target, capped at 1.0
//! - `position`: 1.0 for the first two and last two candidates, 0.5 otherwise
//! - `keyword`: mean document frequency of the sentence's tokens relative to
//!   the most frequent word

use serde::{Deserialize, Serialize};

use crate::frequency::WordFrequencies;
use crate::text_processing::tokenize;

/// Token count at which the length sub-score saturates.
const LENGTH_TARGET: f64 = 15.0;

/// Number of candidates at each end of the document that get the full position score.
const EDGE_WINDOW: usize = 2;

/// Weights for the scoring function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub length: f64,
    pub position: f64,
    pub keyword: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length: 0.3,
            position: 0.3,
            keyword: 0.4,
        }
    }
}

/// Sub-scores and weighted total for one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentenceScore {
    pub length: f64,
    pub position: f64,
    pub keyword: f64,
    pub total: f64,
}

/// Score the sentence at `index` out of `total` candidates.
pub fn score_sentence(
    sentence: &str,
    index: usize,
    total: usize,
    frequencies: &WordFrequencies,
    weights: &ScoringWeights,
) -> SentenceScore {
    let tokens = tokenize(sentence);

    let length = length_score(tokens.len());
    let position = position_score(index, total);
    let keyword = keyword_score(&tokens, frequencies);

    SentenceScore {
        length,
        position,
        keyword,
        total: weights.length * length + weights.position * position + weights.keyword * keyword,
    }
}

fn length_score(token_count: usize) -> f64 {
    (token_count as f64 / LENGTH_TARGET).min(1.0)
}

fn position_score(index: usize, total: usize) -> f64 {
    if index < EDGE_WINDOW || index >= total.saturating_sub(EDGE_WINDOW) {
        1.0
    } else {
        0.5
    }
}

/// Every token participates in the average, stop words included; tokens
/// missing from the table contribute zero.
fn keyword_score(tokens: &[String], frequencies: &WordFrequencies) -> f64 {
    let max_count = frequencies.max_count();
    if tokens.is_empty() || max_count == 0 {
        return 0.0;
    }
    let sum: usize = tokens.iter().map(|t| frequencies.get(t)).sum();
    let mean = sum as f64 / tokens.len() as f64;
    (mean / max_count as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SummarizerConfig;

    fn freq(text: &str) -> WordFrequencies {
        WordFrequencies::build(text, &SummarizerConfig::default())
    }

    #[test]
    fn test_scoring_weights_default_sum() {
        let w = ScoringWeights::default();
        let sum = w.length + w.position + w.keyword;
        assert!((sum - 1.0).abs() < 0.001, "Weights should sum to 1.0: {}", sum);
    }

    #[test]
    fn test_length_score_caps() {
        assert_eq!(length_score(0), 0.0);
        assert!((length_score(6) - 0.4).abs() < 1e-9);
        assert_eq!(length_score(15), 1.0);
        assert_eq!(length_score(40), 1.0);
    }

    #[test]
    fn test_position_score_edges() {
        let scores: Vec<f64> = (0..6).map(|i| position_score(i, 6)).collect();
        assert_eq!(scores, vec![1.0, 1.0, 0.5, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_position_score_small_documents() {
        // Every candidate is an edge sentence when there are four or fewer
        assert!((0..4).all(|i| position_score(i, 4) == 1.0));
        assert_eq!(position_score(0, 1), 1.0);
    }

    #[test]
    fn test_keyword_score_uses_all_tokens() {
        let f = freq("compiler compiler fast");
        // the(0) compiler(2) is(0) fast(1): mean 0.75 over max 2
        let score = keyword_score(&tokenize("The compiler is fast"), &f);
        assert!((score - 0.375).abs() < 1e-9, "got {}", score);
    }

    #[test]
    fn test_keyword_score_guards() {
        let f = freq("compiler compiler fast");
        assert_eq!(keyword_score(&[], &f), 0.0);

        let empty = freq("a an the of");
        assert!(empty.is_empty());
        assert_eq!(keyword_score(&tokenize("a long sentence here"), &empty), 0.0);
    }

    #[test]
    fn test_score_sentence_total() {
        let f = freq("memory safety memory safety memory");
        let s = score_sentence("memory safety matters", 2, 6, &f, &ScoringWeights::default());
        // memory(3) safety(2) matters(0): mean 5/3 over max 3
        assert!((s.length - 0.2).abs() < 1e-9);
        assert_eq!(s.position, 0.5);
        assert!((s.keyword - 5.0 / 9.0).abs() < 1e-9);
        let expected = 0.3 * 0.2 + 0.3 * 0.5 + 0.4 * (5.0 / 9.0);
        assert!((s.total - expected).abs() < 1e-9);
    }
}
