//! Top-k sentence selection.
//!
//! Candidates are ranked by score, the best `max_sentences` are kept, and the
//! survivors are returned in document order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::scoring::SentenceScore;
use crate::sentences::Candidate;

/// A candidate sentence together with its salience score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredSentence {
    pub index: usize,
    pub text: String,
    pub score: SentenceScore,
}

impl ScoredSentence {
    pub fn new(candidate: Candidate, score: SentenceScore) -> Self {
        Self {
            index: candidate.index,
            text: candidate.text,
            score,
        }
    }
}

/// Keep the `max_sentences` highest-scoring sentences, in document order.
///
/// Ties on score go to the earlier sentence, so the result is deterministic.
pub fn select_top(mut scored: Vec<ScoredSentence>, max_sentences: usize) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| {
        b.score
            .total
            .partial_cmp(&a.score.total)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    scored.truncate(max_sentences);
    scored.sort_by_key(|s| s.index);
    scored
}
