use serde::Serialize;

use crate::config::SummarizerConfig;
use crate::frequency::WordFrequencies;
use crate::scoring::score_sentence;
use crate::selector::{ScoredSentence, select_top};
use crate::sentences::{Candidate, split_sentences_with_config};
use crate::stopwords::StopWords;
use crate::text_processing::{is_too_brief, normalize_whitespace, word_count};

/// Returned instead of a summary when the input is below the length floor.
pub const BRIEF_CONTENT_MESSAGE: &str = "Content is too brief to summarize effectively.";

/// First line of every condensed summary.
pub const SUMMARY_HEADER: &str = "📄 SUMMARY (Generated by Summa)";

/// Which path the summarizer took for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Input was below the length floor; nothing was scored.
    TooBrief,
    /// The document already fit within the sentence cap and is returned whole.
    Complete,
    /// Sentences were ranked and the best ones kept.
    Condensed,
}

/// Character-level size comparison between the input and the produced summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub original_length: usize,
    pub summary_length: usize,
}

impl SummaryStats {
    pub fn new(original: &str, summary: &str) -> Self {
        Self {
            original_length: original.chars().count(),
            summary_length: summary.chars().count(),
        }
    }

    /// Summary size as a percentage of the original, e.g. `"42.5%"`.
    /// `"N/A"` for empty input.
    pub fn compression_ratio(&self) -> String {
        if self.original_length == 0 {
            return "N/A".to_string();
        }
        format!(
            "{:.1}%",
            self.summary_length as f64 / self.original_length as f64 * 100.0
        )
    }
}

/// Full result of summarizing one document.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub outcome: SummaryOutcome,
    /// The formatted output, identical to [`Summarizer::summarize`].
    pub text: String,
    /// Joined sentences without header or footer. Empty for [`SummaryOutcome::TooBrief`].
    pub body: String,
    /// Sentences that made it into the body, in document order.
    pub selected: Vec<Candidate>,
    /// Every candidate with its score, in document order. Empty unless condensed.
    pub ranking: Vec<ScoredSentence>,
    pub candidate_count: usize,
    pub summary_words: usize,
    pub original_words: usize,
    pub stats: SummaryStats,
}

/// Extractive summarizer: ranks sentences by length, position and keyword
/// density and keeps the best few in their original order.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stop_words: StopWords,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    pub fn with_config(config: SummarizerConfig) -> Self {
        let stop_words = StopWords::from_config(&config);
        Self { config, stop_words }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` and return the formatted output string.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).text
    }

    /// Summarize `text`, keeping the intermediate ranking and word counts.
    pub fn summarize_detailed(&self, text: &str) -> Summary {
        if text.trim().is_empty() || is_too_brief(text, self.config.min_text_length()) {
            tracing::debug!(chars = text.trim().chars().count(), "input too brief to summarize");
            return Summary {
                outcome: SummaryOutcome::TooBrief,
                text: BRIEF_CONTENT_MESSAGE.to_string(),
                body: String::new(),
                selected: Vec::new(),
                ranking: Vec::new(),
                candidate_count: 0,
                summary_words: 0,
                original_words: word_count(text),
                stats: SummaryStats::new(text, BRIEF_CONTENT_MESSAGE),
            };
        }

        let normalized = normalize_whitespace(text);
        let original_words = word_count(&normalized);
        let candidates = split_sentences_with_config(&normalized, &self.config);
        let candidate_count = candidates.len();
        let policy = self.config.boundary_policy();
        let max_sentences = self.config.max_sentences();

        if candidate_count <= max_sentences {
            tracing::debug!(candidate_count, max_sentences, "document fits, skipping ranking");
            // A lone candidate equal to the whole text is the splitter's
            // fallback and goes out unchanged.
            let body = match candidates.as_slice() {
                [only] if only.text == normalized => normalized.clone(),
                _ => policy.join(
                    &candidates
                        .iter()
                        .map(|c| c.text.as_str())
                        .collect::<Vec<_>>(),
                ),
            };
            return Summary {
                outcome: SummaryOutcome::Complete,
                stats: SummaryStats::new(text, &body),
                summary_words: word_count(&body),
                text: body.clone(),
                body,
                selected: candidates,
                ranking: Vec::new(),
                candidate_count,
                original_words,
            };
        }

        let frequencies = WordFrequencies::build_with_stop_words(
            &normalized,
            &self.stop_words,
            self.config.min_keyword_length(),
        );
        if frequencies.is_empty() {
            tracing::debug!("no keywords survived filtering, ranking on length and position");
        }

        let weights = self.config.scoring_weights();
        let ranking: Vec<ScoredSentence> = candidates
            .into_iter()
            .map(|c| {
                let score =
                    score_sentence(&c.text, c.index, candidate_count, &frequencies, &weights);
                ScoredSentence::new(c, score)
            })
            .collect();

        let selected: Vec<Candidate> = select_top(ranking.clone(), max_sentences)
            .into_iter()
            .map(|s| Candidate {
                index: s.index,
                text: s.text,
            })
            .collect();
        tracing::debug!(
            candidate_count,
            selected = selected.len(),
            keywords = frequencies.len(),
            "ranked sentences"
        );

        let body = policy.join(
            &selected
                .iter()
                .map(|c| c.text.as_str())
                .collect::<Vec<_>>(),
        );
        let summary_words = word_count(&body);
        let output = format!(
            "{}\n\n{}\n\n---\nSummary contains {} words from original {} words.",
            SUMMARY_HEADER, body, summary_words, original_words
        );

        Summary {
            outcome: SummaryOutcome::Condensed,
            stats: SummaryStats::new(text, &output),
            text: output,
            body,
            selected,
            ranking,
            candidate_count,
            summary_words,
            original_words,
        }
    }
}
