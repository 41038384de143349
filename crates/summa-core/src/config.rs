use crate::ConfigError;
use crate::scoring::ScoringWeights;
use crate::sentences::BoundaryPolicy;

/// Lowest accepted `min_text_length`. Shorter inputs are never scored.
pub const MIN_TEXT_LENGTH_FLOOR: usize = 50;

/// Controls how a list of values is overridden from its defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Configuration for the extractive summarizer.
///
/// Use [`SummarizerConfigBuilder`] to construct a validated config.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Maximum number of sentences kept in a summary (default: 5).
    pub(crate) max_sentences: usize,
    /// How sentence boundaries are detected.
    pub(crate) boundary_policy: BoundaryPolicy,
    /// Sentences must be strictly longer than this many characters.
    /// `None` uses the boundary policy's own floor.
    pub(crate) min_sentence_length: Option<usize>,
    /// Trimmed input shorter than this many characters is not summarized
    /// (default and minimum: 50).
    pub(crate) min_text_length: usize,
    /// Tokens must be strictly longer than this to enter the frequency table (default: 3).
    pub(crate) min_keyword_length: usize,
    /// Words excluded from the frequency table.
    pub(crate) stop_words: ListOverride<String>,
    /// Weights for the sentence scoring function.
    pub(crate) scoring_weights: Option<ScoringWeights>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: 5,
            boundary_policy: BoundaryPolicy::default(),
            min_sentence_length: None,
            min_text_length: MIN_TEXT_LENGTH_FLOOR,
            min_keyword_length: 3,
            stop_words: ListOverride::Default,
            scoring_weights: None,
        }
    }
}

impl SummarizerConfig {
    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary_policy
    }

    /// Effective sentence floor: the explicit override, or the policy default.
    pub fn min_sentence_length(&self) -> usize {
        self.min_sentence_length
            .unwrap_or_else(|| self.boundary_policy.default_min_length())
    }

    pub fn min_text_length(&self) -> usize {
        self.min_text_length
    }

    pub fn min_keyword_length(&self) -> usize {
        self.min_keyword_length
    }

    /// Get the scoring weights, using defaults if not configured.
    pub fn scoring_weights(&self) -> ScoringWeights {
        self.scoring_weights.clone().unwrap_or_default()
    }
}

/// Builder for [`SummarizerConfig`].
///
/// [`build()`](Self::build) rejects a zero sentence cap, a `min_text_length`
/// below [`MIN_TEXT_LENGTH_FLOOR`] and negative or non-finite scoring weights.
#[derive(Debug, Clone, Default)]
pub struct SummarizerConfigBuilder {
    max_sentences: Option<usize>,
    boundary_policy: Option<BoundaryPolicy>,
    min_sentence_length: Option<usize>,
    min_text_length: Option<usize>,
    min_keyword_length: Option<usize>,
    stop_words: ListOverride<String>,
    scoring_weights: Option<ScoringWeights>,
}

impl SummarizerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Scalars ──

    pub fn max_sentences(mut self, n: usize) -> Self {
        self.max_sentences = Some(n);
        self
    }

    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = Some(policy);
        self
    }

    pub fn min_sentence_length(mut self, n: usize) -> Self {
        self.min_sentence_length = Some(n);
        self
    }

    pub fn min_text_length(mut self, n: usize) -> Self {
        self.min_text_length = Some(n);
        self
    }

    pub fn min_keyword_length(mut self, n: usize) -> Self {
        self.min_keyword_length = Some(n);
        self
    }

    // ── Stop words ──

    pub fn set_stop_words(mut self, words: Vec<String>) -> Self {
        self.stop_words = ListOverride::Replace(words);
        self
    }

    pub fn add_stop_word(mut self, word: String) -> Self {
        match &mut self.stop_words {
            ListOverride::Extend(v) => v.push(word),
            _ => self.stop_words = ListOverride::Extend(vec![word]),
        }
        self
    }

    // ── Scoring weights ──

    /// Set custom weights for the length, position and keyword sub-scores.
    pub fn scoring_weights(mut self, weights: ScoringWeights) -> Self {
        self.scoring_weights = Some(weights);
        self
    }

    /// Validate and produce a [`SummarizerConfig`].
    pub fn build(self) -> Result<SummarizerConfig, ConfigError> {
        let defaults = SummarizerConfig::default();

        let max_sentences = self.max_sentences.unwrap_or(defaults.max_sentences);
        if max_sentences == 0 {
            return Err(ConfigError::ZeroMaxSentences);
        }

        let min_text_length = self.min_text_length.unwrap_or(defaults.min_text_length);
        if min_text_length < MIN_TEXT_LENGTH_FLOOR {
            return Err(ConfigError::MinTextLengthBelowFloor {
                value: min_text_length,
                floor: MIN_TEXT_LENGTH_FLOOR,
            });
        }

        if let Some(ref w) = self.scoring_weights {
            for (name, value) in [
                ("length", w.length),
                ("position", w.position),
                ("keyword", w.keyword),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidWeight { name, value });
                }
            }
        }

        Ok(SummarizerConfig {
            max_sentences,
            boundary_policy: self.boundary_policy.unwrap_or(defaults.boundary_policy),
            min_sentence_length: self.min_sentence_length,
            min_text_length,
            min_keyword_length: self
                .min_keyword_length
                .unwrap_or(defaults.min_keyword_length),
            stop_words: self.stop_words,
            scoring_weights: self.scoring_weights,
        })
    }
}
