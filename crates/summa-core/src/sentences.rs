use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::ConfigError;
use crate::config::SummarizerConfig;

/// How sentence boundaries are located in normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Split on every run of `.`, `!` or `?`. Pieces lose their terminal punctuation.
    #[default]
    Punctuation,
    /// Split only where terminal punctuation is followed by whitespace and an
    /// upper-case letter, so abbreviations and decimals stay intact. Pieces keep
    /// their terminal punctuation.
    Lookahead,
}

impl BoundaryPolicy {
    /// Sentence floor used when the config does not set one explicitly.
    pub fn default_min_length(self) -> usize {
        match self {
            BoundaryPolicy::Punctuation => 10,
            BoundaryPolicy::Lookahead => 15,
        }
    }

    /// Join sentences back into running text.
    ///
    /// Punctuation-split pieces are rejoined with `". "` and closed with a
    /// period; lookahead pieces already carry their punctuation.
    pub fn join<S: AsRef<str>>(self, sentences: &[S]) -> String {
        let parts: Vec<&str> = sentences.iter().map(|s| s.as_ref()).collect();
        match self {
            BoundaryPolicy::Punctuation => format!("{}.", parts.join(". ")),
            BoundaryPolicy::Lookahead => parts.join(" "),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryPolicy::Punctuation => "punctuation",
            BoundaryPolicy::Lookahead => "lookahead",
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "punctuation" => Ok(BoundaryPolicy::Punctuation),
            "lookahead" => Ok(BoundaryPolicy::Lookahead),
            other => Err(ConfigError::UnknownBoundaryPolicy(other.to_string())),
        }
    }
}

/// A sentence eligible for scoring, with its position among all candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub index: usize,
    pub text: String,
}

/// Split normalized text into candidate sentences using the default config.
pub fn split_sentences(text: &str) -> Vec<Candidate> {
    split_sentences_with_config(text, &SummarizerConfig::default())
}

/// Config-aware version of [`split_sentences`].
///
/// Pieces are trimmed and kept only when strictly longer (in characters) than
/// the configured floor. When nothing survives, the whole text becomes the
/// single candidate.
pub fn split_sentences_with_config(text: &str, config: &SummarizerConfig) -> Vec<Candidate> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let pieces = match config.boundary_policy() {
        BoundaryPolicy::Punctuation => split_on_punctuation(text),
        BoundaryPolicy::Lookahead => split_on_lookahead(text),
    };

    let floor = config.min_sentence_length();
    let kept: Vec<&str> = pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > floor)
        .collect();

    if kept.is_empty() {
        return vec![Candidate {
            index: 0,
            text: text.to_string(),
        }];
    }

    kept.into_iter()
        .enumerate()
        .map(|(index, s)| Candidate {
            index,
            text: s.to_string(),
        })
        .collect()
}

fn split_on_punctuation(text: &str) -> Vec<&str> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
    RE.split(text).collect()
}

fn split_on_lookahead(text: &str) -> Vec<&str> {
    // The regex crate has no lookaround: match the punctuation, the whitespace
    // and the capital together, then cut around the whitespace. All three
    // delimiters are single-byte ASCII.
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+[A-Z]").unwrap());

    let mut pieces = Vec::new();
    let mut start = 0;
    for m in RE.find_iter(text) {
        pieces.push(&text[start..m.start() + 1]);
        start = m.end() - 1;
    }
    pieces.push(&text[start..]);
    pieces
}
