use once_cell::sync::Lazy;
use regex::Regex;

/// Word-like tokens: runs of Unicode word characters.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Collapse every run of whitespace (newlines included) to a single space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `text` is too short to be worth summarizing.
///
/// Length is measured in characters after trimming surrounding whitespace.
pub fn is_too_brief(text: &str, min_text_length: usize) -> bool {
    text.trim().chars().count() < min_text_length
}

/// Lowercased word tokens of `text`, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
