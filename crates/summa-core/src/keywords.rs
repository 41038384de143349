use crate::config::SummarizerConfig;
use crate::frequency::WordFrequencies;
use crate::text_processing::normalize_whitespace;

/// The `n` most frequent keywords of `text`, most frequent first.
///
/// Keywords are the entries of the document frequency table (stop words and
/// short tokens already removed). Equal counts are ordered alphabetically.
pub fn top_keywords(text: &str, n: usize, config: &SummarizerConfig) -> Vec<(String, usize)> {
    let frequencies = WordFrequencies::build(&normalize_whitespace(text), config);
    let mut entries: Vec<(String, usize)> = frequencies
        .iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}
