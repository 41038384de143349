use serde::Deserialize;

/// One caption entry of a YouTube-style transcript export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
}

/// Parse a JSON array of `{"text", "start", "duration"}` segments.
pub fn parse_transcript(json: &str) -> Result<Vec<TranscriptSegment>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Concatenate segment texts into running prose, one space between segments.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"text": "welcome back to the channel", "start": 0.0, "duration": 2.5},
        {"text": "  today we look at ownership  ", "start": 2.5, "duration": 3.0},
        {"text": "", "start": 5.5, "duration": 0.5},
        {"text": "and borrowing", "start": 6.0, "duration": 1.5}
    ]"#;

    #[test]
    fn test_parse_and_join() {
        let segments = parse_transcript(SAMPLE).unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(
            join_segments(&segments),
            "welcome back to the channel today we look at ownership and borrowing"
        );
    }

    #[test]
    fn test_timing_fields_optional() {
        let segments = parse_transcript(r#"[{"text": "no timing"}]"#).unwrap();
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].duration, 0.0);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(parse_transcript(r#"{"text": "single"}"#).is_err());
    }
}
