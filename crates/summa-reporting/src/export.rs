use std::io::Write;
use std::path::Path;

use serde::Serialize;
use summa_core::SummaryOutcome;

use crate::timestamp::format_utc;
use crate::{ReportError, ReportFormat, SummaryReport};

const RULE_WIDTH: usize = 60;

/// Render `report` and write it to `path`.
pub fn export_report(
    report: &SummaryReport<'_>,
    format: ReportFormat,
    path: &Path,
) -> Result<(), ReportError> {
    let content = render_report(report, format)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Render `report` in the requested format.
pub fn render_report(
    report: &SummaryReport<'_>,
    format: ReportFormat,
) -> Result<String, ReportError> {
    Ok(match format {
        ReportFormat::Text => export_text(report),
        ReportFormat::Markdown => export_markdown(report),
        ReportFormat::Json => export_json(report)?,
    })
}

fn outcome_str(o: SummaryOutcome) -> &'static str {
    match o {
        SummaryOutcome::TooBrief => "too_brief",
        SummaryOutcome::Complete => "complete",
        SummaryOutcome::Condensed => "condensed",
    }
}

fn keyword_list(keywords: &[(String, usize)]) -> String {
    keywords
        .iter()
        .map(|(w, _)| w.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn export_text(report: &SummaryReport<'_>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("Summa - Document Summary Report\n");
    out.push_str(&format!("Generated: {}\n", format_utc(report.generated_at)));
    out.push_str(&format!("File: {}\n", report.file_name));
    out.push_str(&format!("Type: {}\n", report.file_type));
    out.push_str(&format!("Size: {} bytes\n", report.size_bytes));
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str(&report.summary.text);
    out.push_str("\n\n");

    if !report.keywords.is_empty() {
        out.push_str("Key Topics & Keywords\n");
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&keyword_list(report.keywords));
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        "Compression: {} ({} of {} characters)\n",
        report.summary.stats.compression_ratio(),
        report.summary.stats.summary_length,
        report.summary.stats.original_length
    ));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Processed by Summa Engine v{}\n",
        env!("CARGO_PKG_VERSION")
    ));
    out
}

fn export_markdown(report: &SummaryReport<'_>) -> String {
    let summary = report.summary;
    let mut out = String::new();

    out.push_str(&format!("# Summary: {}\n\n", report.file_name));
    out.push_str(&format!(
        "*Generated {} · {} · {} bytes*\n\n",
        format_utc(report.generated_at),
        report.file_type,
        report.size_bytes
    ));

    match summary.outcome {
        SummaryOutcome::TooBrief => {
            out.push_str(&format!("> {}\n\n", summary.text));
        }
        SummaryOutcome::Complete | SummaryOutcome::Condensed => {
            out.push_str(&summary.body);
            out.push_str("\n\n");
        }
    }

    out.push_str("| | |\n|---|---|\n");
    out.push_str(&format!(
        "| Sentences kept | {} of {} |\n",
        summary.selected.len(),
        summary.candidate_count
    ));
    out.push_str(&format!(
        "| Words | {} of {} |\n",
        summary.summary_words, summary.original_words
    ));
    out.push_str(&format!(
        "| Compression | {} |\n",
        summary.stats.compression_ratio()
    ));

    if !report.keywords.is_empty() {
        out.push_str("\n## Keywords\n\n");
        for (word, count) in report.keywords {
            out.push_str(&format!("- **{}** ({})\n", word, count));
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: JsonFileInfo<'a>,
    generated_at: String,
    outcome: &'static str,
    summary: &'a str,
    body: &'a str,
    sentences: Vec<&'a str>,
    stats: JsonStats,
    keywords: Vec<JsonKeyword<'a>>,
}

#[derive(Serialize)]
struct JsonFileInfo<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    file_type: &'a str,
    size: u64,
}

#[derive(Serialize)]
struct JsonStats {
    original_length: usize,
    summary_length: usize,
    compression_ratio: String,
    candidate_sentences: usize,
    summary_words: usize,
    original_words: usize,
}

#[derive(Serialize)]
struct JsonKeyword<'a> {
    word: &'a str,
    count: usize,
}

fn export_json(report: &SummaryReport<'_>) -> Result<String, serde_json::Error> {
    let summary = report.summary;
    let json = JsonReport {
        file: JsonFileInfo {
            name: report.file_name,
            file_type: report.file_type,
            size: report.size_bytes,
        },
        generated_at: format_utc(report.generated_at),
        outcome: outcome_str(summary.outcome),
        summary: &summary.text,
        body: &summary.body,
        sentences: summary.selected.iter().map(|c| c.text.as_str()).collect(),
        stats: JsonStats {
            original_length: summary.stats.original_length,
            summary_length: summary.stats.summary_length,
            compression_ratio: summary.stats.compression_ratio(),
            candidate_sentences: summary.candidate_count,
            summary_words: summary.summary_words,
            original_words: summary.original_words,
        },
        keywords: report
            .keywords
            .iter()
            .map(|(word, count)| JsonKeyword {
                word,
                count: *count,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_core::{Summarizer, SummarizerConfigBuilder, Summary};

    const TEXT: &str = "Tidal energy depends on the moon. \
                        Engineers place turbines in strong currents. \
                        Maintenance underwater is expensive. \
                        Storms sometimes damage the equipment. \
                        Tidal energy output is very predictable. \
                        Several countries now fund pilot plants.";

    fn summary() -> Summary {
        let config = SummarizerConfigBuilder::new()
            .max_sentences(3)
            .build()
            .unwrap();
        Summarizer::with_config(config).summarize_detailed(TEXT)
    }

    fn keywords() -> Vec<(String, usize)> {
        vec![("tidal".to_string(), 2), ("energy".to_string(), 2)]
    }

    fn report<'a>(summary: &'a Summary, keywords: &'a [(String, usize)]) -> SummaryReport<'a> {
        SummaryReport {
            file_name: "tides.txt",
            file_type: "TEXT",
            size_bytes: TEXT.len() as u64,
            generated_at: 0,
            summary,
            keywords,
        }
    }

    #[test]
    fn test_text_report_layout() {
        let s = summary();
        let k = keywords();
        let out = render_report(&report(&s, &k), ReportFormat::Text).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Summa - Document Summary Report");
        assert_eq!(lines[1], "Generated: 1970-01-01 00:00:00 UTC");
        assert_eq!(lines[2], "File: tides.txt");
        assert_eq!(lines[3], "Type: TEXT");
        assert_eq!(lines[5], "=".repeat(60));
        assert!(out.contains(&s.text));
        assert!(out.contains("tidal, energy"));
        assert!(out.trim_end().ends_with(&format!(
            "Processed by Summa Engine v{}",
            env!("CARGO_PKG_VERSION")
        )));
    }

    #[test]
    fn test_text_report_without_keywords() {
        let s = summary();
        let out = render_report(&report(&s, &[]), ReportFormat::Text).unwrap();
        assert!(!out.contains("Key Topics"));
    }

    #[test]
    fn test_markdown_report() {
        let s = summary();
        let k = keywords();
        let out = render_report(&report(&s, &k), ReportFormat::Markdown).unwrap();
        assert!(out.starts_with("# Summary: tides.txt\n"));
        assert!(out.contains(&s.body));
        assert!(out.contains("| Sentences kept | 3 of 6 |"));
        assert!(out.contains("- **tidal** (2)"));
    }

    #[test]
    fn test_json_report_fields() {
        let s = summary();
        let k = keywords();
        let out = render_report(&report(&s, &k), ReportFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["file"]["name"], "tides.txt");
        assert_eq!(v["file"]["type"], "TEXT");
        assert_eq!(v["outcome"], "condensed");
        assert_eq!(v["sentences"].as_array().unwrap().len(), 3);
        assert_eq!(v["stats"]["candidate_sentences"], 6);
        assert_eq!(v["keywords"][0]["word"], "tidal");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let s = summary();
        export_report(&report(&s, &[]), ReportFormat::Text, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Summa - Document Summary Report"));
    }
}
