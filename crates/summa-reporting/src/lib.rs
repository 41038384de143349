use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod export;
pub mod timestamp;

pub use export::{export_report, render_report};
pub use timestamp::{format_compact, format_utc, now_unix_secs};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown report format: {0} (expected text, markdown or json)")]
    UnknownFormat(String),
}

/// Output format for a summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        })
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Everything needed to render a report for one summarized document.
#[derive(Debug, Clone)]
pub struct SummaryReport<'a> {
    pub file_name: &'a str,
    /// Short type label such as `PDF` or `TEXT`.
    pub file_type: &'a str,
    pub size_bytes: u64,
    /// Seconds since the Unix epoch.
    pub generated_at: u64,
    pub summary: &'a summa_core::Summary,
    pub keywords: &'a [(String, usize)],
}

/// Default report file name: `summary_YYYYMMDD_HHMMSS.<ext>`.
pub fn default_report_name(generated_at: u64, format: ReportFormat) -> String {
    format!(
        "summary_{}.{}",
        format_compact(generated_at),
        format.extension()
    )
}
