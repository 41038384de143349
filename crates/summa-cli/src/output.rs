use std::io::Write;

use owo_colors::OwoColorize;
use summa_core::{Summary, SummaryOutcome};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the summary of one document, followed by its statistics.
pub fn print_summary(
    w: &mut dyn Write,
    file_name: &str,
    summary: &Summary,
    color: ColorMode,
) -> std::io::Result<()> {
    let sep = "=".repeat(60);
    if color.enabled() {
        writeln!(w, "{}", sep.bold().cyan())?;
        writeln!(w, "{} {}", "Summary of".bold(), file_name.bold().cyan())?;
        writeln!(w, "{}", sep.bold().cyan())?;
    } else {
        writeln!(w, "{}", sep)?;
        writeln!(w, "Summary of {}", file_name)?;
        writeln!(w, "{}", sep)?;
    }
    writeln!(w)?;

    match summary.outcome {
        SummaryOutcome::TooBrief => {
            if color.enabled() {
                writeln!(w, "{}", summary.text.yellow())?;
            } else {
                writeln!(w, "{}", summary.text)?;
            }
            return Ok(());
        }
        SummaryOutcome::Complete | SummaryOutcome::Condensed => {
            writeln!(w, "{}", summary.text)?;
        }
    }
    writeln!(w)?;

    let stats = format!(
        "Kept {} of {} sentences, compression {}",
        summary.selected.len(),
        summary.candidate_count,
        summary.stats.compression_ratio()
    );
    if color.enabled() {
        writeln!(w, "{}", stats.dimmed())?;
    } else {
        writeln!(w, "{}", stats)?;
    }
    Ok(())
}

/// Print the keyword list, if any.
pub fn print_keywords(
    w: &mut dyn Write,
    keywords: &[(String, usize)],
    color: ColorMode,
) -> std::io::Result<()> {
    if keywords.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    if color.enabled() {
        writeln!(w, "{}", "Key Topics & Keywords".bold())?;
    } else {
        writeln!(w, "Key Topics & Keywords")?;
    }
    for (word, count) in keywords {
        if color.enabled() {
            writeln!(w, "  {} {}", word.green(), format!("({})", count).dimmed())?;
        } else {
            writeln!(w, "  {} ({})", word, count)?;
        }
    }
    Ok(())
}
