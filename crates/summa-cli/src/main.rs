use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use summa_core::config_file::{self, ConfigFile, OutputSection, SummarizerSection};
use summa_core::{BoundaryPolicy, Summarizer, SummarizerConfig, top_keywords};
use summa_ingest::IngestConfig;
use summa_reporting::{ReportFormat, SummaryReport};

mod output;

use output::ColorMode;

/// Summa - Extractive summaries for documents and transcripts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a text, PDF, or transcript file ("-" reads stdin)
    Summarize {
        /// Path to the document, or "-" for stdin
        file_path: PathBuf,

        /// Maximum number of sentences to keep
        #[arg(short = 'n', long)]
        max_sentences: Option<usize>,

        /// Sentences must be longer than this many characters
        #[arg(long)]
        min_sentence_length: Option<usize>,

        /// Sentence boundary policy: punctuation or lookahead
        #[arg(long)]
        boundary: Option<BoundaryPolicy>,

        /// Also list the top N keywords
        #[arg(short, long)]
        keywords: Option<usize>,

        /// Report format: text, markdown, or json
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a timestamped report (summary_YYYYMMDD_HHMMSS) into this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Only read the first N pages of a PDF
        #[arg(long)]
        max_pages: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List the most frequent keywords of a document
    Keywords {
        /// Path to the document, or "-" for stdin
        file_path: PathBuf,

        /// Number of keywords to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Print the video ID of a YouTube URL
    VideoId {
        url: String,
    },

    /// Show the config file locations, or write a default config
    Config {
        /// Write a config populated with the current settings to the platform config path
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file_config = config_file::load_config();

    match cli.command {
        Command::Summarize {
            file_path,
            max_sentences,
            min_sentence_length,
            boundary,
            keywords,
            format,
            output,
            report_dir,
            max_pages,
            no_color,
        } => summarize(
            &file_config,
            SummarizeArgs {
                file_path,
                max_sentences,
                min_sentence_length,
                boundary,
                keywords,
                format,
                output,
                report_dir,
                max_pages,
                no_color,
            },
        ),
        Command::Keywords { file_path, count } => keywords(&file_config, &file_path, count),
        Command::VideoId { url } => match summa_ingest::extract_video_id(&url) {
            Some(id) => {
                println!("{}", id);
                Ok(())
            }
            None => anyhow::bail!("Not a recognized YouTube URL: {}", url),
        },
        Command::Config { init } => show_config(&file_config, init),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct SummarizeArgs {
    file_path: PathBuf,
    max_sentences: Option<usize>,
    min_sentence_length: Option<usize>,
    boundary: Option<BoundaryPolicy>,
    keywords: Option<usize>,
    format: Option<ReportFormat>,
    output: Option<PathBuf>,
    report_dir: Option<PathBuf>,
    max_pages: Option<usize>,
    no_color: bool,
}

/// Build the summarizer config. Precedence: CLI flags > env vars > config file > defaults.
fn resolve_config(
    file_config: &ConfigFile,
    max_sentences: Option<usize>,
    min_sentence_length: Option<usize>,
    boundary: Option<BoundaryPolicy>,
) -> anyhow::Result<SummarizerConfig> {
    let mut builder = file_config
        .to_builder()
        .context("Invalid [summarizer] section in config file")?;

    let max_sentences = max_sentences.or_else(|| {
        std::env::var("SUMMA_MAX_SENTENCES")
            .ok()
            .and_then(|v| v.parse().ok())
    });
    if let Some(n) = max_sentences {
        builder = builder.max_sentences(n);
    }
    if let Some(n) = min_sentence_length {
        builder = builder.min_sentence_length(n);
    }
    if let Some(policy) = boundary {
        builder = builder.boundary_policy(policy);
    }
    Ok(builder.build()?)
}

/// PDF extraction settings from the `[pdf]` config section, with an optional page cap override.
fn ingest_config(file_config: &ConfigFile, max_pages: Option<usize>) -> IngestConfig {
    let pdf = file_config.pdf.clone().unwrap_or_default();
    IngestConfig {
        header_exclusion: pdf.header_exclusion,
        footer_exclusion: pdf.footer_exclusion,
        max_pages: max_pages.or(pdf.max_pages),
    }
}

/// Input text plus the metadata the report header needs.
struct LoadedInput {
    file_name: String,
    file_type: &'static str,
    size_bytes: u64,
    text: String,
}

fn load_input(file_path: &Path, ingest: &IngestConfig) -> anyhow::Result<LoadedInput> {
    if file_path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return Ok(LoadedInput {
            file_name: "stdin".to_string(),
            file_type: "TEXT",
            size_bytes: bytes.len() as u64,
            text: summa_ingest::decode_lossy(&bytes),
        });
    }

    if !file_path.exists() {
        anyhow::bail!("File not found: {}", file_path.display());
    }

    let doc = summa_ingest::extract_text_with_config(file_path, ingest)?;
    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.display().to_string());

    Ok(LoadedInput {
        file_name,
        file_type: doc.kind.label(),
        size_bytes: doc.size_bytes,
        text: doc.text,
    })
}

fn summarize(file_config: &ConfigFile, args: SummarizeArgs) -> anyhow::Result<()> {
    let output_section = file_config.output.clone().unwrap_or_default();

    let config = resolve_config(
        file_config,
        args.max_sentences,
        args.min_sentence_length,
        args.boundary,
    )?;
    let format = match args.format {
        Some(f) => f,
        None => output_section
            .format
            .as_deref()
            .map(str::parse::<ReportFormat>)
            .transpose()
            .context("Invalid output format in config file")?
            .unwrap_or_default(),
    };
    let keyword_count = args.keywords.or(output_section.keywords).unwrap_or(0);
    let report_dir = args
        .report_dir
        .or_else(|| std::env::var("SUMMA_OUTPUT_DIR").ok().map(PathBuf::from))
        .or_else(|| output_section.report_dir.map(PathBuf::from));

    let input = load_input(&args.file_path, &ingest_config(file_config, args.max_pages))?;
    tracing::info!(
        file = %input.file_name,
        chars = input.text.chars().count(),
        max_sentences = config.max_sentences(),
        boundary = %config.boundary_policy(),
        "summarizing"
    );

    let keywords = if keyword_count > 0 {
        top_keywords(&input.text, keyword_count, &config)
    } else {
        Vec::new()
    };
    let summary = Summarizer::with_config(config).summarize_detailed(&input.text);

    let report = SummaryReport {
        file_name: &input.file_name,
        file_type: input.file_type,
        size_bytes: input.size_bytes,
        generated_at: summa_reporting::now_unix_secs(),
        summary: &summary,
        keywords: &keywords,
    };

    let mut written_to = Vec::new();
    if let Some(ref path) = args.output {
        summa_reporting::export_report(&report, format, path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        written_to.push(path.clone());
    }
    if let Some(ref dir) = report_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory {}", dir.display()))?;
        let path = dir.join(summa_reporting::default_report_name(
            report.generated_at,
            format,
        ));
        summa_reporting::export_report(&report, format, &path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        written_to.push(path);
    }

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    if written_to.is_empty() {
        match format {
            ReportFormat::Text => {
                let color = ColorMode(!args.no_color);
                output::print_summary(&mut writer, &input.file_name, &summary, color)?;
                output::print_keywords(&mut writer, &keywords, color)?;
            }
            ReportFormat::Markdown | ReportFormat::Json => {
                let rendered = summa_reporting::render_report(&report, format)?;
                writeln!(writer, "{}", rendered)?;
            }
        }
    } else {
        for path in &written_to {
            writeln!(writer, "Report written to {}", path.display())?;
        }
    }

    Ok(())
}

fn keywords(file_config: &ConfigFile, file_path: &Path, count: usize) -> anyhow::Result<()> {
    let config = resolve_config(file_config, None, None, None)?;
    let input = load_input(file_path, &ingest_config(file_config, None))?;
    let keywords = top_keywords(&input.text, count, &config);

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    if keywords.is_empty() {
        writeln!(writer, "No keywords found in {}", input.file_name)?;
        return Ok(());
    }
    for (word, n) in &keywords {
        writeln!(writer, "{:>5}  {}", n, word)?;
    }
    Ok(())
}

fn show_config(file_config: &ConfigFile, init: bool) -> anyhow::Result<()> {
    if init {
        if let Some(path) = config_file::config_path().filter(|p| p.exists()) {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        let config = resolve_config(file_config, None, None, None)?;
        let defaults = ConfigFile {
            summarizer: Some(SummarizerSection {
                max_sentences: Some(config.max_sentences()),
                boundary_policy: Some(config.boundary_policy().to_string()),
                min_sentence_length: Some(config.min_sentence_length()),
                min_text_length: Some(config.min_text_length()),
                min_keyword_length: Some(config.min_keyword_length()),
                weights: Some(config.scoring_weights()),
                ..Default::default()
            }),
            output: Some(OutputSection {
                format: Some(ReportFormat::default().to_string()),
                ..Default::default()
            }),
            pdf: None,
        };
        let path = config_file::save_config(&defaults).map_err(|e| anyhow::anyhow!(e))?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    match config_file::config_path() {
        Some(path) => println!(
            "Platform config: {} ({})",
            path.display(),
            if path.exists() { "found" } else { "not found" }
        ),
        None => println!("Platform config: (no config directory on this platform)"),
    }
    let cwd = Path::new(".summa.toml");
    println!(
        "Local config:    {} ({})",
        cwd.display(),
        if cwd.exists() { "found" } else { "not found" }
    );

    let config = resolve_config(file_config, None, None, None)?;
    println!();
    println!("max_sentences       = {}", config.max_sentences());
    println!("boundary_policy     = {}", config.boundary_policy());
    println!("min_sentence_length = {}", config.min_sentence_length());
    println!("min_text_length     = {}", config.min_text_length());
    println!("min_keyword_length  = {}", config.min_keyword_length());
    let w = config.scoring_weights();
    println!(
        "weights             = length {}, position {}, keyword {}",
        w.length, w.position, w.keyword
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_core::config_file::PdfSection;

    #[test]
    fn test_ingest_config_uses_pdf_section() {
        let file_config = ConfigFile {
            pdf: Some(PdfSection {
                header_exclusion: Some(0.05),
                footer_exclusion: Some(0.08),
                max_pages: Some(20),
            }),
            ..Default::default()
        };
        let config = ingest_config(&file_config, None);
        assert_eq!(config.header_exclusion, Some(0.05));
        assert_eq!(config.footer_exclusion, Some(0.08));
        assert_eq!(config.max_pages, Some(20));

        assert_eq!(ingest_config(&file_config, Some(2)).max_pages, Some(2));
        assert_eq!(ingest_config(&ConfigFile::default(), None), IngestConfig::default());
    }
}
