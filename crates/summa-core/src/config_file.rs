use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::config::SummarizerConfigBuilder;
use crate::scoring::ScoringWeights;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub summarizer: Option<SummarizerSection>,
    pub output: Option<OutputSection>,
    pub pdf: Option<PdfSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizerSection {
    pub max_sentences: Option<usize>,
    pub boundary_policy: Option<String>,
    pub min_sentence_length: Option<usize>,
    pub min_text_length: Option<usize>,
    pub min_keyword_length: Option<usize>,
    /// Replaces the built-in stop-word list.
    pub stop_words: Option<Vec<String>>,
    /// Added to the built-in (or replaced) stop-word list.
    pub extra_stop_words: Option<Vec<String>>,
    pub weights: Option<ScoringWeights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    pub report_dir: Option<String>,
    pub format: Option<String>,
    pub keywords: Option<usize>,
}

/// PDF extraction settings, passed through to the MuPDF backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfSection {
    /// Fraction of page height at the top whose text blocks are skipped.
    pub header_exclusion: Option<f32>,
    /// Fraction of page height at the bottom whose text blocks are skipped.
    pub footer_exclusion: Option<f32>,
    pub max_pages: Option<usize>,
}

impl ConfigFile {
    /// Seed a [`SummarizerConfigBuilder`] from the `[summarizer]` section.
    pub fn to_builder(&self) -> Result<SummarizerConfigBuilder, ConfigError> {
        let mut builder = SummarizerConfigBuilder::new();
        let Some(s) = self.summarizer.as_ref() else {
            return Ok(builder);
        };

        if let Some(n) = s.max_sentences {
            builder = builder.max_sentences(n);
        }
        if let Some(ref policy) = s.boundary_policy {
            builder = builder.boundary_policy(policy.parse()?);
        }
        if let Some(n) = s.min_sentence_length {
            builder = builder.min_sentence_length(n);
        }
        if let Some(n) = s.min_text_length {
            builder = builder.min_text_length(n);
        }
        if let Some(n) = s.min_keyword_length {
            builder = builder.min_keyword_length(n);
        }
        match (&s.stop_words, &s.extra_stop_words) {
            (Some(words), extra) => {
                let mut all = words.clone();
                all.extend(extra.iter().flatten().cloned());
                builder = builder.set_stop_words(all);
            }
            (None, Some(extra)) => {
                for word in extra {
                    builder = builder.add_stop_word(word.clone());
                }
            }
            (None, None) => {}
        }
        if let Some(ref w) = s.weights {
            builder = builder.scoring_weights(w.clone());
        }
        Ok(builder)
    }
}

/// Platform config directory path: `<config_dir>/summa/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("summa").join("config.toml"))
}

/// Load config by cascading CWD `.summa.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".summa.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let bs = base.summarizer.unwrap_or_default();
    let os = overlay.summarizer.unwrap_or_default();
    let bo = base.output.unwrap_or_default();
    let oo = overlay.output.unwrap_or_default();
    let bp = base.pdf.unwrap_or_default();
    let op = overlay.pdf.unwrap_or_default();

    ConfigFile {
        summarizer: Some(SummarizerSection {
            max_sentences: os.max_sentences.or(bs.max_sentences),
            boundary_policy: os.boundary_policy.or(bs.boundary_policy),
            min_sentence_length: os.min_sentence_length.or(bs.min_sentence_length),
            min_text_length: os.min_text_length.or(bs.min_text_length),
            min_keyword_length: os.min_keyword_length.or(bs.min_keyword_length),
            stop_words: os.stop_words.or(bs.stop_words),
            extra_stop_words: os.extra_stop_words.or(bs.extra_stop_words),
            weights: os.weights.or(bs.weights),
        }),
        output: Some(OutputSection {
            report_dir: oo.report_dir.or(bo.report_dir),
            format: oo.format.or(bo.format),
            keywords: oo.keywords.or(bo.keywords),
        }),
        pdf: Some(PdfSection {
            header_exclusion: op.header_exclusion.or(bp.header_exclusion),
            footer_exclusion: op.footer_exclusion.or(bp.footer_exclusion),
            max_pages: op.max_pages.or(bp.max_pages),
        }),
    }
}

/// Save the config to the platform config directory.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf, String> {
    let path = config_path().ok_or_else(|| "Could not determine config directory".to_string())?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Write the config as pretty TOML, creating parent directories.
pub fn save_to_path(config: &ConfigFile, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryPolicy;

    #[test]
    fn summarizer_section_round_trip_toml() {
        let config = ConfigFile {
            summarizer: Some(SummarizerSection {
                max_sentences: Some(4),
                boundary_policy: Some("lookahead".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn weights_parse_from_toml() {
        let toml_str = "[summarizer.weights]\nlength = 0.2\nposition = 0.2\nkeyword = 0.6\n";
        let parsed: ConfigFile = toml::from_str(toml_str).unwrap();
        let weights = parsed.summarizer.unwrap().weights.unwrap();
        assert_eq!(weights.keyword, 0.6);
    }

    #[test]
    fn pdf_section_parses_from_toml() {
        let toml_str = "[pdf]\nheader_exclusion = 0.05\nmax_pages = 12\n";
        let pdf = toml::from_str::<ConfigFile>(toml_str).unwrap().pdf.unwrap();
        assert_eq!(pdf.header_exclusion, Some(0.05));
        assert_eq!(pdf.footer_exclusion, None);
        assert_eq!(pdf.max_pages, Some(12));
    }

    #[test]
    fn absent_output_deserializes_as_none() {
        let toml_str = "[summarizer]\nmax_sentences = 3\n";
        let parsed: ConfigFile = toml::from_str(toml_str).unwrap();
        assert!(parsed.output.is_none());
    }

    #[test]
    fn merge_overlay_wins() {
        let base = ConfigFile {
            summarizer: Some(SummarizerSection {
                max_sentences: Some(5),
                min_text_length: Some(80),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overlay = ConfigFile {
            summarizer: Some(SummarizerSection {
                max_sentences: Some(3),
                ..Default::default()
            }),
            output: Some(OutputSection {
                format: Some("json".to_string()),
                ..Default::default()
            }),
            pdf: Some(PdfSection {
                max_pages: Some(4),
                ..Default::default()
            }),
        };
        let merged = merge(base, overlay);
        let s = merged.summarizer.unwrap();
        assert_eq!(s.max_sentences, Some(3));
        assert_eq!(s.min_text_length, Some(80));
        assert_eq!(merged.output.unwrap().format.as_deref(), Some("json"));
        assert_eq!(merged.pdf.unwrap().max_pages, Some(4));
    }

    #[test]
    fn to_builder_applies_section() {
        let config = ConfigFile {
            summarizer: Some(SummarizerSection {
                max_sentences: Some(2),
                boundary_policy: Some("lookahead".to_string()),
                extra_stop_words: Some(vec!["however".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let built = config.to_builder().unwrap().build().unwrap();
        assert_eq!(built.max_sentences(), 2);
        assert_eq!(built.boundary_policy(), BoundaryPolicy::Lookahead);
        assert_eq!(built.min_sentence_length(), 15);
    }

    #[test]
    fn to_builder_rejects_unknown_policy() {
        let config = ConfigFile {
            summarizer: Some(SummarizerSection {
                boundary_policy: Some("semantic".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            config.to_builder(),
            Err(ConfigError::UnknownBoundaryPolicy(_))
        ));
    }

    #[test]
    fn low_text_floor_from_file_fails_build() {
        let parsed: ConfigFile = toml::from_str("[summarizer]\nmin_text_length = 0\n").unwrap();
        assert_eq!(
            parsed.to_builder().unwrap().build().unwrap_err(),
            ConfigError::MinTextLengthBelowFloor {
                value: 0,
                floor: 50
            }
        );
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = ConfigFile {
            output: Some(OutputSection {
                keywords: Some(8),
                ..Default::default()
            }),
            ..Default::default()
        };
        save_to_path(&config, &path).unwrap();
        assert_eq!(load_from_path(&path), Some(config));
    }

    #[test]
    fn load_from_missing_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_path(&dir.path().join("absent.toml")).is_none());
    }
}
