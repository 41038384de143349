use std::path::Path;

use thiserror::Error;

pub mod transcript;
pub mod video;

pub use transcript::{TranscriptSegment, parse_transcript};
pub use video::extract_video_id;

/// Image extensions accepted for upload but requiring an OCR service.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF extraction error: {0}")]
    Pdf(#[from] summa_core::BackendError),
    #[error("invalid transcript: {0}")]
    Transcript(#[from] serde_json::Error),
    #[error("image text extraction requires an OCR service, which is not configured ({0})")]
    OcrUnavailable(String),
    #[error("unsupported file type: {0:?} (supported: PDF, TXT, MD, JSON transcript)")]
    UnsupportedType(String),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of summa-ingest)")]
    NoPdfSupport,
}

/// What kind of source a file holds, decided from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Transcript,
    Image,
}

impl DocumentKind {
    /// Classify `path` by extension (case-insensitive). `None` for unsupported types.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "md" => Some(DocumentKind::Text),
            "pdf" => Some(DocumentKind::Pdf),
            "json" => Some(DocumentKind::Transcript),
            e if IMAGE_EXTENSIONS.contains(&e) => Some(DocumentKind::Image),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Text => "TEXT",
            DocumentKind::Pdf => "PDF",
            DocumentKind::Transcript => "TRANSCRIPT",
            DocumentKind::Image => "IMAGE",
        }
    }
}

/// Extraction settings. The PDF fields are only read when the `pdf` feature is on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestConfig {
    /// Fraction of page height at the top whose text blocks are skipped.
    pub header_exclusion: Option<f32>,
    /// Fraction of page height at the bottom whose text blocks are skipped.
    pub footer_exclusion: Option<f32>,
    /// Stop reading a PDF after this many pages.
    pub max_pages: Option<usize>,
}

/// Text pulled out of a source file, ready for summarization.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub kind: DocumentKind,
    pub text: String,
    pub size_bytes: u64,
}

/// Extract plain text from a text, PDF, or transcript file with default settings.
pub fn extract_text(path: &Path) -> Result<ExtractedDocument, IngestError> {
    extract_text_with_config(path, &IngestConfig::default())
}

/// Config-aware version of [`extract_text`].
///
/// Dispatches on file extension:
/// - `.txt` / `.md` → read as UTF-8, dropping invalid byte sequences
/// - `.pdf` → MuPDF backend (requires `pdf` feature)
/// - `.json` → YouTube-style transcript segments joined with spaces
/// - images → [`IngestError::OcrUnavailable`]
pub fn extract_text_with_config(
    path: &Path,
    config: &IngestConfig,
) -> Result<ExtractedDocument, IngestError> {
    let kind = DocumentKind::from_path(path).ok_or_else(|| {
        IngestError::UnsupportedType(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string(),
        )
    })?;

    let size_bytes = std::fs::metadata(path)
        .map_err(|source| IngestError::Read {
            path: path.display().to_string(),
            source,
        })?
        .len();

    tracing::debug!(path = %path.display(), kind = kind.label(), size_bytes, "ingesting document");

    let text = match kind {
        DocumentKind::Text => decode_lossy(&read_bytes(path)?),
        DocumentKind::Transcript => {
            let segments = parse_transcript(&decode_lossy(&read_bytes(path)?))?;
            transcript::join_segments(&segments)
        }
        DocumentKind::Pdf => extract_pdf(path, config)?,
        DocumentKind::Image => {
            return Err(IngestError::OcrUnavailable(path.display().to_string()));
        }
    };

    Ok(ExtractedDocument {
        kind,
        text,
        size_bytes,
    })
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, IngestError> {
    std::fs::read(path).map_err(|source| IngestError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Decode UTF-8, silently dropping invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(feature = "pdf")]
fn pdf_backend(config: &IngestConfig) -> summa_pdf_mupdf::MupdfBackend {
    let mut backend = summa_pdf_mupdf::MupdfBackend::new();
    if let Some(ratio) = config.header_exclusion {
        backend = backend.with_header_exclusion(ratio);
    }
    if let Some(ratio) = config.footer_exclusion {
        backend = backend.with_footer_exclusion(ratio);
    }
    if let Some(pages) = config.max_pages {
        backend = backend.with_max_pages(pages);
    }
    backend
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path, config: &IngestConfig) -> Result<String, IngestError> {
    use summa_core::PdfBackend;

    Ok(pdf_backend(config).extract_text(path)?)
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_path: &Path, _config: &IngestConfig) -> Result<String, IngestError> {
    Err(IngestError::NoPdfSupport)
}
