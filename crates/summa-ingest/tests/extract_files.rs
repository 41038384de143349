//! File-based ingestion tests. PDF extraction is covered by the backend crate;
//! these exercise dispatch, decoding and the error paths.

use std::io::Write;

use summa_ingest::{
    DocumentKind, IngestConfig, IngestError, extract_text, extract_text_with_config,
};

fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    path
}

#[test]
fn text_file_is_read_with_size() {
    let dir = tempfile::tempdir().unwrap();
    let body = "Plain notes about the quarterly review.\nSecond line here.";
    let path = write_file(&dir, "notes.txt", body.as_bytes());

    let doc = extract_text(&path).unwrap();
    assert_eq!(doc.kind, DocumentKind::Text);
    assert_eq!(doc.text, body);
    assert_eq!(doc.size_bytes, body.len() as u64);
}

#[test]
fn invalid_utf8_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "broken.md", b"valid \xc3\x28start and \xffend");
    let doc = extract_text(&path).unwrap();
    assert_eq!(doc.text, "valid (start and end");
}

#[test]
fn transcript_json_is_joined() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "captions.json",
        br#"[{"text": "first caption", "start": 0, "duration": 1},
             {"text": "second caption", "start": 1, "duration": 1}]"#,
    );
    let doc = extract_text(&path).unwrap();
    assert_eq!(doc.kind, DocumentKind::Transcript);
    assert_eq!(doc.text, "first caption second caption");
}

#[test]
fn malformed_transcript_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "captions.json", b"not json at all");
    assert!(matches!(
        extract_text(&path),
        Err(IngestError::Transcript(_))
    ));
}

#[test]
fn images_need_ocr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "scan.png", &[0x89, b'P', b'N', b'G']);
    assert!(matches!(
        extract_text(&path),
        Err(IngestError::OcrUnavailable(_))
    ));
}

#[test]
fn unsupported_and_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", b"a,b,c");
    assert!(matches!(
        extract_text(&path),
        Err(IngestError::UnsupportedType(ext)) if ext == "csv"
    ));

    let missing = dir.path().join("missing.txt");
    assert!(matches!(extract_text(&missing), Err(IngestError::Read { .. })));
}

#[cfg(feature = "pdf")]
#[test]
fn corrupt_pdf_with_page_cap_is_a_pdf_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "broken.pdf", b"this is not a pdf");
    let config = IngestConfig {
        max_pages: Some(1),
        ..Default::default()
    };
    assert!(matches!(
        extract_text_with_config(&path, &config),
        Err(IngestError::Pdf(_))
    ));
}

#[test]
fn pdf_settings_do_not_affect_text_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "notes.txt", b"Unchanged plain text.");
    let config = IngestConfig {
        header_exclusion: Some(0.1),
        max_pages: Some(1),
        ..Default::default()
    };
    let doc = extract_text_with_config(&path, &config).unwrap();
    assert_eq!(doc.text, "Unchanged plain text.");
}
