//! Document text extraction. Detects the uploaded format and hands the bytes
//! to the matching `TextExtractor`.

pub mod docx;
pub mod pdf;
pub mod plain;

use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::documents::docx::DocxExtractor;
use crate::documents::pdf::PdfExtractor;
use crate::documents::plain::PlainTextExtractor;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX archive is unreadable: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX archive has no word/document.xml")]
    MissingDocumentPart,

    #[error("DOCX body exceeds {limit} bytes once decompressed")]
    DocumentTooLarge { limit: u64 },

    #[error("DOCX body is malformed: {0}")]
    Xml(String),

    #[error("{0} parser panicked on malformed input")]
    ParserPanicked(DocumentFormat),

    #[error("I/O error while reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Format named by the filename extension. An extension is taken at its
    /// word: a `.pdf` that fails to parse is an error, not a text upload.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::Text),
            _ => None,
        }
    }

    /// Best guess when the filename says nothing: magic bytes, then the
    /// declared content type, then plain text.
    pub fn sniff(content_type: Option<&str>, bytes: &[u8]) -> Self {
        if bytes.starts_with(b"%PDF-") {
            return DocumentFormat::Pdf;
        }
        if bytes.starts_with(b"PK\x03\x04") {
            return DocumentFormat::Docx;
        }
        content_type
            .and_then(Self::from_content_type)
            .unwrap_or(DocumentFormat::Text)
    }

    fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(DocumentFormat::Pdf),
            DOCX_CONTENT_TYPE => Some(DocumentFormat::Docx),
            t if t.starts_with("text/") => Some(DocumentFormat::Text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Text => "text",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns raw document bytes into text, newline-separated per page or
/// paragraph.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractError>;
}

static PDF: PdfExtractor = PdfExtractor;
static DOCX: DocxExtractor = DocxExtractor;
static PLAIN: PlainTextExtractor = PlainTextExtractor;

pub fn extractor_for(format: DocumentFormat) -> &'static dyn TextExtractor {
    match format {
        DocumentFormat::Pdf => &PDF,
        DocumentFormat::Docx => &DOCX,
        DocumentFormat::Text => &PLAIN,
    }
}

pub async fn extract_text(format: DocumentFormat, bytes: Bytes) -> Result<String, ExtractError> {
    extractor_for(format).extract(bytes).await
}

/// Tries `hint`, then PDF, then DOCX, and finally decodes the bytes as text.
/// Only a failed blocking task is an error; parse failures move on to the
/// next candidate. Returns the format that produced the text.
pub async fn extract_best_effort(
    hint: DocumentFormat,
    bytes: Bytes,
) -> Result<(DocumentFormat, String), ExtractError> {
    let mut candidates = vec![hint];
    for format in [DocumentFormat::Pdf, DocumentFormat::Docx, DocumentFormat::Text] {
        if !candidates.contains(&format) {
            candidates.push(format);
        }
    }

    for format in candidates {
        match extract_text(format, bytes.clone()).await {
            Ok(text) => return Ok((format, text)),
            Err(ExtractError::Task(e)) => return Err(ExtractError::Task(e)),
            Err(e) => tracing::debug!(%format, "not a {format} document: {e}"),
        }
    }

    // Text decoding cannot fail, so the loop always returns first.
    Ok((
        DocumentFormat::Text,
        String::from_utf8_lossy(&bytes).into_owned(),
    ))
}

/// Runs a CPU-bound parser on the blocking pool. A panicking parser is
/// reported as `ParserPanicked` rather than a task failure.
pub(crate) async fn run_blocking<F>(format: DocumentFormat, parse: F) -> Result<String, ExtractError>
where
    F: FnOnce() -> Result<String, ExtractError> + Send + 'static,
{
    match tokio::task::spawn_blocking(parse).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => Err(ExtractError::ParserPanicked(format)),
        Err(e) => Err(e.into()),
    }
}
