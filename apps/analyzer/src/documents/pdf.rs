use async_trait::async_trait;
use bytes::Bytes;

use crate::documents::{run_blocking, DocumentFormat, ExtractError, TextExtractor};

/// PDF uploads via `pdf-extract`. Parsing is CPU-bound, so it runs on the
/// blocking pool.
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractError> {
        run_blocking(DocumentFormat::Pdf, move || extract_pdf_text(&bytes)).await
    }
}

pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
