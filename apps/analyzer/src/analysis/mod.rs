pub mod handlers;

use bytes::Bytes;
use serde::Serialize;

use crate::documents::{self, DocumentFormat};
use crate::errors::AppError;
use crate::skills::extract_skills;

/// A resume pulled out of the multipart request.
#[derive(Debug)]
pub struct Upload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub skills: Vec<String>,
}

/// Extracts the upload's text and matches it against the skill vocabulary.
pub async fn analyze_upload(upload: Upload) -> Result<AnalyzeResponse, AppError> {
    if upload.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let size = upload.bytes.len();
    let declared = upload
        .filename
        .as_deref()
        .and_then(DocumentFormat::from_filename);

    // A known extension is parsed strictly; anything else is best effort.
    let (format, text) = match declared {
        Some(format) => (format, documents::extract_text(format, upload.bytes).await?),
        None => {
            let hint = DocumentFormat::sniff(upload.content_type.as_deref(), &upload.bytes);
            documents::extract_best_effort(hint, upload.bytes).await?
        }
    };
    let skills = extract_skills(&text, &upload.language);

    tracing::info!(
        filename = upload.filename.as_deref().unwrap_or("<unnamed>"),
        %format,
        language = %upload.language,
        bytes = size,
        skills = skills.len(),
        "Analyzed resume"
    );

    Ok(AnalyzeResponse { skills })
}

/// Trims and lowercases a requested language tag; blank means `default`.
pub fn resolve_language(requested: Option<&str>, default: &str) -> String {
    requested
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| default.to_string())
}
