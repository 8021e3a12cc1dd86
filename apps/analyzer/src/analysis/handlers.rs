use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;

use crate::analysis::{analyze_upload, resolve_language, AnalyzeResponse, Upload};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Multipart parts: `file` (required) and `language` (optional). Other parts
/// are ignored.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut file: Option<(Option<String>, Option<String>, Bytes)> = None;
    let mut language: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((filename, content_type, bytes));
            }
            Some("language") => {
                language = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing multipart part 'file'".to_string()))?;

    let upload = Upload {
        filename,
        content_type,
        bytes,
        language: resolve_language(language.as_deref(), &state.config.default_language),
    };

    Ok(Json(analyze_upload(upload).await?))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}
