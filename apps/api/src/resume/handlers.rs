//! Axum route handler for resume upload and analysis.

use anyhow::anyhow;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tokio::task::JoinError;
use tracing::info;

use crate::errors::AppError;
use crate::models::skills::ResumeAnalysis;
use crate::resume::analyzer::analyze_resume;
use crate::resume::extract::{extract_text, ExtractError, ResumeFormat};
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

struct Upload {
    content_type: Option<String>,
    file_name: Option<String>,
    data: Bytes,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Resume file is too large".to_string())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(Upload {
            content_type,
            file_name,
            data,
        }));
    }
    Ok(None)
}

/// A panic in the parser means the document was malformed; a cancelled task
/// is a server fault.
fn extraction_aborted(e: JoinError) -> AppError {
    if e.is_panic() {
        let reason = "the document structure is malformed".to_string();
        ExtractError::Unreadable(reason).into()
    } else {
        AppError::Internal(anyhow!("Resume extraction task was cancelled: {e}"))
    }
}

/// POST /api/upload
///
/// Accepts a PDF, DOCX or plain-text resume in the `resume` field and returns the
/// extracted skills plus a profile assessment.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let upload = read_resume_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

    let limit = state.config.max_upload_bytes;
    if upload.data.len() > limit {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume file exceeds the {limit} byte limit"
        )));
    }

    let content_type = upload.content_type.as_deref();
    let format = ResumeFormat::detect(content_type, upload.file_name.as_deref())?;
    info!(
        "Resume upload: {:?}, {} bytes, file={}",
        format,
        upload.data.len(),
        upload.file_name.as_deref().unwrap_or("<unnamed>")
    );

    // Parsing is CPU-bound and pdf-extract may panic on malformed input.
    let data = upload.data;
    let text = tokio::task::spawn_blocking(move || extract_text(&data, format))
        .await
        .map_err(extraction_aborted)??;

    let analysis = analyze_resume(state.llm.as_ref(), &text).await;
    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_cancelled_extraction_is_internal_error() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let err = handle.await.unwrap_err();
        assert!(err.is_cancelled());

        let response = extraction_aborted(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_panicking_extraction_is_unprocessable() {
        let err = tokio::task::spawn_blocking(|| panic!("broken xref table"))
            .await
            .unwrap_err();

        let response = extraction_aborted(err).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
