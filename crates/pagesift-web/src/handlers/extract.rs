use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, Path, State};

use pagesift_core::BackendKind;

use crate::error::ApiError;
use crate::models::ExtractionResponse;
use crate::state::AppState;
use crate::upload;

/// `POST /extract`: run the full fallback chain over the uploaded PDF.
pub async fn extract(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ExtractionResponse>, ApiError> {
    let upload = upload::read_pdf_upload(multipart).await?;

    let dispatcher = state.dispatcher.clone();
    // PDF parsing is CPU-bound; keep it off the async executor.
    let result = tokio::task::spawn_blocking(move || dispatcher.extract(&upload.data))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if result.pages.is_empty() {
        return Err(ApiError::NoExtractableText);
    }

    Ok(Json(ExtractionResponse::from_result(result)))
}

/// `POST /extract/{method}`: pin a single backend, no fallback.
pub async fn extract_with_method(
    State(state): State<Arc<AppState>>,
    Path(method): Path<String>,
    multipart: Multipart,
) -> Result<Json<ExtractionResponse>, ApiError> {
    let kind = BackendKind::parse(&method).ok_or(ApiError::UnsupportedMethod(method))?;

    let upload = upload::read_pdf_upload(multipart).await?;

    let dispatcher = state.dispatcher.clone();
    let pages = tokio::task::spawn_blocking(move || dispatcher.extract_with(kind, &upload.data))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if pages.is_empty() {
        return Err(ApiError::NothingExtracted(kind));
    }

    Ok(Json(ExtractionResponse::from_pages(kind, pages)))
}
