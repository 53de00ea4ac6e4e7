use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use pagesift_core::BackendKind;

use crate::models::ErrorResponse;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("file must be a PDF")]
    UnsupportedFile,
    #[error("invalid method {0:?}; use one of: pdfium, mupdf, pdf-extract")]
    UnsupportedMethod(String),
    #[error(
        "could not extract text from the PDF; the file may be corrupted or contain only images"
    )]
    NoExtractableText,
    #[error("could not extract text using {0}; the backend may be unavailable or the PDF incompatible")]
    NothingExtracted(BackendKind),
    #[error("error processing PDF: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedFile | ApiError::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            ApiError::NoExtractableText | ApiError::NothingExtracted(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::UnsupportedFile => "unsupported_file",
            ApiError::UnsupportedMethod(_) => "unsupported_method",
            ApiError::NoExtractableText | ApiError::NothingExtracted(_) => "no_extractable_text",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
            error_type: self.error_type(),
        };
        (self.status(), Json(body)).into_response()
    }
}
