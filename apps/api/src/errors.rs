use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::roast::RoastError;
use crate::routes::pages;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a distinct user-facing message; internal detail is
/// logged server-side and never rendered to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedFormat(ext) => AppError::UnsupportedFormat(ext),
            other => AppError::Extraction(other.to_string()),
        }
    }
}

impl From<RoastError> for AppError {
    fn from(e: RoastError) -> Self {
        match e {
            RoastError::GenerationFailed(msg) => AppError::Generation(msg),
            RoastError::MalformedResponse(msg) => AppError::MalformedResponse(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::UnsupportedFormat(_) => (
                StatusCode::BAD_REQUEST,
                "Unsupported file type. Upload a PDF, DOCX, or TXT resume.".to_string(),
            ),
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "No readable text found in that file. Try exporting a simpler version."
                        .to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Generation(msg) => {
                tracing::error!("Roast generation failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The roast engine is unavailable right now. Try again in a minute."
                        .to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Roast response unparseable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The roast engine returned something unreadable. Try again.".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A storage error occurred. Your roast was not saved.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        (status, Html(pages::error_page(status, &message))).into_response()
    }
}
