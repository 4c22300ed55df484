use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Hard failures of the analysis core.
///
/// Missing fields are never errors: extractors return `None`, an empty list or
/// a sentinel instead. Only unreadable input and malformed profile links end
/// up here.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Unreadable {format} document: {reason}")]
    UnreadableDocument { format: String, reason: String },

    #[error("Invalid LinkedIn URL: {0}")]
    InvalidProfileUrl(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

impl AnalysisError {
    pub fn unreadable(format: impl Into<String>, reason: impl ToString) -> Self {
        AnalysisError::UnreadableDocument {
            format: format.into(),
            reason: reason.to_string(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Malformed or missing JSON bodies answer in the same error envelope.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(e @ AnalysisError::UnreadableDocument { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNREADABLE_DOCUMENT",
                e.to_string(),
            ),
            AppError::Analysis(e @ AnalysisError::InvalidProfileUrl(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_PROFILE_URL", e.to_string())
            }
            AppError::Analysis(e @ AnalysisError::UnsupportedFormat(_)) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT", e.to_string())
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
