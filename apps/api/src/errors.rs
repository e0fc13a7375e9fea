use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as a flat `{"error": "<message>"}` body, which is the
/// shape the front-end reads.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied something we refuse to process (empty input, unknown format).
    #[error("{0}")]
    Validation(String),

    /// Request body could not be decoded into the expected shape.
    #[error("{0}")]
    Malformed(String),

    #[error("{0}")]
    Export(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(format!("CSV serialization failed: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(format!("JSON serialization failed: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                StatusCode::BAD_REQUEST
            }
            AppError::Malformed(msg) => {
                tracing::warn!("Malformed request body: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
