use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::errors::AppError;

/// `Json` extractor whose rejections render through [`AppError`], so a bad
/// body gets the same `{"error": ...}` envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Malformed(rejection.body_text())
    }
}
