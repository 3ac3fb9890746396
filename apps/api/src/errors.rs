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
/// Two upstream buckets only: a non-success status from a collaborator, and
/// everything transport-shaped (connect failure, timeout, malformed body).
/// No retry in either case; the user re-submits.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Operation already in progress")]
    Busy,

    #[error("Backend error: {0}")]
    UpstreamStatus(u16),

    #[error("Error connecting to backend.")]
    UpstreamConnect,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        tracing::warn!("Upstream transport error: {e}");
        AppError::UpstreamConnect
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Busy => (
                StatusCode::CONFLICT,
                "BUSY",
                "A previous request for this session is still processing.".to_string(),
            ),
            AppError::UpstreamStatus(upstream) => (
                StatusCode::BAD_GATEWAY,
                "BACKEND_ERROR",
                format!("Backend error: {upstream}"),
            ),
            AppError::UpstreamConnect => (
                StatusCode::BAD_GATEWAY,
                "BACKEND_UNREACHABLE",
                "Error connecting to backend.".to_string(),
            ),
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
