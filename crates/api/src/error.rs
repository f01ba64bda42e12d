use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use watchlist_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `watchlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path segment that does not name a resource, e.g. a non-numeric id.
    #[error("Unmatched path: {0}")]
    UnmatchedPath(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::UnmatchedPath(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Resource not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::UnmatchedPath(reason) => {
                tracing::debug!(%reason, "Path does not name a resource");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Core(CoreError::Validation(result)) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "One or more validation errors occurred.",
                    "code": "VALIDATION_ERROR",
                    "errors": result.errors_by_field(),
                }),
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
        };

        let (status, json) = body;
        (status, axum::Json(json)).into_response()
    }
}

/// Sanitized 500 body; the detail is logged, never returned.
fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        }),
    )
}
