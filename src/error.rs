use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested row, or a row referenced by id in the payload, does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// The request did not match the expected path, query or body shape.
    #[error("{0}")]
    Validation(String),

    /// The body could not be read as JSON at all (too large, wrong content type).
    /// Carries the status axum assigned to the rejection.
    #[error("{1}")]
    Rejected(StatusCode, String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected(status, _) => *status,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
