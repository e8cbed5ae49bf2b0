use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Failure taxonomy of the core engine. Handlers return this directly; the
/// front-end translates the JSON body into user-facing text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("profile not found")]
    ProfileMissing,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("external lookup failed: {0}")]
    ExternalLookup(String),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ProfileMissing => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ExternalLookup(_) => StatusCode::BAD_GATEWAY,
            ApiError::Storage(e) => {
                error!(error = %e, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
