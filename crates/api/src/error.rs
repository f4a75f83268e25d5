use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use planets_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"error": "<message>"}` bodies.
/// Status codes are chosen by variant, never by message text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `planets_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message (e.g. malformed JSON).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => {
                let status = match core {
                    CoreError::Validation(_) | CoreError::InvalidId(_) => StatusCode::BAD_REQUEST,
                    CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                    CoreError::Persistence(_) | CoreError::Timeout { .. } => {
                        tracing::error!(error = %core, "Planet store failure");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, core.message())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
