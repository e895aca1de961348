use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lunchbox_core::error::CoreError;
use lunchbox_db::StorageError;

use crate::recommendation::RecommendationError;
use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{"status": "error", "code": ..., "detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lunchbox_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The order store failed.
    #[error("Database error: {0}")]
    Storage(#[from] StorageError),

    /// The recommendation service failed or was unreachable.
    #[error("Recommendation service error: {0}")]
    Recommendation(#[from] RecommendationError),

    /// A body that is not JSON or was sent with the wrong content type.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not fit the schema.
            JsonRejection::JsonDataError(err) => {
                AppError::Core(CoreError::Validation(err.body_text()))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                msg.clone(),
            ),

            AppError::Storage(err) => {
                tracing::error!(error = %err, "Order store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "The order store is unavailable".to_string(),
                )
            }

            AppError::Recommendation(err) => {
                tracing::error!(error = %err, "Recommendation service failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "RECOMMENDATION_ERROR",
                    self.to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        (status, axum::Json(ErrorResponse::new(code, detail))).into_response()
    }
}
