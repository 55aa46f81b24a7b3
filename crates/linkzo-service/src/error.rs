//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use linkzo_core::ValidationError;
use linkzo_store::StoreError;

/// Message returned for any storage failure. The cause is only logged.
pub const STORAGE_ERROR_MESSAGE: &str = "Database error occurred";

/// Message returned when the request body cannot be parsed at all.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field was missing or empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body was not valid JSON or form data for the endpoint.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing or wrong admin key.
    #[error("unauthorized")]
    Unauthorized,

    /// The store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// JSON failure envelope: `{"success": false, "message": ...}`.
#[derive(Debug, Serialize)]
struct FailureBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(err) => {
                tracing::debug!(missing = ?err.missing_fields(), "Submission rejected");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::BadRequest(detail) => {
                tracing::debug!(detail = %detail, "Unreadable request body");
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.to_string())
            }
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::Storage(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    STORAGE_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = FailureBody {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}
