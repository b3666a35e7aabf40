//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! An invalid document is not an error here: validation always answers 200
//! with a verdict. Errors cover unknown kinds and malformed requests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use brdoc_core::BrdocError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown document kind or route (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Query or body parameters out of range (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body or query string could not be parsed (422).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::UNPROCESSABLE_ENTITY, "BAD_REQUEST"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Unknown kinds are missing resources; every other core error is a bad
/// parameter.
impl From<BrdocError> for AppError {
    fn from(err: BrdocError) -> Self {
        match err {
            BrdocError::UnknownKind(_) => Self::NotFound(err.to_string()),
            BrdocError::UnknownUf(_) | BrdocError::Rejected(_) => Self::Validation(err.to_string()),
            BrdocError::Format(_) => Self::Internal(err.to_string()),
        }
    }
}
