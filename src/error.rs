//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type. Each variant maps to a
//! specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "notification not found: 99"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category              | HTTP Status     |
/// |-----------|-----------------------|-----------------|
/// | 1000–1999 | Request / storage     | 400 Bad Request |
/// | 2000–2999 | Not Found             | 404 Not Found   |
///
/// Storage failures are reported as 400 alongside malformed requests.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request body could not be bound to the expected shape.
    #[error("invalid request body: {0}")]
    Bind(String),

    /// Persisted collection could not be decoded.
    #[error("malformed notification store: {0}")]
    Decode(String),

    /// Reading or writing the backing file failed.
    #[error("notification store i/o: {0}")]
    Io(String),

    /// No further id can be assigned.
    #[error("notification id space exhausted after {0}")]
    IdExhausted(u64),

    /// No notification matches the requested id.
    #[error("notification not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Bind(_) => 1001,
            Self::Decode(_) => 1002,
            Self::Io(_) => 1003,
            Self::IdExhausted(_) => 1004,
            Self::NotFound(_) => 2001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Bind(_) | Self::Decode(_) | Self::Io(_) | Self::IdExhausted(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Decode(_) | Self::Io(_) | Self::IdExhausted(_) => {
                tracing::error!(error = %self, "store failure");
            }
            Self::Bind(_) | Self::NotFound(_) => tracing::warn!(error = %self, "request rejected"),
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        (status, axum::Json(body)).into_response()
    }
}
