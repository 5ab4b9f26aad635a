//! # Ingest Errors
//!
//! Every failure of the write path, with its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::ValidationError;
use crate::sink::StorageError;
use crate::timestamp::TimestampError;

/// Result type for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Ingest errors
#[derive(Debug, Error)]
pub enum IngestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not JSON, or not shaped like `{ "events": [...] }`
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Body exceeds the configured limit
    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    /// Field constraint violation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid timestamp format: events[{index}].timestamp = {value:?}")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Timestamp cannot be in the future: events[{index}].timestamp = {value:?}")]
    FutureTimestamp { index: usize, value: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Sink rejected or could not take the write. Detail stays server-side.
    #[error("Failed to write to database")]
    Storage(#[from] StorageError),
}

impl IngestError {
    /// Attach the event position to a normalizer failure
    pub fn timestamp(index: usize, err: TimestampError) -> Self {
        match err {
            TimestampError::Invalid(value) => IngestError::InvalidTimestamp { index, value },
            TimestampError::Future(value) => IngestError::FutureTimestamp { index, value },
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::MalformedRequest(_) => "INGEST_MALFORMED_REQUEST",
            IngestError::PayloadTooLarge(_) => "INGEST_PAYLOAD_TOO_LARGE",
            IngestError::Validation(e) => e.code().code(),
            IngestError::InvalidTimestamp { .. } => "INGEST_INVALID_TIMESTAMP",
            IngestError::FutureTimestamp { .. } => "INGEST_FUTURE_TIMESTAMP",
            IngestError::Storage(_) => "INGEST_STORAGE_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            IngestError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            IngestError::Validation(_) => StatusCode::BAD_REQUEST,
            IngestError::InvalidTimestamp { .. } => StatusCode::BAD_REQUEST,
            IngestError::FutureTimestamp { .. } => StatusCode::BAD_REQUEST,

            IngestError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,

            IngestError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&IngestError> for ErrorResponse {
    fn from(err: &IngestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
