//! # API Errors
//!
//! Errors surfaced by the operation endpoint. Store errors pass through with
//! their own code; the API adds request-shape and serialization failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::OperationResponse;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Store rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Body is not a well-formed operation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Result could not be rendered
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    /// Get error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Store(e) => e.code(),
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(OperationResponse::error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(StoreError::AuthorNotFound(999)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::Poisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::invalid_request("missing field `name`").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_error_passes_through() {
        let err = ApiError::from(StoreError::BookNotFound(12));
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "Book not found: 12");
    }
}
