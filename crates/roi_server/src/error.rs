//! Error types for the server
//!
//! `ApiError` is what handlers return; it renders as a JSON `{"error": ...}`
//! body with the matching status code. `ServerError` covers startup failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use roi_store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty
    #[error("{0}")]
    Validation(String),

    /// No scenario has the requested id
    #[error("Scenario not found")]
    NotFound,

    /// Anything else; details are logged, not returned
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => ApiError::Validation(msg),
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Startup errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Scenario store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
