//! Error types for the Backend API.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Unified error type for API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Creation request without a parseable JSON object body.
    #[error("No data provided")]
    MissingBody,

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::MissingBody => self.to_string(),
            ApiError::NotFound(path) => {
                tracing::debug!(path = %path, "No route matched");
                "Not found".to_string()
            }
        };

        (self.status(), Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
