//! Custom error types for the Brainrot service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the Brainrot service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl ApiError {
    pub fn missing_fields() -> Self {
        ApiError::BadRequest("Missing required fields".to_string())
    }

    pub fn brainrot_not_found() -> Self {
        ApiError::NotFound("Brainrot not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
