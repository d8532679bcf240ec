// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::relay::RelayError;

/// Standard API error response format: a stable category label plus a
/// best-effort detail string for operator diagnosis.
#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub error: String,
    pub details: Option<String>,
}

impl ApiError {
    /// Create a new bad request error
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            error: error.into(),
            details: None,
        }
    }

    /// Create a new upstream failure error
    pub fn upstream(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Validation(msg) => ApiError::bad_request(msg),
            RelayError::Provider(detail) => {
                ApiError::upstream("completion provider error", detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.error });
        if let Some(details) = self.details {
            body["details"] = json!(details);
        }
        (self.status_code, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
