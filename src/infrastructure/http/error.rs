//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Fixed message returned on a credential mismatch.
pub const INVALID_API_KEY: &str = "invalid API key";

/// JSON body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// API error
#[derive(Debug)]
pub enum ApiError {
    /// Credential mismatch while enforcement is active.
    Unauthorized,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::Unauthorized => {
                tracing::warn!(error = INVALID_API_KEY, "Request rejected");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new(INVALID_API_KEY),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<crate::application::ApplicationError> for ApiError {
    fn from(e: crate::application::ApplicationError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
