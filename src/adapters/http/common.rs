//! Error body and helpers shared by every route.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn validation(error: &ValidationError) -> Self {
        Self::bad_request(error.to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Pairs the body with a status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// 400 for a request body that is not valid JSON for the endpoint.
pub fn rejected_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    ErrorResponse::bad_request(rejection.body_text()).with_status(StatusCode::BAD_REQUEST)
}

/// 400 for a field-level validation failure.
pub fn invalid_request(error: &ValidationError) -> Response {
    tracing::debug!(field = error.field(), error = %error, "validation failed");
    ErrorResponse::validation(error).with_status(StatusCode::BAD_REQUEST)
}
