//! Error types for the key-value server
//!
//! Provides unified error handling using thiserror. Every variant except
//! `UnsupportedContentType` is rendered as a `{code, message}` JSON envelope.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::Operation;
use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// POST without `Content-Type: application/json`
    #[error("Unsupported content type")]
    UnsupportedContentType,

    /// Body could not be read or decoded as JSON
    #[error("Malformed body: {0}")]
    MalformedBody(String),

    /// Body decoded but required fields are missing or mistyped
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Operation is routed but runs as a placeholder
    #[error("Operation not implemented: {0}")]
    NotImplemented(Operation),

    /// Key not present in the store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// POST to a path with no operation behind it
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// HTTP method outside GET, HEAD, PUT and POST
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(Method),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedContentType
            | ApiError::MalformedBody(_)
            | ApiError::BadRequest(_)
            | ApiError::NotImplemented(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::UnknownRoute(_) => StatusCode::NOT_FOUND,
            ApiError::UnsupportedMethod(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON error envelope, or `None` when the error is answered with an
    /// empty body.
    pub fn body(&self) -> Option<ErrorResponse> {
        let message = match self {
            ApiError::UnsupportedContentType => return None,
            ApiError::MalformedBody(_)
            | ApiError::BadRequest(_)
            | ApiError::NotImplemented(_) => "Bad request",
            ApiError::NotFound(_) | ApiError::UnknownRoute(_) => "Not found",
            ApiError::UnsupportedMethod(_) => "Unsupported method",
            ApiError::Internal(_) => "Internal server error",
        };
        Some(ErrorResponse::new(self.status(), message))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.body() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key-value server.
pub type Result<T> = std::result::Result<T, ApiError>;
