//! Response DTOs for the key-value API
//!
//! Defines the structure of outgoing HTTP response bodies and the envelope
//! (status code plus JSON payload) handlers return before serialization.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

// == Envelope ==
/// A handler result: HTTP status and the JSON payload written as the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: StatusCode,
    pub payload: Value,
}

impl Envelope {
    /// Creates an envelope from any serializable payload.
    pub fn new(status: StatusCode, payload: impl Serialize) -> Result<Self> {
        let payload =
            serde_json::to_value(payload).map_err(|err| ApiError::Internal(err.to_string()))?;
        Ok(Self { status, payload })
    }

    /// Creates a 200 envelope.
    pub fn ok(payload: impl Serialize) -> Result<Self> {
        Self::new(StatusCode::OK, payload)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status, Json(self.payload)).into_response()
    }
}

/// Response body for a successful set (POST /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    pub code: u16,
}

impl SetResponse {
    pub fn new() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
        }
    }
}

impl Default for SetResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for a fetch hit (POST /fetch)
#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    pub code: u16,
    /// The stored value, which may itself be `null`
    pub value: Value,
}

impl FetchResponse {
    pub fn new(value: Value) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            value,
        }
    }
}

/// Response body for a query (POST /query)
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub code: u16,
    /// Whether the key is present in the store
    pub exists: bool,
}

impl QueryResponse {
    pub fn new(exists: bool) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            exists,
        }
    }
}

/// Error response body for every JSON-enveloped error
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Mirrors the HTTP status
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Fixed record served for GET and PUT on any path.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderRecord {
    pub key: &'static str,
    pub value: &'static str,
}

/// The placeholder payload: `[{"key":"1001","value":"test"}]`.
pub fn placeholder_records() -> Vec<PlaceholderRecord> {
    vec![PlaceholderRecord {
        key: "1001",
        value: "test",
    }]
}
