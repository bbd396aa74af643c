//! Request DTOs for the key-value API
//!
//! Defines the structure of incoming POST bodies. Bodies arrive as already
//! decoded JSON and are converted here, so a decodable body with the wrong
//! shape is reported as a bad request rather than a decode failure.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Request body for the set operation (POST /set)
///
/// `value` is required but may be JSON `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The key to store the value under
    pub key: String,
    /// The value to store
    pub value: Value,
}

/// Request body for the fetch and query operations (POST /fetch, POST /query)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    /// The key to look up
    pub key: String,
}

impl SetRequest {
    /// Converts a decoded body into a validated request.
    pub fn from_body(body: Value) -> Result<Self> {
        let req: Self = from_object(body)?;
        validate_key(&req.key)?;
        Ok(req)
    }
}

impl KeyRequest {
    /// Converts a decoded body into a validated request.
    pub fn from_body(body: Value) -> Result<Self> {
        let req: Self = from_object(body)?;
        validate_key(&req.key)?;
        Ok(req)
    }
}

// Structs also deserialize from JSON arrays, so the object check comes first.
fn from_object<T: DeserializeOwned>(body: Value) -> Result<T> {
    if !body.is_object() {
        return Err(ApiError::BadRequest("Body must be a JSON object".to_string()));
    }
    serde_json::from_value(body).map_err(|err| ApiError::BadRequest(err.to_string()))
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ApiError::BadRequest("Key cannot be empty".to_string()));
    }
    Ok(())
}
