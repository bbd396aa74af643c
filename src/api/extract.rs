//! Request Body Extraction
//!
//! POST bodies must be declared `application/json`. The gate runs before the
//! body is read, and its rejection carries no JSON envelope.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// A POST body that passed the content-type gate and decoded as JSON.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

/// True when the `Content-Type` media type, parameters ignored, is exactly
/// `application/json`.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.split(';').next().unwrap_or_default().trim() == JSON_MEDIA_TYPE)
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            warn!(content_type = ?req.headers().get(CONTENT_TYPE), "Rejecting non-JSON body");
            return Err(ApiError::UnsupportedContentType);
        }

        // Hyper bounds the body by Content-Length.
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| ApiError::MalformedBody(err.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(error = %err, "Failed to decode JSON body");
            ApiError::MalformedBody(err.to_string())
        })?;

        Ok(JsonBody(value))
    }
}
