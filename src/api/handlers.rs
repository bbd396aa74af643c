//! API Handlers
//!
//! HTTP request handlers for each route, plus the fallback that answers
//! GET, HEAD and PUT on any path.

use axum::{
    extract::{FromRequest, Request, State},
    http::{header::CONTENT_TYPE, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::warn;

use super::dispatch::{dispatch, HandlerMode, Operation};
use super::extract::JsonBody;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{placeholder_records, Envelope};
use crate::store::{SharedStore, Store};

/// Application state shared across all handlers.
///
/// Holds the single store instance for the process; requests never create
/// their own.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe store
    pub store: SharedStore,
    /// What the POST operations do
    pub mode: HandlerMode,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: Store, mode: HandlerMode) -> Self {
        Self {
            store: store.into_shared(),
            mode,
        }
    }

    /// Creates a new AppState with an empty store from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Store::new(), config.handlers)
    }

    /// Runs `op` against this state's store.
    pub async fn dispatch(&self, op: Operation, body: Value) -> Result<Envelope> {
        dispatch(&self.store, self.mode, op, body).await
    }
}

/// Handler for POST /set
pub async fn set_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Envelope> {
    state.dispatch(Operation::Set, body).await
}

/// Handler for POST /fetch
pub async fn fetch_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Envelope> {
    state.dispatch(Operation::Fetch, body).await
}

/// Handler for POST /query
pub async fn query_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Envelope> {
    state.dispatch(Operation::Query, body).await
}

/// Handler for GET and PUT on any path.
///
/// Returns the fixed placeholder payload without touching the store.
pub async fn placeholder_handler() -> Result<Envelope> {
    Envelope::ok(placeholder_records())
}

/// Handler for every request no route matches, by path or by method.
///
/// # Behavior
/// - GET, PUT: placeholder payload
/// - HEAD: 200 with JSON content type and no body
/// - POST: body is gated and decoded as on real routes, then 404
/// - anything else: 501
pub async fn fallback_handler(method: Method, uri: Uri, request: Request) -> Result<Response> {
    match method {
        Method::GET | Method::PUT => Ok(placeholder_handler().await?.into_response()),
        Method::HEAD => Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")]).into_response()),
        Method::POST => {
            let JsonBody(_) = JsonBody::from_request(request, &()).await?;
            warn!(path = %uri.path(), "POST to unknown route");
            Err(ApiError::UnknownRoute(uri.path().to_string()))
        }
        other => Err(ApiError::UnsupportedMethod(other)),
    }
}
