//! Operation Dispatch
//!
//! The closed set of store operations reachable over POST, and the two
//! handler modes they run in.

use std::fmt;

use clap::ValueEnum;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::{Envelope, FetchResponse, KeyRequest, QueryResponse, SetRequest, SetResponse};
use crate::store::SharedStore;

// == Operation ==
/// A named store operation, one per POST route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Set,
    Fetch,
    Query,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Set, Operation::Fetch, Operation::Query];

    /// Route path the operation is served on.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Set => "/set",
            Operation::Fetch => "/fetch",
            Operation::Query => "/query",
        }
    }

    pub fn name(self) -> &'static str {
        &self.path()[1..]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// == Handler Mode ==
/// Selects what the POST operations do.
///
/// `Stub` answers every operation with the `400 Bad request` placeholder
/// envelope regardless of input. `Live` runs the operations against the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HandlerMode {
    #[default]
    Stub,
    Live,
}

impl fmt::Display for HandlerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerMode::Stub => f.write_str("stub"),
            HandlerMode::Live => f.write_str("live"),
        }
    }
}

/// Runs `op` with the decoded request `body`.
pub async fn dispatch(
    store: &SharedStore,
    mode: HandlerMode,
    op: Operation,
    body: Value,
) -> Result<Envelope> {
    debug!(operation = %op, mode = %mode, "Dispatching request");
    match mode {
        HandlerMode::Stub => Err(ApiError::NotImplemented(op)),
        HandlerMode::Live => match op {
            Operation::Set => do_set(store, body).await,
            Operation::Fetch => do_fetch(store, body).await,
            Operation::Query => do_query(store, body).await,
        },
    }
}

/// Stores `value` under `key`.
pub async fn do_set(store: &SharedStore, body: Value) -> Result<Envelope> {
    let req = SetRequest::from_body(body)?;

    store.write().await.set(req.key, req.value);

    Envelope::ok(SetResponse::new())
}

/// Returns the value stored under `key`; a missing key is a 404.
pub async fn do_fetch(store: &SharedStore, body: Value) -> Result<Envelope> {
    let req = KeyRequest::from_body(body)?;

    let value = store.read().await.get(&req.key);
    match value {
        Some(value) => Envelope::ok(FetchResponse::new(value)),
        None => Err(ApiError::NotFound(req.key)),
    }
}

/// Reports whether `key` is present.
pub async fn do_query(store: &SharedStore, body: Value) -> Result<Envelope> {
    let req = KeyRequest::from_body(body)?;

    let exists = store.read().await.contains(&req.key);

    Envelope::ok(QueryResponse::new(exists))
}
