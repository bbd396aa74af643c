//! seedkv - A single-node in-memory key-value store
//!
//! Serves a JSON contract over HTTP: set, fetch and query against one shared
//! store, plus placeholder responses for GET and PUT.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;

pub use api::{AppState, HandlerMode, Operation};
pub use config::Config;
pub use error::ApiError;
pub use store::{SharedStore, Store};
