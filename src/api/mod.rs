//! API Module
//!
//! HTTP handlers and routing for the key-value REST API.
//!
//! # Endpoints
//! - `POST /set` - Store a key-value pair
//! - `POST /fetch` - Retrieve a value by key
//! - `POST /query` - Check whether a key exists
//! - `GET`/`PUT` any path - Fixed placeholder payload

pub mod dispatch;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use dispatch::{HandlerMode, Operation};
pub use extract::JsonBody;
pub use handlers::*;
pub use routes::create_router;
