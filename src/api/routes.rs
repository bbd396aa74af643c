//! API Routes
//!
//! Configures the Axum router with the key-value endpoints.

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use super::dispatch::Operation;
use super::handlers::{fallback_handler, fetch_handler, query_handler, set_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /set` - Store a key-value pair
/// - `POST /fetch` - Retrieve a value by key
/// - `POST /query` - Check whether a key exists
/// - `GET`/`PUT` on any path - Placeholder payload
///
/// Other methods on the operation paths fall through to the same handler as
/// unmatched paths, so `GET /set` is answered like `GET /anything`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            Operation::Set.path(),
            post(set_handler).fallback(fallback_handler),
        )
        .route(
            Operation::Fetch.path(),
            post(fetch_handler).fallback(fallback_handler),
        )
        .route(
            Operation::Query.path(),
            post(query_handler).fallback(fallback_handler),
        )
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
