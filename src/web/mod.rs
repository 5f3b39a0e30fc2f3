//! # Web API
//!
//! Thin request-handling layer over the connection components: route
//! dispatch, response serialization, and the outermost error boundary.

pub mod errors;
pub mod handlers;
pub mod state;

pub use errors::ApiError;
pub use state::AppState;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Build the API router.
///
/// The catch-panic layer is the only path by which an error becomes visible
/// to an external caller: both handlers are infallible by construction, so
/// anything escaping them is a bug, answered with a generic 500 while the
/// process keeps serving.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::app::get_status))
        .route("/stats", get(handlers::app::get_stats))
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
