//! # Web API Application State
//!
//! Shared state for the web API: the two backend handles, injected once at
//! process start. Handlers see only the capability traits, so tests can
//! substitute deterministic backends; the "exactly one handle per backend"
//! invariant holds without any global mutable state.

use std::sync::Arc;

use crate::clients::{CacheStore, DocumentStore};

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle (liveness + count queries).
    pub store: Arc<dyn DocumentStore>,

    /// Cache store handle (liveness; the key-value operations are consumed
    /// by other parts of the application, not the reporting path).
    pub cache: Arc<dyn CacheStore>,
}
