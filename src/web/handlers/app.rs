//! # Status and Stats Handlers
//!
//! The two read-only reporting endpoints. Both are infallible: liveness is
//! a pure state read and the count queries soft-fail to zero, so backend
//! outages surface as degraded booleans and counts, never as HTTP errors.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::web::state::AppState;

/// Externally-owned collections the stats report aggregates over.
pub const USERS_COLLECTION: &str = "users";
pub const FILES_COLLECTION: &str = "files";

/// Response for GET /status
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub redis: bool,
    pub db: bool,
}

/// Response for GET /stats
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatsResponse {
    pub users: u64,
    pub files: u64,
}

/// Connection liveness report: GET /status
///
/// Both reads are instantaneous; the two bits may be observed at slightly
/// different instants, which is acceptable since they report independent
/// systems.
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let redis = state.cache.is_alive();
    let db = state.store.is_alive();

    debug!(redis, db, "Status check");
    Json(StatusResponse { redis, db })
}

/// Aggregate count report: GET /stats
///
/// The two count queries run concurrently and both complete before the
/// response; a degraded result on one side cannot block or corrupt the
/// other.
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let (users, files) = tokio::join!(
        state.store.count_documents(USERS_COLLECTION),
        state.store.count_documents(FILES_COLLECTION),
    );

    debug!(
        users_degraded = users.is_degraded(),
        files_degraded = files.is_degraded(),
        "Stats computed"
    );
    Json(StatsResponse {
        users: users.into_value(),
        files: files.into_value(),
    })
}
