//! Files Manager server entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use files_manager::clients::{CacheConnection, StoreConnection};
use files_manager::config::Config;
use files_manager::logging;
use files_manager::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    // Configuration is read exactly once; both connections begin
    // establishment immediately and requests never wait for them.
    let config = Config::from_env();
    info!(
        store = %config.store.uri(),
        store_database = %config.store.database,
        cache_host = %config.cache.host,
        cache_port = config.cache.port,
        "Starting files-manager v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState {
        store: Arc::new(StoreConnection::connect(&config.store)),
        cache: Arc::new(CacheConnection::connect(&config.cache)),
    };

    let app = web::create_router(state);

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, "Server listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
