//! Document store (MongoDB) connection component.

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{error, info};

use crate::clients::state::{ConnectionState, StateCell};
use crate::clients::{DocumentStore, Outcome};
use crate::config::StoreConfig;
use crate::error::{BackendError, Result};

/// Bounds one query attempt against an unreachable server instead of the
/// driver's 30 second default.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Owns the single MongoDB connection handle for the process.
///
/// Construction spawns one establishment attempt and returns immediately;
/// the handle is usable at once. A failed attempt leaves the connection
/// permanently non-alive until restart (no retry loop), with every count
/// query soft-failing to `0`.
pub struct StoreConnection {
    state: StateCell,
    // Set exactly once, by the establishment task, on success.
    database: Arc<OnceLock<Database>>,
}

impl StoreConnection {
    /// Create the connection handle and begin asynchronous establishment.
    ///
    /// Must be called within a tokio runtime context.
    pub fn connect(config: &StoreConfig) -> Self {
        let state = StateCell::new();
        let database = Arc::new(OnceLock::new());

        state.set(ConnectionState::Connecting);
        let task_state = state.clone();
        let task_database = Arc::clone(&database);
        let config = config.clone();
        tokio::spawn(async move {
            match Self::establish(&config).await {
                Ok(db) => {
                    let _ = task_database.set(db);
                    task_state.set(ConnectionState::Connected);
                    info!(uri = %config.uri(), database = %config.database, "Connected to MongoDB");
                }
                Err(e) => {
                    task_state.set(ConnectionState::Failed);
                    error!(uri = %config.uri(), error = %e, "Failed to connect to MongoDB");
                }
            }
        });

        Self { state, database }
    }

    /// Build the client and verify the server is reachable with a ping.
    async fn establish(config: &StoreConfig) -> Result<Database> {
        let mut options = ClientOptions::parse(config.uri()).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        options.connect_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;
        Ok(database)
    }

    /// Current lifecycle state, for logs and tests.
    pub fn state(&self) -> ConnectionState {
        self.state.current()
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        let database = self.database.get().ok_or(BackendError::NotConnected)?;
        let count = database
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl DocumentStore for StoreConnection {
    fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    async fn count_documents(&self, collection: &str) -> Outcome<u64> {
        match self.count(collection).await {
            Ok(count) => Outcome::Success(count),
            Err(e) => {
                error!(collection, error = %e, "Document count failed");
                Outcome::degraded_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> StoreConfig {
        StoreConfig {
            host: "localhost".to_string(),
            // Reserved port nothing listens on.
            port: 1,
            database: "files_manager".to_string(),
        }
    }

    #[tokio::test]
    async fn test_not_alive_before_establishment() {
        let conn = StoreConnection::connect(&unreachable_config());
        assert!(!conn.is_alive());
        assert_ne!(conn.state(), ConnectionState::Connected);
    }

    #[tokio::test]
    async fn test_count_before_establishment_soft_fails_to_zero() {
        let conn = StoreConnection::connect(&unreachable_config());
        let outcome = conn.count_documents("users").await;
        assert_eq!(outcome, Outcome::Degraded(0));
    }
}
