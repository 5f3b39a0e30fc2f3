//! Cache store (Redis) connection component.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use std::sync::{Arc, OnceLock};
use tracing::{error, info};

use crate::clients::state::{ConnectionState, StateCell};
use crate::clients::{CacheStore, Outcome};
use crate::config::CacheConfig;
use crate::error::{BackendError, Result};

/// Owns the single Redis connection handle for the process.
///
/// One multiplexed connection serves all concurrent callers; there is no
/// pool. Establishment mirrors [`StoreConnection`](crate::clients::store::StoreConnection):
/// one asynchronous attempt, no retry, and every operation soft-fails to a
/// benign default while the handle is not (or no longer) usable.
pub struct CacheConnection {
    state: StateCell,
    conn: Arc<OnceLock<MultiplexedConnection>>,
}

impl CacheConnection {
    /// Create the connection handle and begin asynchronous establishment.
    ///
    /// Must be called within a tokio runtime context.
    pub fn connect(config: &CacheConfig) -> Self {
        let state = StateCell::new();
        let conn = Arc::new(OnceLock::new());

        state.set(ConnectionState::Connecting);
        let task_state = state.clone();
        let task_conn = Arc::clone(&conn);
        let config = config.clone();
        tokio::spawn(async move {
            match Self::establish(&config).await {
                Ok(connection) => {
                    let _ = task_conn.set(connection);
                    task_state.set(ConnectionState::Connected);
                    info!(
                        host = %config.host,
                        port = config.port,
                        db_index = config.db_index,
                        "Connected to Redis"
                    );
                }
                Err(e) => {
                    task_state.set(ConnectionState::Failed);
                    error!(host = %config.host, port = config.port, error = %e, "Failed to connect to Redis");
                }
            }
        });

        Self { state, conn }
    }

    async fn establish(config: &CacheConfig) -> Result<MultiplexedConnection> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(config.host.clone(), config.port),
            redis: RedisConnectionInfo {
                db: config.db_index,
                ..Default::default()
            },
        };
        let client = Client::open(info)?;
        let connection = client.get_multiplexed_tokio_connection().await?;
        Ok(connection)
    }

    /// Current lifecycle state, for logs and tests.
    pub fn state(&self) -> ConnectionState {
        self.state.current()
    }

    // The multiplexed connection is cheap to clone; each operation works on
    // its own clone so callers never contend on a lock.
    fn connection(&self) -> Result<MultiplexedConnection> {
        self.conn.get().cloned().ok_or(BackendError::NotConnected)
    }

    async fn try_get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection()?;
        Ok(conn.get(key).await?)
    }

    async fn try_set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.connection()?;
        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn try_delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection()?;
        let removed: i64 = conn.del(key).await?;
        Ok(removed_to_deleted(removed))
    }
}

/// `DEL` reports how many keys were removed; "no such key" is a removal
/// count of zero, not an error.
fn removed_to_deleted(removed: i64) -> bool {
    removed > 0
}

#[async_trait]
impl CacheStore for CacheConnection {
    fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    async fn get(&self, key: &str) -> Outcome<Option<String>> {
        match self.try_get(key).await {
            Ok(value) => Outcome::Success(value),
            Err(e) => {
                error!(key, error = %e, "Cache get failed");
                Outcome::degraded_default()
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Outcome<bool> {
        match self.try_set(key, value, ttl_secs).await {
            Ok(()) => Outcome::Success(true),
            Err(e) => {
                error!(key, ttl_secs, error = %e, "Cache set failed");
                Outcome::Degraded(false)
            }
        }
    }

    async fn delete(&self, key: &str) -> Outcome<bool> {
        match self.try_delete(key).await {
            Ok(deleted) => Outcome::Success(deleted),
            Err(e) => {
                error!(key, error = %e, "Cache delete failed");
                Outcome::Degraded(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> CacheConfig {
        CacheConfig {
            host: "localhost".to_string(),
            port: 1,
            db_index: 0,
        }
    }

    #[test]
    fn test_removal_count_mapping() {
        assert!(!removed_to_deleted(0));
        assert!(removed_to_deleted(1));
        assert!(removed_to_deleted(3));
    }

    #[tokio::test]
    async fn test_not_alive_before_establishment() {
        let conn = CacheConnection::connect(&unreachable_config());
        assert!(!conn.is_alive());
        assert_ne!(conn.state(), ConnectionState::Connected);
    }

    #[tokio::test]
    async fn test_operations_soft_fail_before_establishment() {
        let conn = CacheConnection::connect(&unreachable_config());

        assert_eq!(conn.get("missing").await, Outcome::Degraded(None));
        assert_eq!(conn.set("k", "v", 60).await, Outcome::Degraded(false));
        assert_eq!(conn.delete("k").await, Outcome::Degraded(false));
    }
}
