//! # Configuration
//!
//! Environment-provided configuration, read exactly once at process start.
//! Every value has a default so the service boots in a bare environment;
//! malformed numeric values fall back to the default with a warning rather
//! than aborting startup.

use std::env;
use tracing::warn;

/// Document store (MongoDB) connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl StoreConfig {
    /// Connection URI in the form the MongoDB driver expects.
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "files_manager".to_string(),
        }
    }
}

/// Cache store (Redis) connection settings. `db_index` selects the logical
/// Redis keyspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    pub db_index: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db_index: 0,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

/// Root configuration for the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub cache: CacheConfig,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Recognized variables: `DB_HOST`, `DB_PORT`, `DB_DATABASE` for the
    /// document store; `REDIS_HOST`, `REDIS_PORT`, `REDIS_DB` for the cache
    /// store; `PORT` for the HTTP listener.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Self {
            server: ServerConfig {
                port: env_parsed("PORT", defaults.server.port),
            },
            store: StoreConfig {
                host: env_string("DB_HOST", &defaults.store.host),
                port: env_parsed("DB_PORT", defaults.store.port),
                database: env_string("DB_DATABASE", &defaults.store.database),
            },
            cache: CacheConfig {
                host: env_string("REDIS_HOST", &defaults.cache.host),
                port: env_parsed("REDIS_PORT", defaults.cache.port),
                db_index: env_parsed("REDIS_DB", defaults.cache.db_index),
            },
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, "Malformed numeric value, using default");
            default
        }),
        Err(_) => default,
    }
}
