//! # Backend Connection Components
//!
//! Each backend (MongoDB document store, Redis cache store) is wrapped by a
//! connection component that owns exactly one handle for the lifetime of
//! the process. Establishment runs asynchronously from construction, so the
//! components are usable immediately; queries issued before (or after a
//! failed) establishment soft-fail to benign defaults.
//!
//! The [`DocumentStore`] and [`CacheStore`] traits are the seam between
//! these components and the web layer: handlers depend on the traits, and
//! tests substitute deterministic implementations.

pub mod cache;
pub mod outcome;
pub mod state;
pub mod store;

pub use cache::CacheConnection;
pub use outcome::Outcome;
pub use state::ConnectionState;
pub use store::StoreConnection;

use async_trait::async_trait;

/// Capability surface of the document store wrapper.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Instantaneous connection liveness. Never blocks, never fails.
    fn is_alive(&self) -> bool;

    /// Count the documents in the named collection. Soft-fails to `0`.
    async fn count_documents(&self, collection: &str) -> Outcome<u64>;
}

/// Capability surface of the cache store wrapper.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Instantaneous connection liveness. Never blocks, never fails.
    fn is_alive(&self) -> bool;

    /// Fetch the value stored under `key`. Soft-fails to `None`; a missing
    /// key and an unreachable backend are indistinguishable to the caller.
    async fn get(&self, key: &str) -> Outcome<Option<String>>;

    /// Store `value` under `key` with a backend-enforced expiry of
    /// `ttl_secs` seconds (must be > 0). Soft-fails to `false`.
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Outcome<bool>;

    /// Remove `key`. `true` iff a key was actually removed; `false` for
    /// "no such key" as well as for any backend failure.
    async fn delete(&self, key: &str) -> Outcome<bool>;
}
