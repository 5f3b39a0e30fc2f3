//! # Backend Error Types
//!
//! Typed errors for the fallible paths inside the connection components.
//! These never cross the component boundary: each public operation converts
//! its error into a degraded [`Outcome`](crate::clients::Outcome) after
//! logging, so callers only ever see well-typed defaults.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("document store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("cache store error: {0}")]
    Cache(#[from] redis::RedisError),

    /// The connection handle exists but establishment has not completed
    /// (or permanently failed). Queries against it short-circuit here
    /// instead of attempting network I/O.
    #[error("connection not established")]
    NotConnected,
}

pub type Result<T> = std::result::Result<T, BackendError>;
