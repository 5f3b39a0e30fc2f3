#![allow(clippy::doc_markdown)] // Allow technical terms like MongoDB, Redis in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Files Manager Core
//!
//! Operational visibility into a storage backend pair: a MongoDB document
//! store and a Redis cache store, reported through two read-only HTTP
//! endpoints (`GET /status`, `GET /stats`).
//!
//! ## Architecture
//!
//! Two peer connection components each own the lifecycle of exactly one
//! backend handle. Establishment starts asynchronously at process start and
//! races with first use; every query operation soft-fails to a benign
//! default rather than surfacing an error, so the reporting endpoints stay
//! available through any backend outage.
//!
//! ## Module Organization
//!
//! - [`clients`] - Backend connection components, lifecycle state machine,
//!   and the tagged soft-fail outcome type
//! - [`config`] - Environment-provided configuration, read once at startup
//! - [`error`] - Structured error handling for backend operations
//! - [`logging`] - Structured tracing initialization
//! - [`web`] - Axum handlers, shared state, and router construction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use files_manager::clients::{CacheConnection, StoreConnection};
//! use files_manager::config::Config;
//! use files_manager::web::{self, AppState};
//!
//! # async fn example() {
//! let config = Config::from_env();
//! let state = AppState {
//!     store: Arc::new(StoreConnection::connect(&config.store)),
//!     cache: Arc::new(CacheConnection::connect(&config.cache)),
//! };
//! let app = web::create_router(state);
//! # let _ = app;
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod web;

pub use clients::{
    CacheConnection, CacheStore, ConnectionState, DocumentStore, Outcome, StoreConnection,
};
pub use config::Config;
pub use error::{BackendError, Result};
