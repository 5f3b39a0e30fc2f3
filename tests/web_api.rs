//! Router-level scenario tests.
//!
//! Deterministic backends are injected through the `DocumentStore` /
//! `CacheStore` traits, so every backend state (connected, not yet
//! connected, failed) can be driven without racing real establishment.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use files_manager::clients::{CacheStore, DocumentStore, Outcome};
use files_manager::web::{self, AppState};

/// Document store double with a fixed liveness bit and per-collection
/// outcomes.
struct StubStore {
    alive: bool,
    users: Outcome<u64>,
    files: Outcome<u64>,
}

#[async_trait]
impl DocumentStore for StubStore {
    fn is_alive(&self) -> bool {
        self.alive
    }

    async fn count_documents(&self, collection: &str) -> Outcome<u64> {
        match collection {
            "users" => self.users,
            "files" => self.files,
            _ => Outcome::Degraded(0),
        }
    }
}

/// Document store double whose queries panic, to exercise the outermost
/// error boundary.
struct PanickingStore;

#[async_trait]
impl DocumentStore for PanickingStore {
    fn is_alive(&self) -> bool {
        true
    }

    async fn count_documents(&self, _collection: &str) -> Outcome<u64> {
        panic!("malformed downstream response");
    }
}

struct StubCache {
    alive: bool,
}

#[async_trait]
impl CacheStore for StubCache {
    fn is_alive(&self) -> bool {
        self.alive
    }

    async fn get(&self, _key: &str) -> Outcome<Option<String>> {
        Outcome::Success(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_secs: u64) -> Outcome<bool> {
        Outcome::Success(true)
    }

    async fn delete(&self, _key: &str) -> Outcome<bool> {
        Outcome::Success(false)
    }
}

fn build_app(store: impl DocumentStore + 'static, cache: impl CacheStore + 'static) -> Router {
    web::create_router(AppState {
        store: Arc::new(store),
        cache: Arc::new(cache),
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn status_reports_both_backends_healthy() {
    let app = build_app(
        StubStore {
            alive: true,
            users: Outcome::Success(0),
            files: Outcome::Success(0),
        },
        StubCache { alive: true },
    );

    let (status, body) = get_json(app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "redis": true, "db": true }));
}

#[tokio::test]
async fn status_reports_unreachable_store_with_reachable_cache() {
    // Fresh process start, document store unreachable, cache reachable.
    let app = build_app(
        StubStore {
            alive: false,
            users: Outcome::Degraded(0),
            files: Outcome::Degraded(0),
        },
        StubCache { alive: true },
    );

    let (status, body) = get_json(app.clone(), "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "redis": true, "db": false }));

    let (status, body) = get_json(app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": 0, "files": 0 }));
}

#[tokio::test]
async fn stats_reports_collection_counts() {
    let app = build_app(
        StubStore {
            alive: true,
            users: Outcome::Success(3),
            files: Outcome::Success(10),
        },
        StubCache { alive: true },
    );

    let (status, body) = get_json(app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": 3, "files": 10 }));
}

#[tokio::test]
async fn panicking_handler_yields_500_and_process_keeps_serving() {
    let app = build_app(PanickingStore, StubCache { alive: true });

    let (status, body) = get_json(app.clone(), "/stats").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));

    // The boundary recovers: the same app still answers.
    let (status, body) = get_json(app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "redis": true, "db": true }));
}

#[tokio::test]
async fn concurrent_callers_see_only_their_own_results() {
    let app = build_app(
        StubStore {
            alive: true,
            users: Outcome::Success(3),
            files: Outcome::Success(10),
        },
        StubCache { alive: false },
    );

    let requests = (0..8).map(|i| {
        let app = app.clone();
        async move {
            if i % 2 == 0 {
                get_json(app, "/stats").await
            } else {
                get_json(app, "/status").await
            }
        }
    });

    for (i, (status, body)) in futures::future::join_all(requests).await.into_iter().enumerate() {
        assert_eq!(status, StatusCode::OK);
        if i % 2 == 0 {
            assert_eq!(body, json!({ "users": 3, "files": 10 }));
        } else {
            assert_eq!(body, json!({ "redis": false, "db": true }));
        }
    }
}
