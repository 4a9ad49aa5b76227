#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use magicbook_core::types::DocumentId;
use magicbook_db::{DocumentFilter, DocumentStore, MemoryDocumentStore, StoreError, StoredDocument};
use serde_json::Value;
use tower::ServiceExt;

use magicbook_api::config::ServerConfig;
use magicbook_api::router::build_app_router;
use magicbook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin and a 30-second timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        database_name: None,
        db_max_connections: 1,
    }
}

/// Build the full application router around the given store.
pub fn build_test_app(store: Arc<dyn DocumentStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with_config(store: Arc<dyn DocumentStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh in-memory store, shareable across several `build_test_app` calls.
pub fn memory_store() -> Arc<dyn DocumentStore> {
    Arc::new(MemoryDocumentStore::new())
}

/// A store whose every operation fails as if the database were down.
pub struct UnavailableStore;

fn down() -> StoreError {
    StoreError::Unavailable(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert(&self, _collection: &str, _document: Value) -> Result<DocumentId, StoreError> {
        Err(down())
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &DocumentFilter,
        _limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }

    async fn list_collections(&self, _limit: i64) -> Result<Vec<String>, StoreError> {
        Err(down())
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
