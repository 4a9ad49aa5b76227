//! Service banner, greeting and store diagnostics.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Maximum number of collection names reported by the diagnostics route.
const DIAGNOSTIC_COLLECTION_LIMIT: i64 = 10;

/// Error text in diagnostics is cut to this many characters.
const DIAGNOSTIC_ERROR_CHARS: usize = 50;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub message: &'static str,
    pub endpoints: [&'static str; 2],
}

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// Store connectivity report returned by `GET /test`.
#[derive(Debug, Serialize)]
pub struct StoreDiagnostics {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// GET / -- service banner.
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "MagicBook API",
        message: "Backend running",
        endpoints: ["/api/stories", "/test"],
    })
}

/// GET /api/hello
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from the backend API!",
    })
}

/// GET /test -- check the store and list a few collections.
///
/// Always answers 200; failures are reported in the body.
async fn store_diagnostics(State(state): State<AppState>) -> Json<StoreDiagnostics> {
    let mut report = StoreDiagnostics {
        backend: "running",
        database: "not available".to_string(),
        database_url: set_or_not(state.config.database_url.is_some()),
        database_name: set_or_not(state.config.database_name.is_some()),
        connection_status: "not connected",
        collections: Vec::new(),
    };

    if let Err(err) = state.store.ping().await {
        tracing::warn!(error = %err, "Store diagnostics: ping failed");
        report.database = format!("error: {}", truncate(&err.to_string()));
        return Json(report);
    }

    report.connection_status = "connected";
    match state.store.list_collections(DIAGNOSTIC_COLLECTION_LIMIT).await {
        Ok(collections) => {
            report.database = "connected and working".to_string();
            report.collections = collections;
        }
        Err(err) => {
            report.database = format!("connected but error: {}", truncate(&err.to_string()));
        }
    }

    Json(report)
}

fn set_or_not(is_set: bool) -> &'static str {
    if is_set {
        "set"
    } else {
        "not set"
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(DIAGNOSTIC_ERROR_CHARS).collect()
}

/// Mount root-level banner and diagnostics routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/test", get(store_diagnostics))
}
