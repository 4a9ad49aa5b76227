pub mod health;
pub mod meta;
pub mod story;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                                           greeting
///
/// /stories                                         list (GET), create (POST ?variant=)
/// /stories/{id}                                    get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(meta::hello))
        .nest("/stories", story::router())
}
