//! Route definitions for stories.
//!
//! ```text
//! GET    /          list_stories   (?limit=)
//! POST   /          create_story   (?variant=preview|full)
//! GET    /{id}      get_story
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::story;
use crate::state::AppState;

/// Story routes -- mounted at `/stories`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(story::list_stories).post(story::create_story))
        .route("/{id}", get(story::get_story))
}
