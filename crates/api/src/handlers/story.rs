//! Handlers for story creation and retrieval.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use magicbook_core::error::CoreError;
use magicbook_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use magicbook_core::story::{self, StoryRequest};
use magicbook_core::types::DocumentId;
use magicbook_db::models::story::StoryRecord;
use magicbook_db::repositories::StoryRepo;

use crate::error::{AppError, AppResult};
use crate::query::{LimitParams, VariantParams};
use crate::response::ItemsResponse;
use crate::state::AppState;

/// Entity name used in identifier and not-found errors.
const STORY_ENTITY: &str = "Story";

// ---------------------------------------------------------------------------
// POST /stories?variant=
// ---------------------------------------------------------------------------

/// Generate a story for a child profile and persist it.
///
/// `preview` stories have 3 pages; `full` stories honour the requested page
/// count within 6..=20. Malformed bodies and out-of-range fields are
/// rejected with 400 before anything is generated.
pub async fn create_story(
    State(state): State<AppState>,
    params: Result<Query<VariantParams>, QueryRejection>,
    body: Result<Json<StoryRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    story::validate_request(&request)?;

    let story = story::build_story(&request, params.variant);
    let id = StoryRepo::create(state.store.as_ref(), &story).await?;

    tracing::info!(
        story_id = %id,
        variant = %story.variant,
        pages = story.pages,
        theme = %story.theme,
        "Story created"
    );

    Ok((StatusCode::CREATED, Json(StoryRecord { id, story })))
}

// ---------------------------------------------------------------------------
// GET /stories?limit=
// ---------------------------------------------------------------------------

/// List stored stories, bounded by `limit` (default 20).
pub async fn list_stories(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let items = StoryRepo::list(state.store.as_ref(), limit).await?;

    tracing::debug!(count = items.len(), limit, "Listed stories");

    Ok(Json(ItemsResponse { items }))
}

// ---------------------------------------------------------------------------
// GET /stories/{id}
// ---------------------------------------------------------------------------

/// Fetch one story. A malformed id is a 400 and never reaches the store.
pub async fn get_story(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<StoryRecord>> {
    let id = DocumentId::parse(STORY_ENTITY, &raw_id)?;

    let record = StoryRepo::find_by_id(state.store.as_ref(), id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: STORY_ENTITY,
            id,
        })?;

    Ok(Json(record))
}
