//! Repository for the `story` collection.

use magicbook_core::story::Story;
use magicbook_core::types::DocumentId;

use crate::error::StoreError;
use crate::models::story::StoryRecord;
use crate::store::{DocumentFilter, DocumentStore};

/// Collection holding story documents.
pub const STORY_COLLECTION: &str = "story";

/// Provides create/read operations for stories. There is no update or
/// delete path.
pub struct StoryRepo;

impl StoryRepo {
    /// Persist a story, returning its new identifier.
    pub async fn create(store: &dyn DocumentStore, story: &Story) -> Result<DocumentId, StoreError> {
        let document = serde_json::to_value(story)?;
        store.insert(STORY_COLLECTION, document).await
    }

    /// Find a story by its identifier.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: DocumentId,
    ) -> Result<Option<StoryRecord>, StoreError> {
        let mut documents = store
            .find(STORY_COLLECTION, &DocumentFilter::by_id(id), 1)
            .await?;
        documents.pop().map(StoryRecord::try_from).transpose()
    }

    /// List up to `limit` stories in store order.
    pub async fn list(store: &dyn DocumentStore, limit: i64) -> Result<Vec<StoryRecord>, StoreError> {
        store
            .find(STORY_COLLECTION, &DocumentFilter::all(), limit)
            .await?
            .into_iter()
            .map(StoryRecord::try_from)
            .collect()
    }
}
