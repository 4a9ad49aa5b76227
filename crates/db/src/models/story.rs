//! Stored story shape.

use magicbook_core::story::Story;
use magicbook_core::types::DocumentId;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::StoredDocument;

/// A persisted story together with its store-assigned identifier.
///
/// Serializes flat: the story fields plus an `id` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: DocumentId,
    #[serde(flatten)]
    pub story: Story,
}

impl TryFrom<StoredDocument> for StoryRecord {
    type Error = StoreError;

    fn try_from(document: StoredDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document.id,
            story: serde_json::from_value(document.body)?,
        })
    }
}
