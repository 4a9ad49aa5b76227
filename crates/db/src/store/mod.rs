//! The document store seam.
//!
//! Handlers never talk to a driver directly; they receive an
//! `Arc<dyn DocumentStore>` through application state. The production
//! implementation is [`PgDocumentStore`]; [`MemoryDocumentStore`] (feature
//! `memory`) backs the HTTP test-suite.

use async_trait::async_trait;
use magicbook_core::types::DocumentId;
use serde_json::{Map, Value};

use crate::error::StoreError;

#[cfg(feature = "memory")]
mod memory;
mod postgres;

#[cfg(feature = "memory")]
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A document as returned by the store, with its assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub body: Value,
}

/// Selection criteria for [`DocumentStore::find`].
///
/// An empty filter matches every document in the collection. Field criteria
/// use JSON containment: a document matches when each given field is present
/// and contains the given value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    pub id: Option<DocumentId>,
    pub fields: Map<String, Value>,
}

impl DocumentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: DocumentId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Whether `document` satisfies this filter. Used by in-process stores;
    /// mirrors PostgreSQL's `jsonb @> jsonb` for objects and arrays.
    pub fn matches(&self, document: &StoredDocument) -> bool {
        if self.id.is_some_and(|id| id != document.id) {
            return false;
        }
        self.fields
            .iter()
            .all(|(name, expected)| match document.body.get(name) {
                Some(actual) => json_contains(actual, expected),
                None => false,
            })
    }
}

fn json_contains(haystack: &Value, needle: &Value) -> bool {
    match (haystack, needle) {
        (Value::Object(have), Value::Object(want)) => want.iter().all(|(key, value)| {
            have.get(key)
                .is_some_and(|candidate| json_contains(candidate, value))
        }),
        (Value::Array(have), Value::Array(want)) => want
            .iter()
            .all(|value| have.iter().any(|candidate| json_contains(candidate, value))),
        _ => haystack == needle,
    }
}

/// Insert/find access to named document collections.
///
/// Inserts are single, unretried writes. No uniqueness is enforced. Finds
/// return documents in insertion order, bounded by `limit`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into `collection`, returning its new identifier.
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError>;

    /// Fetch up to `limit` documents of `collection` matching `filter`.
    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Names of non-empty collections, alphabetically, at most `limit`.
    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, StoreError>;
}
