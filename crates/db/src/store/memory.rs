//! In-process document store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use magicbook_core::types::DocumentId;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{DocumentFilter, DocumentStore, StoredDocument};
use crate::error::StoreError;

/// Keeps collections in memory, each as an insertion-ordered list.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        let id = DocumentId::generate();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, body: document });
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let collections = self.collections.read().await;
        let found = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(found)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let collections = self.collections.read().await;
        Ok(collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let store = MemoryDocumentStore::new();
        let id = store.insert("story", json!({"title": "A"})).await.unwrap();
        store.insert("story", json!({"title": "B"})).await.unwrap();

        let found = store
            .find("story", &DocumentFilter::by_id(id), 10)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
        assert_eq!(found[0].body["title"], "A");
    }

    #[tokio::test]
    async fn find_preserves_insertion_order_and_limit() {
        let store = MemoryDocumentStore::new();
        for n in 0..5 {
            store.insert("story", json!({"n": n})).await.unwrap();
        }

        let found = store.find("story", &DocumentFilter::all(), 3).await.unwrap();
        let ns: Vec<i64> = found.iter().map(|d| d.body["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        store.insert("story", json!({})).await.unwrap();
        store.insert("draft", json!({})).await.unwrap();

        assert_eq!(store.find("story", &DocumentFilter::all(), 10).await.unwrap().len(), 1);
        assert!(store.find("missing", &DocumentFilter::all(), 10).await.unwrap().is_empty());
        assert_eq!(store.list_collections(10).await.unwrap(), vec!["draft", "story"]);
    }

    #[tokio::test]
    async fn duplicate_documents_are_both_kept() {
        let store = MemoryDocumentStore::new();
        let a = store.insert("story", json!({"title": "Same"})).await.unwrap();
        let b = store.insert("story", json!({"title": "Same"})).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.find("story", &DocumentFilter::all(), 10).await.unwrap().len(), 2);
    }
}
