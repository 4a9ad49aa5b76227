//! PostgreSQL-backed document store over the `documents` table.

use async_trait::async_trait;
use magicbook_core::types::DocumentId;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::{DocumentFilter, DocumentStore, StoredDocument};
use crate::error::StoreError;
use crate::DbPool;

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Value>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id.into(),
            body: row.body.0,
        }
    }
}

/// Stores each document as a JSONB row tagged with its collection name.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO documents (collection, body) VALUES ($1, $2) RETURNING id",
        )
        .bind(collection)
        .bind(Json(&document))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(collection, document_id = %id, "Document inserted");
        Ok(id.into())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents
             WHERE collection = $1
               AND ($2::uuid IS NULL OR id = $2)
               AND body @> $3
             ORDER BY seq ASC
             LIMIT $4",
        )
        .bind(collection)
        .bind(filter.id.map(|id| id.as_uuid()))
        .bind(Json(&filter.fields))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar(
            "SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}
