//! Story Store Adapter.
//!
//! A thin document-store layer: the [`DocumentStore`] seam, its PostgreSQL
//! implementation (JSONB rows grouped by collection) and the story
//! repository built on top of it.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{DocumentFilter, DocumentStore, PgDocumentStore, StoredDocument};

#[cfg(feature = "memory")]
pub use store::MemoryDocumentStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// When `database_name` is given it overrides the database named in the URL.
pub async fn create_pool(
    database_url: &str,
    database_name: Option<&str>,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;
    if let Some(name) = database_name {
        options = options.database(name);
    }

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
