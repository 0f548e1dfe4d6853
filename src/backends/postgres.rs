//! Postgres-backed document store.
//!
//! Documents live in a single `documents` table keyed by `(collection, key)`
//! with the body stored as `JSONB`. `set` is an upsert, matching document
//! store semantics.

use crate::workflow::{DocumentStore, StoreError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool, Row};
use std::time::Duration;
use tracing::Instrument;

pub const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

const SELECT_DOCUMENT: &str = r"
    SELECT value
    FROM documents
    WHERE collection = $1 AND key = $2
    LIMIT 1
";

const UPSERT_DOCUMENT: &str = r"
    INSERT INTO documents (collection, key, value)
    VALUES ($1, $2, $3)
    ON CONFLICT (collection, key)
    DO UPDATE SET value = EXCLUDED.value, updated_at = now()
";

#[derive(Clone, Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database.
    /// # Errors
    /// Returns an error if the connection fails.
    pub async fn connect(dsn: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect(dsn)
            .await
            .context("Failed to connect to database")?;

        Ok(Self::new(pool))
    }

    /// Create the `documents` table if missing.
    /// # Errors
    /// Returns an error if the schema statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .context("failed to apply document schema")?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = SELECT_DOCUMENT
        );

        let row = sqlx::query(SELECT_DOCUMENT)
            .bind(collection)
            .bind(key)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .map_err(|e| StoreError::Backend(format!("failed to read {collection}/{key}: {e}")))?;

        row.map(|row| {
            row.try_get::<Json<Value>, _>("value")
                .map(|Json(value)| value)
                .map_err(|e| StoreError::Backend(format!("failed to decode {collection}/{key}: {e}")))
        })
        .transpose()
    }

    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError> {
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = UPSERT_DOCUMENT
        );

        sqlx::query(UPSERT_DOCUMENT)
            .bind(collection)
            .bind(key)
            .bind(Json(value))
            .execute(&self.pool)
            .instrument(span)
            .await
            .map_err(|e| StoreError::Backend(format!("failed to write {collection}/{key}: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_documents_table() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS documents"));
        assert!(SCHEMA_SQL.contains("PRIMARY KEY (collection, key)"));
    }

    #[test]
    fn upsert_targets_primary_key() {
        assert!(UPSERT_DOCUMENT.contains("ON CONFLICT (collection, key)"));
    }

    #[tokio::test]
    async fn connect_rejects_malformed_dsn() {
        assert!(PgDocumentStore::connect("not-a-dsn").await.is_err());
    }
}
