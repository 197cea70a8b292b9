//! Postgres-backed document store.
//!
//! Documents live in a single `documents` table keyed by
//! `(collection, id)` with a JSONB field payload. Allocation counters
//! live in `collection_sequences`, advanced by a single upsert statement
//! so concurrent allocations never collide.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::info;

use crate::{Document, DocumentStore, JsonMap, StoreError};

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connect a new pool to the hosted database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (shared with other components or tests).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the crate's embedded migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        info!("Running document store migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn fields_from_value(value: serde_json::Value) -> JsonMap {
    match value {
        serde_json::Value::Object(map) => map,
        _ => JsonMap::new(),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, fields FROM documents WHERE collection = $1 ORDER BY id",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Document {
                id: row.get("id"),
                fields: fields_from_value(row.get("fields")),
            })
            .collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            "SELECT id, fields FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Document {
            id: row.get("id"),
            fields: fields_from_value(row.get("fields")),
        }))
    }

    async fn put(&self, collection: &str, id: &str, fields: JsonMap) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, fields)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE
            SET fields = EXCLUDED.fields, updated_at = NOW()
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(serde_json::Value::Object(fields))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn next_in_sequence(&self, collection: &str) -> Result<i64, StoreError> {
        // Single statement: the seed (document count + 1) and the increment
        // resolve atomically through the conflict arm, so two first callers
        // still receive distinct values.
        let row = sqlx::query(
            r#"
            INSERT INTO collection_sequences (collection, last_value)
            VALUES ($1, (SELECT COUNT(*) FROM documents WHERE collection = $1) + 1)
            ON CONFLICT (collection) DO UPDATE
            SET last_value = collection_sequences.last_value + 1
            RETURNING last_value
            "#,
        )
        .bind(collection)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("last_value"))
    }
}
