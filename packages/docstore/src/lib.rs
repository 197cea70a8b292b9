//! Client layer for the hosted document-database service.
//!
//! Documents are schema-flexible JSON payloads addressed by a
//! `(collection, id)` pair. The `DocumentStore` trait is the seam the
//! application core depends on; `PgDocumentStore` is the production
//! implementation and `MemoryDocumentStore` backs tests and local dev.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Schema-flexible field payload of a document.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A stored record annotated with its storage-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: JsonMap,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Operations against a named document collection.
///
/// Both implementations list in document-id order, so callers see the
/// same ordering regardless of backend.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in the collection, ordered by document id.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Single document lookup.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create-or-replace the document stored under `id`.
    async fn put(&self, collection: &str, id: &str, fields: JsonMap) -> Result<(), StoreError>;

    /// Atomically advance and return the collection's allocation counter.
    ///
    /// The first call on a collection seeds the counter from the current
    /// document count, so an empty collection yields 1. Concurrent callers
    /// never receive the same value.
    async fn next_in_sequence(&self, collection: &str) -> Result<i64, StoreError>;
}
