//! In-memory document store for tests and local development.
//!
//! Observable semantics match `PgDocumentStore`: id-ordered listing,
//! whole-payload replacement on `put`, and count-seeded atomic sequences.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{Document, DocumentStore, JsonMap, StoreError};

#[derive(Default)]
struct Inner {
    collections: BTreeMap<String, BTreeMap<String, JsonMap>>,
    sequences: BTreeMap<String, i64>,
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    inner: Mutex<Inner>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let inner = self.inner.lock().await;
        let docs = inner
            .collections
            .get(collection)
            .map(|docs| {
                // BTreeMap iteration gives id order for free
                docs.iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_string(),
                fields: fields.clone(),
            }))
    }

    async fn put(&self, collection: &str, id: &str, fields: JsonMap) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn next_in_sequence(&self, collection: &str) -> Result<i64, StoreError> {
        let mut inner = self.inner.lock().await;
        let seed = inner
            .collections
            .get(collection)
            .map(|docs| docs.len() as i64)
            .unwrap_or(0);
        let next = inner
            .sequences
            .entry(collection.to_string())
            .and_modify(|v| *v += 1)
            .or_insert(seed + 1);
        Ok(*next)
    }
}
