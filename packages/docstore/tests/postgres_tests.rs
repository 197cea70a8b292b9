//! Integration tests against a live Postgres instance.
//!
//! Opt-in: all tests are `#[ignore]`d and require DOCSTORE_TEST_DATABASE_URL.
//! Run with:
//!   DOCSTORE_TEST_DATABASE_URL=postgres://... cargo test -p docstore -- --ignored

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use docstore::{DocumentStore, JsonMap, PgDocumentStore};

async fn connect() -> PgDocumentStore {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let url = std::env::var("DOCSTORE_TEST_DATABASE_URL")
        .expect("DOCSTORE_TEST_DATABASE_URL not set");
    let store = PgDocumentStore::connect(&url, 5)
        .await
        .expect("failed to connect");
    store.migrate().await.expect("failed to migrate");
    store
}

/// Unique collection name per test run so tests don't interfere.
fn test_collection(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}_{}", prefix, nanos)
}

fn fields(pairs: &[(&str, &str)]) -> JsonMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}

#[tokio::test]
#[ignore] // Requires live Postgres
async fn test_put_get_list_roundtrip() {
    let store = connect().await;
    let collection = test_collection("roundtrip");

    store
        .put(&collection, "b", fields(&[("title", "Second")]))
        .await
        .unwrap();
    store
        .put(&collection, "a", fields(&[("title", "First")]))
        .await
        .unwrap();

    let doc = store.get(&collection, "a").await.unwrap().unwrap();
    assert_eq!(doc.fields["title"], "First");

    let docs = store.list(&collection).await.unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, "a");
    assert_eq!(docs[1].id, "b");
}

#[tokio::test]
#[ignore] // Requires live Postgres
async fn test_put_replaces_payload() {
    let store = connect().await;
    let collection = test_collection("replace");

    store
        .put(&collection, "a", fields(&[("title", "old"), ("extra", "yes")]))
        .await
        .unwrap();
    store
        .put(&collection, "a", fields(&[("title", "new")]))
        .await
        .unwrap();

    let doc = store.get(&collection, "a").await.unwrap().unwrap();
    assert_eq!(doc.fields["title"], "new");
    assert!(!doc.fields.contains_key("extra"));
}

#[tokio::test]
#[ignore] // Requires live Postgres
async fn test_sequence_seeds_from_count_then_increments() {
    let store = connect().await;
    let collection = test_collection("seq");

    store.put(&collection, "a", JsonMap::new()).await.unwrap();
    store.put(&collection, "b", JsonMap::new()).await.unwrap();

    assert_eq!(store.next_in_sequence(&collection).await.unwrap(), 3);
    assert_eq!(store.next_in_sequence(&collection).await.unwrap(), 4);
}

#[tokio::test]
#[ignore] // Requires live Postgres
async fn test_concurrent_allocations_are_distinct() {
    let store = Arc::new(connect().await);
    let collection = test_collection("concurrent");

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            let collection = collection.clone();
            tokio::spawn(async move { store.next_in_sequence(&collection).await.unwrap() })
        })
        .collect();

    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.await.unwrap());
    }
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), 16);
}
