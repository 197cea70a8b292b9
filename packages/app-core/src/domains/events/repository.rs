//! Event repository - the only read/write path for the `events` collection.

use std::sync::Arc;

use docstore::DocumentStore;
use serde_json::Value;
use tracing::{error, info};

use super::models::event::{EventDraft, EventError, EventId, EventRecord, EventStatus};

pub const EVENTS_COLLECTION: &str = "events";

#[derive(Clone)]
pub struct EventRepository {
    store: Arc<dyn DocumentStore>,
}

impl EventRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Fetch every event in the collection, in store (document-id) order.
    ///
    /// Store failures are logged and propagated; no retry, no partial
    /// results.
    pub async fn fetch_events(&self) -> Result<Vec<EventRecord>, EventError> {
        let docs = match self.store.list(EVENTS_COLLECTION).await {
            Ok(docs) => docs,
            Err(e) => {
                error!("Failed to fetch events: {}", e);
                return Err(e.into());
            }
        };

        Ok(docs
            .into_iter()
            .map(|doc| EventRecord::new(EventId::new(doc.id), doc.fields))
            .collect())
    }

    /// Create a new event from the caller-supplied fields and return its
    /// allocated id.
    ///
    /// `status` defaults to `"Applied"` when absent; a caller-supplied
    /// value is preserved verbatim. Ids come from the store's atomic
    /// sequence, so concurrent callers always receive distinct ids.
    pub async fn add_event(&self, draft: EventDraft) -> Result<EventId, EventError> {
        let mut fields = draft.into_fields();
        fields
            .entry("status")
            .or_insert_with(|| Value::String(EventStatus::Applied.as_str().to_string()));

        let sequence = match self.store.next_in_sequence(EVENTS_COLLECTION).await {
            Ok(n) => n,
            Err(e) => {
                error!("Failed to allocate event id: {}", e);
                return Err(e.into());
            }
        };
        let id = EventId::from_sequence(sequence);

        if let Err(e) = self.store.put(EVENTS_COLLECTION, id.as_str(), fields).await {
            error!("Failed to store event {}: {}", id, e);
            return Err(e.into());
        }

        info!("Created event {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use docstore::MemoryDocumentStore;
    use serde_json::json;

    use super::*;

    fn repository() -> EventRepository {
        EventRepository::new(Arc::new(MemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn test_first_event_gets_org_event_1_and_applied_status() {
        let repo = repository();

        let id = repo
            .add_event(EventDraft::new().with_title("X"))
            .await
            .unwrap();
        assert_eq!(id.as_str(), "OrgEvent1");

        let events = repo.fetch_events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, id);
        assert_eq!(events[0].title(), Some("X"));
        assert_eq!(events[0].status(), EventStatus::Applied);
        assert_eq!(events[0].fields["status"], "Applied");
    }

    #[tokio::test]
    async fn test_caller_supplied_status_is_preserved() {
        let repo = repository();

        let id = repo
            .add_event(
                EventDraft::new()
                    .with_title("Y")
                    .with_status(EventStatus::Approved),
            )
            .await
            .unwrap();

        let events = repo.fetch_events().await.unwrap();
        assert_eq!(events[0].id, id);
        assert_eq!(events[0].status(), EventStatus::Approved);
    }

    #[tokio::test]
    async fn test_unknown_status_string_is_stored_verbatim() {
        let repo = repository();

        repo.add_event(EventDraft::new().with_field("status", "Waitlisted"))
            .await
            .unwrap();

        let events = repo.fetch_events().await.unwrap();
        // Stored payload keeps the open-world value; the display layer folds it
        assert_eq!(events[0].fields["status"], "Waitlisted");
        assert_eq!(events[0].status(), EventStatus::Applied);
    }

    #[tokio::test]
    async fn test_fetch_returns_all_documents_with_ids_and_fields() {
        let repo = repository();

        for n in 0..5 {
            repo.add_event(
                EventDraft::from(
                    json!({ "title": format!("Event {}", n), "location": "Quad" })
                        .as_object()
                        .unwrap()
                        .clone(),
                ),
            )
            .await
            .unwrap();
        }

        let events = repo.fetch_events().await.unwrap();
        assert_eq!(events.len(), 5);
        for event in &events {
            assert!(event.id.as_str().starts_with("OrgEvent"));
            assert!(event.title().is_some());
            assert_eq!(event.location(), Some("Quad"));
        }
    }

    #[tokio::test]
    async fn test_sequential_ids() {
        let repo = repository();

        let first = repo.add_event(EventDraft::new().with_title("a")).await.unwrap();
        let second = repo.add_event(EventDraft::new().with_title("b")).await.unwrap();
        let third = repo.add_event(EventDraft::new().with_title("c")).await.unwrap();

        assert_eq!(first.as_str(), "OrgEvent1");
        assert_eq!(second.as_str(), "OrgEvent2");
        assert_eq!(third.as_str(), "OrgEvent3");
    }

    #[tokio::test]
    async fn test_concurrent_add_event_ids_are_distinct() {
        let repo = repository();

        let handles: Vec<_> = (0..10)
            .map(|n| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.add_event(EventDraft::new().with_title(&format!("Event {}", n)))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);

        assert_eq!(repo.fetch_events().await.unwrap().len(), 10);
    }
}
