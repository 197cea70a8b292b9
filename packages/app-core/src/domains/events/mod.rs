//! Events domain - RSO event records and their repository.
//!
//! Events are schema-flexible documents in the hosted `events` collection.
//! The repository is the only write path; ids are allocated through the
//! store's atomic per-collection sequence.

pub mod models;
pub mod repository;

pub use models::event::{
    BadgeColor, EventCard, EventDraft, EventError, EventId, EventRecord, EventStatus,
};
pub use repository::{EventRepository, EVENTS_COLLECTION};
