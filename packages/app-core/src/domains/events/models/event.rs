//! Event model types.
//!
//! Stored payloads are open-world: any field the caller supplies is kept
//! verbatim, including unknown status strings. The display layer is
//! closed-world, folding unknowns to `Applied`.

use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

use docstore::{JsonMap, StoreError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

// =============================================================================
// EventId
// =============================================================================

/// Typed wrapper around an event's storage identifier.
///
/// Allocated ids are `OrgEvent{n}`, but the hosted store accepts any
/// string id, so arbitrary ids can be wrapped as well.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id allocated for sequence value `n`.
    pub fn from_sequence(n: i64) -> Self {
        Self(format!("OrgEvent{}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for EventId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// EventStatus
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Applied,
    Approved,
    Rejected,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Read a status from a document payload field.
    ///
    /// Absent, non-string, or unrecognized values fold to `Applied`.
    pub fn from_field(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("Approved") => Self::Approved,
            Some("Rejected") => Self::Rejected,
            _ => Self::Applied,
        }
    }

    /// Badge color for the status. Exhaustive on purpose: adding a status
    /// without a badge is a compile error.
    pub fn badge(&self) -> BadgeColor {
        match self {
            Self::Approved => BadgeColor::Green,
            Self::Rejected => BadgeColor::Red,
            Self::Applied => BadgeColor::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeColor {
    Green,
    Red,
    Orange,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
        }
    }
}

// =============================================================================
// EventRecord
// =============================================================================

/// A fetched event: storage id plus its field payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: EventId,
    pub fields: JsonMap,
}

impl EventRecord {
    pub fn new(id: EventId, fields: JsonMap) -> Self {
        Self { id, fields }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    pub fn date(&self) -> Option<&str> {
        self.str_field("date")
    }

    pub fn time(&self) -> Option<&str> {
        self.str_field("time")
    }

    pub fn location(&self) -> Option<&str> {
        self.str_field("location")
    }

    pub fn participants(&self) -> Option<&str> {
        self.str_field("participants")
    }

    pub fn banner(&self) -> Option<&str> {
        self.str_field("banner")
    }

    pub fn seal(&self) -> Option<&str> {
        self.str_field("seal")
    }

    pub fn status(&self) -> EventStatus {
        EventStatus::from_field(self.fields.get("status"))
    }
}

impl Serialize for EventRecord {
    /// Serializes as the flat merged object `{ "id": ..., <fields...> }`.
    /// The storage id is authoritative when the payload carries its own
    /// `id` key.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let merged: Vec<_> = self
            .fields
            .iter()
            .filter(|(key, _)| key.as_str() != "id")
            .collect();

        let mut map = serializer.serialize_map(Some(merged.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in merged {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// EventDraft
// =============================================================================

/// Caller-supplied field mapping for a new event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventDraft {
    fields: JsonMap,
}

impl EventDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_title(self, title: &str) -> Self {
        self.with_field("title", title)
    }

    pub fn with_status(self, status: EventStatus) -> Self {
        self.with_field("status", status.as_str())
    }

    pub fn into_fields(self) -> JsonMap {
        self.fields
    }
}

impl From<JsonMap> for EventDraft {
    fn from(fields: JsonMap) -> Self {
        Self { fields }
    }
}

// =============================================================================
// EventCard
// =============================================================================

/// Display model for the event card component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCard {
    pub id: EventId,
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub participants: Option<String>,
    pub banner: Option<String>,
    pub status: EventStatus,
    pub badge: BadgeColor,
}

impl From<&EventRecord> for EventCard {
    fn from(record: &EventRecord) -> Self {
        let status = record.status();
        Self {
            id: record.id.clone(),
            title: record.title().map(str::to_string),
            date: record.date().map(str::to_string),
            time: record.time().map(str::to_string),
            description: record.description().map(str::to_string),
            location: record.location().map(str::to_string),
            participants: record.participants().map(str::to_string),
            banner: record.banner().map(str::to_string),
            status,
            badge: status.badge(),
        }
    }
}
