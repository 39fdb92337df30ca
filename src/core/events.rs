use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for domain changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// LibraryEvent names every change the library records.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryEvent {
    BookAdded,
    BookUpdated,
    BookRemoved,
    MemberRegistered,
    MemberUpdated,
    BookBorrowed,
    BookReturned,
}

impl LibraryEvent {
    pub fn kind(&self) -> DomainEventType {
        match self {
            LibraryEvent::BookAdded | LibraryEvent::MemberRegistered | LibraryEvent::BookBorrowed => DomainEventType::Added,
            LibraryEvent::BookUpdated | LibraryEvent::MemberUpdated => DomainEventType::Updated,
            LibraryEvent::BookRemoved | LibraryEvent::BookReturned => DomainEventType::Deleted,
        }
    }

    /// The table the change belongs to.
    pub fn group(&self) -> &'static str {
        match self {
            LibraryEvent::BookAdded | LibraryEvent::BookUpdated | LibraryEvent::BookRemoved => "books",
            LibraryEvent::MemberRegistered | LibraryEvent::MemberUpdated => "members",
            LibraryEvent::BookBorrowed | LibraryEvent::BookReturned => "loans",
        }
    }
}

impl Display for LibraryEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryEvent::BookAdded => write!(f, "book_added"),
            LibraryEvent::BookUpdated => write!(f, "book_updated"),
            LibraryEvent::BookRemoved => write!(f, "book_removed"),
            LibraryEvent::MemberRegistered => write!(f, "member_registered"),
            LibraryEvent::MemberUpdated => write!(f, "member_updated"),
            LibraryEvent::BookBorrowed => write!(f, "book_borrowed"),
            LibraryEvent::BookReturned => write!(f, "book_returned"),
        }
    }
}

// DomainEvent is one recorded change; `key` is the book or member id and
// `json_data` the state after the change.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub event: LibraryEvent,
    pub key: i64,
    pub kind: DomainEventType,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn record<T: Serialize>(event: LibraryEvent, key: i64, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            event,
            key,
            kind: event.kind(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn group(&self) -> &'static str {
        self.event.group()
    }
}
