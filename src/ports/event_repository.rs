//! Event repository port.
//!
//! Defines the contract for persisting and retrieving Event aggregates.
//! One document per event id; since the id equals the chat id this is also
//! what limits a chat to a single active event.

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

/// Repository port for Event aggregate persistence.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find an event by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, DomainError>;

    /// Write the full aggregate, replacing any previous document.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, event: &Event) -> Result<(), DomainError>;

    /// Delete an event. Deleting a missing event is not an error.
    async fn delete(&self, id: EventId) -> Result<(), DomainError>;
}
