//! In-memory repositories for testing.
//!
//! Both repositories count writes so tests can assert that a rejected
//! command left the store untouched.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::domain::user::User;
use crate::ports::{EventRepository, UserRepository};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory Event repository.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: Mutex<HashMap<EventId, Event>>,
    writes: AtomicUsize,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `events` (not counted as writes).
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let repo = Self::new();
        {
            let mut map = lock(&repo.events);
            for event in events {
                map.insert(event.id(), event);
            }
        }
        repo
    }

    /// Current stored copy of an event.
    pub fn get(&self, id: EventId) -> Option<Event> {
        lock(&self.events).get(&id).cloned()
    }

    /// Number of saves and deletes performed through the port.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, DomainError> {
        Ok(self.get(id))
    }

    async fn save(&self, event: &Event) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        lock(&self.events).insert(event.id(), event.clone());
        Ok(())
    }

    async fn delete(&self, id: EventId) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        lock(&self.events).remove(&id);
        Ok(())
    }
}

/// In-memory User repository.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    writes: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `users` (not counted as writes).
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        {
            let mut map = lock(&repo.users);
            for user in users {
                map.insert(user.id(), user);
            }
        }
        repo
    }

    /// Current stored copy of a user.
    pub fn get(&self, id: UserId) -> Option<User> {
        lock(&self.users).get(&id).cloned()
    }

    /// Number of saves performed through the port.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.get(id))
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        lock(&self.users).insert(user.id(), user.clone());
        Ok(())
    }
}
