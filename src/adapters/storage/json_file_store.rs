//! JSON file entity store.
//!
//! Stores one JSON document per entity id, partitioned by entity kind:
//! `{root}/users/{id}.json` and `{root}/events/{id}.json`.
//!
//! There is no locking across processes; a storage root must be owned by a
//! single bot process.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::domain::user::User;
use crate::ports::{EventRepository, UserRepository};

const USERS: &str = "users";
const EVENTS: &str = "events";

/// Filesystem-backed store for User and Event documents.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root`. Partitions are created on first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the document for `id` in `partition`.
    pub fn document_path(&self, partition: &str, id: impl Display) -> PathBuf {
        self.root.join(partition).join(format!("{}.json", id))
    }

    async fn load<T: DeserializeOwned>(
        &self,
        partition: &str,
        id: impl Display,
    ) -> Result<Option<T>, DomainError> {
        let path = self.document_path(partition, id);
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::storage(format!("Failed to read document: {}", e))
                    .with_detail("path", path.display().to_string()))
            }
        };

        let document = serde_json::from_str(&json).map_err(|e| {
            DomainError::from(e).with_detail("path", path.display().to_string())
        })?;
        Ok(Some(document))
    }

    async fn store<T: Serialize>(
        &self,
        partition: &str,
        id: impl Display,
        document: &T,
    ) -> Result<(), DomainError> {
        let path = self.document_path(partition, id);
        let json = serde_json::to_string_pretty(document)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!("Failed to create directory: {}", e))
            })?;
        }

        // Write to a temporary file first so readers never see a partial document
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).await.map_err(|e| {
            DomainError::storage(format!("Failed to write temporary file: {}", e))
        })?;
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to rename file: {}", e)))?;

        Ok(())
    }

    async fn remove(&self, partition: &str, id: impl Display) -> Result<(), DomainError> {
        let path = self.document_path(partition, id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Idempotent delete
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::storage(format!("Failed to delete document: {}", e))
                .with_detail("path", path.display().to_string())),
        }
    }
}

#[async_trait]
impl UserRepository for JsonFileStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.load(USERS, id).await
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.store(USERS, user.id(), user).await
    }
}

#[async_trait]
impl EventRepository for JsonFileStore {
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, DomainError> {
        self.load(EVENTS, id).await
    }

    async fn save(&self, event: &Event) -> Result<(), DomainError> {
        self.store(EVENTS, event.id(), event).await
    }

    async fn delete(&self, id: EventId) -> Result<(), DomainError> {
        self.remove(EVENTS, id).await
    }
}
