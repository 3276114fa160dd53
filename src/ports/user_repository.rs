//! User repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for User aggregate persistence.
///
/// Users are never deleted.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Write the full aggregate, replacing any previous document.
    async fn save(&self, user: &User) -> Result<(), DomainError>;
}
