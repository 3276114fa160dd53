//! Chat authorization port.
//!
//! Lifecycle commands are allowed for the event owner and for anyone the
//! chat platform considers an administrator of the chat. Only the platform
//! knows the latter, hence the port.

use crate::domain::foundation::{ChatId, DomainError, UserId};
use async_trait::async_trait;

/// Port answering whether a user administers a chat.
#[async_trait]
pub trait ChatAuthority: Send + Sync {
    /// Returns true if `user` is an administrator (or creator) of `chat`.
    async fn is_admin(&self, user: UserId, chat: ChatId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_authority_is_object_safe() {
        fn _accepts_dyn(_authority: &dyn ChatAuthority) {}
    }
}
