//! Configured administrator list.
//!
//! Stands in for the chat platform's member lookup when the transport has
//! none (the console channel, tests). Listed users administer every chat.
//!
//! # Usage
//!
//! ```ignore
//! use secret_santa_bot::adapters::authority::StaticChatAuthority;
//!
//! let authority = StaticChatAuthority::new([UserId::new(1)]);
//! // Or nobody is an administrator:
//! let authority = StaticChatAuthority::none();
//! ```

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::foundation::{ChatId, DomainError, UserId};
use crate::ports::ChatAuthority;

#[derive(Debug, Clone, Default)]
pub struct StaticChatAuthority {
    admins: HashSet<UserId>,
}

impl StaticChatAuthority {
    pub fn new(admins: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }

    /// Create an authority that knows no administrators.
    pub fn none() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatAuthority for StaticChatAuthority {
    async fn is_admin(&self, user: UserId, _chat: ChatId) -> Result<bool, DomainError> {
        Ok(self.admins.contains(&user))
    }
}
