//! Strongly-typed identifier value objects.
//!
//! Chat platforms hand out stable signed integer identities for users, chats
//! and messages. Each gets its own newtype so a user id can never be passed
//! where a chat id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a transparent integer identifier newtype.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw platform identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw platform identifier.
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

numeric_id!(
    /// Identity of a chat platform user.
    UserId
);

numeric_id!(
    /// Identity of a chat (group or one-to-one).
    ChatId
);

numeric_id!(
    /// Identity of a single message inside a chat.
    MessageId
);

numeric_id!(
    /// Identity of a Secret Santa event.
    ///
    /// Always equal to the owning chat's id, which is what limits a chat to
    /// one active event.
    EventId
);

impl EventId {
    /// Returns the id of the event that belongs to `chat`.
    pub const fn for_chat(chat: ChatId) -> Self {
        Self(chat.value())
    }

    /// Returns the chat this event belongs to.
    pub const fn chat_id(&self) -> ChatId {
        ChatId::new(self.0)
    }
}

/// Opaque identifier of a button click, used to answer that click.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackId(String);

impl CallbackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
