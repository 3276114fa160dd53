//! Dialog store port - pending continuations keyed by chat.
//!
//! Entries never expire. While a chat has a pending dialog every message
//! from it is routed there, including messages that look like commands.

use crate::domain::dialog::Dialog;
use crate::domain::foundation::ChatId;

/// Port holding at most one pending [`Dialog`] per chat.
pub trait DialogStore: Send + Sync {
    /// Returns the pending dialog of `chat`, if any.
    fn get(&self, chat: ChatId) -> Option<Dialog>;

    /// Stores `dialog` for `chat`, replacing any previous entry.
    fn set(&self, chat: ChatId, dialog: Dialog);

    /// Removes the pending dialog of `chat`.
    fn clear(&self, chat: ChatId);
}
