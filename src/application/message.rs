//! Inputs handed to command and button handlers.

use crate::domain::foundation::{CallbackId, ChatId, MessageId};
use crate::domain::user::User;

/// The chat a message was posted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub title: String,
    /// One-to-one chat between the user and the bot.
    pub private: bool,
}

/// A message from a resolved user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: User,
    pub chat: Chat,
    /// Full message text.
    pub text: String,
    /// Whitespace-separated tokens after the command token.
    pub args: Vec<String>,
}

/// A click on an inline button under a bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRequest {
    pub id: CallbackId,
    pub from: User,
    pub chat: ChatId,
    /// The message carrying the button.
    pub message: MessageId,
}
