//! Transport-neutral inbound updates.
//!
//! ```json
//! {"message": {"from": {"id": 13, "first_name": "Ada"}, "chat": {"id": 42, "kind": "group", "title": "Office"}, "text": "/create"}}
//! {"click": {"id": "cb-1", "from": {"id": 14, "first_name": "Bob"}, "chat": 42, "message": 7, "data": "toggle"}}
//! ```

use serde::Deserialize;

use crate::domain::foundation::{CallbackId, ChatId, MessageId, UserId};

/// Title used when the platform sends none.
pub const UNKNOWN_TITLE: &str = "<unknown>";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sender {
    pub id: UserId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Sender {
    /// `first_name [last_name]`.
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InboundChat {
    pub id: ChatId,
    pub kind: ChatKind,
    #[serde(default)]
    pub title: Option<String>,
}

impl InboundChat {
    pub fn is_private(&self) -> bool {
        self.kind == ChatKind::Private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncomingMessage {
    /// Absent for channel posts and service messages.
    #[serde(default)]
    pub from: Option<Sender>,
    pub chat: InboundChat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncomingClick {
    pub id: CallbackId,
    pub from: Sender,
    /// Chat and message carrying the button; absent for inline-mode messages.
    #[serde(default)]
    pub chat: Option<ChatId>,
    #[serde(default)]
    pub message: Option<MessageId>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Update {
    Message(IncomingMessage),
    Click(IncomingClick),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_update() {
        let update: Update = serde_json::from_str(
            r#"{"message": {"from": {"id": 13, "first_name": "Ada", "last_name": "Lovelace"},
                "chat": {"id": 42, "kind": "supergroup", "title": "Office"}, "text": "/create"}}"#,
        )
        .unwrap();

        match update {
            Update::Message(message) => {
                let sender = message.from.unwrap();
                assert_eq!(sender.display_name(), "Ada Lovelace");
                assert!(!message.chat.is_private());
                assert_eq!(message.text.as_deref(), Some("/create"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_click_without_message() {
        let update: Update = serde_json::from_str(
            r#"{"click": {"id": "cb", "from": {"id": 14, "first_name": "Bob"}, "data": "toggle"}}"#,
        )
        .unwrap();

        match update {
            Update::Click(click) => {
                assert_eq!(click.from.display_name(), "Bob");
                assert!(click.chat.is_none());
                assert_eq!(click.data.as_deref(), Some("toggle"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
