//! Console output gateway.
//!
//! Writes each delivery as one JSON line, e.g.
//! `{"kind":"send","chat":42,"text":"...","buttons":[]}`.

use async_trait::async_trait;
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;

use super::render::{self, Button};
use crate::domain::event::Event;
use crate::domain::foundation::{CallbackId, ChatId, DomainError, MessageId, UserError};
use crate::domain::user::User;
use crate::ports::{ClickResponse, EventStatus, InfoNotice, OutputGateway};

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Outbound<'a> {
    Send {
        chat: ChatId,
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        buttons: Vec<Button>,
    },
    Edit {
        chat: ChatId,
        message: MessageId,
        text: String,
        buttons: Vec<Button>,
    },
    AnswerClick {
        request: &'a CallbackId,
        text: String,
    },
}

/// Output gateway writing JSON lines to `W` (stdout by default).
pub struct ConsoleOutput<W: Write + Send = std::io::Stdout> {
    writer: Mutex<W>,
}

impl ConsoleOutput {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the writer, consuming the gateway.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn emit(&self, line: Outbound<'_>) -> Result<(), DomainError> {
        let json = serde_json::to_string(&line)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| DomainError::delivery("console writer lock poisoned"))?;
        writeln!(writer, "{}", json)
            .and_then(|_| writer.flush())
            .map_err(|e| DomainError::delivery(format!("Failed to write to console: {}", e)))
    }

    fn send(&self, chat: ChatId, text: String) -> Result<(), DomainError> {
        self.emit(Outbound::Send {
            chat,
            text,
            buttons: Vec::new(),
        })
    }
}

#[async_trait]
impl<W: Write + Send> OutputGateway for ConsoleOutput<W> {
    async fn send_error(&self, chat: ChatId, error: UserError) -> Result<(), DomainError> {
        self.send(chat, render::error_text(error))
    }

    async fn send_info(&self, chat: ChatId, info: InfoNotice) -> Result<(), DomainError> {
        self.send(chat, render::info_text(info))
    }

    async fn send_event(&self, chat: ChatId, status: &EventStatus) -> Result<(), DomainError> {
        self.emit(Outbound::Send {
            chat,
            text: render::event_status_text(status),
            buttons: render::event_buttons(status),
        })
    }

    async fn update_event(
        &self,
        chat: ChatId,
        message: MessageId,
        status: &EventStatus,
    ) -> Result<(), DomainError> {
        self.emit(Outbound::Edit {
            chat,
            message,
            text: render::event_status_text(status),
            buttons: render::event_buttons(status),
        })
    }

    async fn cancel_event(&self, chat: ChatId, message: MessageId) -> Result<(), DomainError> {
        self.emit(Outbound::Edit {
            chat,
            message,
            text: "Event canceled".to_string(),
            buttons: Vec::new(),
        })
    }

    async fn send_target(
        &self,
        chat: ChatId,
        event: &Event,
        target: &User,
    ) -> Result<(), DomainError> {
        self.send(chat, render::target_text(event, target))
    }

    async fn send_event_cancellation(
        &self,
        chat: ChatId,
        event: &Event,
    ) -> Result<(), DomainError> {
        self.send(chat, render::cancellation_text(event))
    }

    async fn send_wishlist(&self, chat: ChatId, user: &User) -> Result<(), DomainError> {
        self.send(chat, render::wishlist_text(user))
    }

    async fn send_wishlist_update(&self, chat: ChatId, target: &User) -> Result<(), DomainError> {
        self.send(chat, render::wishlist_update_text(target))
    }

    async fn respond_on_click(
        &self,
        request: &CallbackId,
        response: ClickResponse,
    ) -> Result<(), DomainError> {
        self.emit(Outbound::AnswerClick {
            request,
            text: render::click_text(response),
        })
    }
}
