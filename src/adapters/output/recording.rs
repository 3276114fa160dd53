//! Recording output gateway for testing.
//!
//! Captures every delivery instead of sending it, and can be told to fail
//! deliveries to particular chats to exercise best-effort paths.
//!
//! # Example
//!
//! ```ignore
//! let output = Arc::new(RecordingOutput::new());
//! // ... run a command
//! assert_eq!(output.errors(), vec![(chat, UserError::NoEvent)]);
//! ```

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::event::Event;
use crate::domain::foundation::{
    CallbackId, ChatId, DomainError, EventId, MessageId, UserError, UserId,
};
use crate::domain::user::User;
use crate::ports::{ClickResponse, EventStatus, InfoNotice, OutputGateway};

/// One captured delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Error {
        chat: ChatId,
        error: UserError,
    },
    Info {
        chat: ChatId,
        info: InfoNotice,
    },
    Event {
        chat: ChatId,
        status: EventStatus,
    },
    EventUpdated {
        chat: ChatId,
        message: MessageId,
        status: EventStatus,
    },
    EventCanceledInPlace {
        chat: ChatId,
        message: MessageId,
    },
    Target {
        chat: ChatId,
        event: EventId,
        target: UserId,
    },
    EventCancellation {
        chat: ChatId,
        event: EventId,
    },
    Wishlist {
        chat: ChatId,
        user: UserId,
        wishlist: Option<String>,
    },
    WishlistUpdate {
        chat: ChatId,
        target: UserId,
        wishlist: Option<String>,
    },
    ClickAnswer {
        request: CallbackId,
        response: ClickResponse,
    },
}

#[derive(Debug, Default)]
pub struct RecordingOutput {
    deliveries: Mutex<Vec<Delivery>>,
    failing_chats: Mutex<HashSet<ChatId>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every delivery to `chat` fail with `DeliveryFailed`.
    pub fn fail_deliveries_to(&self, chat: ChatId) {
        lock(&self.failing_chats).insert(chat);
    }

    /// All successful deliveries in order.
    pub fn deliveries(&self) -> Vec<Delivery> {
        lock(&self.deliveries).clone()
    }

    /// Errors sent, with the chat they went to.
    pub fn errors(&self) -> Vec<(ChatId, UserError)> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Error { chat, error } => Some((chat, error)),
                _ => None,
            })
            .collect()
    }

    /// Notices sent, with the chat they went to.
    pub fn infos(&self) -> Vec<(ChatId, InfoNotice)> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Info { chat, info } => Some((chat, info)),
                _ => None,
            })
            .collect()
    }

    /// Click answers sent.
    pub fn click_answers(&self) -> Vec<ClickResponse> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::ClickAnswer { response, .. } => Some(response),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        lock(&self.deliveries).clear();
    }

    fn record(&self, chat: Option<ChatId>, delivery: Delivery) -> Result<(), DomainError> {
        if let Some(chat) = chat {
            if lock(&self.failing_chats).contains(&chat) {
                return Err(DomainError::delivery(format!("chat {} is unreachable", chat)));
            }
        }
        lock(&self.deliveries).push(delivery);
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl OutputGateway for RecordingOutput {
    async fn send_error(&self, chat: ChatId, error: UserError) -> Result<(), DomainError> {
        self.record(Some(chat), Delivery::Error { chat, error })
    }

    async fn send_info(&self, chat: ChatId, info: InfoNotice) -> Result<(), DomainError> {
        self.record(Some(chat), Delivery::Info { chat, info })
    }

    async fn send_event(&self, chat: ChatId, status: &EventStatus) -> Result<(), DomainError> {
        self.record(
            Some(chat),
            Delivery::Event {
                chat,
                status: status.clone(),
            },
        )
    }

    async fn update_event(
        &self,
        chat: ChatId,
        message: MessageId,
        status: &EventStatus,
    ) -> Result<(), DomainError> {
        self.record(
            Some(chat),
            Delivery::EventUpdated {
                chat,
                message,
                status: status.clone(),
            },
        )
    }

    async fn cancel_event(&self, chat: ChatId, message: MessageId) -> Result<(), DomainError> {
        self.record(Some(chat), Delivery::EventCanceledInPlace { chat, message })
    }

    async fn send_target(
        &self,
        chat: ChatId,
        event: &Event,
        target: &User,
    ) -> Result<(), DomainError> {
        self.record(
            Some(chat),
            Delivery::Target {
                chat,
                event: event.id(),
                target: target.id(),
            },
        )
    }

    async fn send_event_cancellation(
        &self,
        chat: ChatId,
        event: &Event,
    ) -> Result<(), DomainError> {
        self.record(
            Some(chat),
            Delivery::EventCancellation {
                chat,
                event: event.id(),
            },
        )
    }

    async fn send_wishlist(&self, chat: ChatId, user: &User) -> Result<(), DomainError> {
        self.record(
            Some(chat),
            Delivery::Wishlist {
                chat,
                user: user.id(),
                wishlist: user.wishlist().map(str::to_string),
            },
        )
    }

    async fn send_wishlist_update(&self, chat: ChatId, target: &User) -> Result<(), DomainError> {
        self.record(
            Some(chat),
            Delivery::WishlistUpdate {
                chat,
                target: target.id(),
                wishlist: target.wishlist().map(str::to_string),
            },
        )
    }

    async fn respond_on_click(
        &self,
        request: &CallbackId,
        response: ClickResponse,
    ) -> Result<(), DomainError> {
        self.record(
            None,
            Delivery::ClickAnswer {
                request: request.clone(),
                response,
            },
        )
    }
}
