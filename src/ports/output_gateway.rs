//! Output gateway port - everything the bot says.
//!
//! The core decides *what* to tell whom; adapters decide how it looks
//! (localization, markup, buttons) and how it travels.

use crate::domain::event::Event;
use crate::domain::foundation::{CallbackId, ChatId, DomainError, MessageId, UserError};
use crate::domain::user::User;
use async_trait::async_trait;

/// Callback payload of the join/leave button under an event status message.
pub const TOGGLE_PAYLOAD: &str = "toggle";

/// Informational notices posted to a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoNotice {
    Help,
    EventLaunched,
    EventCanceled,
    EventFinished,
    WaitingForWishlist,
    WishlistUpdated,
    WishlistReset,
    BudgetUpdated,
}

/// Short answers to a button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickResponse {
    InternalError,
    AlreadyLaunched,
    EventJoined,
    EventLeft,
    EventCanceled,
}

/// An event together with the users needed to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStatus {
    pub event: Event,
    pub owner: User,
    /// Participants in registration order.
    pub participants: Vec<User>,
}

impl EventStatus {
    /// Participants the bot cannot message privately yet.
    pub fn unreachable(&self) -> impl Iterator<Item = &User> {
        self.participants.iter().filter(|user| !user.is_reachable())
    }
}

/// Port for rendering and delivering responses.
#[async_trait]
pub trait OutputGateway: Send + Sync {
    async fn send_error(&self, chat: ChatId, error: UserError) -> Result<(), DomainError>;

    async fn send_info(&self, chat: ChatId, info: InfoNotice) -> Result<(), DomainError>;

    /// Post the event status message (with the join/leave button while
    /// registering).
    async fn send_event(&self, chat: ChatId, status: &EventStatus) -> Result<(), DomainError>;

    /// Re-render an existing status message in place.
    async fn update_event(
        &self,
        chat: ChatId,
        message: MessageId,
        status: &EventStatus,
    ) -> Result<(), DomainError>;

    /// Replace an existing status message with a canceled notice.
    async fn cancel_event(&self, chat: ChatId, message: MessageId) -> Result<(), DomainError>;

    /// Tell a participant privately who they give to.
    async fn send_target(&self, chat: ChatId, event: &Event, target: &User)
        -> Result<(), DomainError>;

    /// Tell a participant privately that an event was canceled.
    async fn send_event_cancellation(&self, chat: ChatId, event: &Event)
        -> Result<(), DomainError>;

    /// Show a user their own wishlist.
    async fn send_wishlist(&self, chat: ChatId, user: &User) -> Result<(), DomainError>;

    /// Tell a Secret Santa that their target changed their wishlist.
    async fn send_wishlist_update(&self, chat: ChatId, target: &User) -> Result<(), DomainError>;

    async fn respond_on_click(
        &self,
        request: &CallbackId,
        response: ClickResponse,
    ) -> Result<(), DomainError>;
}
