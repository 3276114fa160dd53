//! Lookups and checks shared by the event handlers.

use crate::application::context::BotContext;
use crate::application::errors::CommandError;
use crate::application::message::Chat;
use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserError, UserId};
use crate::domain::user::User;
use crate::ports::EventStatus;

/// Loads the event living in `chat`, or rejects with `NoEvent`.
pub(crate) async fn load_event(ctx: &BotContext, chat: &Chat) -> Result<Event, CommandError> {
    ctx.events
        .find_by_id(EventId::for_chat(chat.id))
        .await?
        .ok_or(CommandError::Rejected(UserError::NoEvent))
}

/// Only the owner or a chat administrator may manage an event.
pub(crate) async fn authorize(
    ctx: &BotContext,
    event: &Event,
    chat: &Chat,
    user: &User,
) -> Result<(), CommandError> {
    if event.is_owner(user.id()) || ctx.authority.is_admin(user.id(), chat.id).await? {
        return Ok(());
    }
    Err(UserError::PermissionDenied.into())
}

pub(crate) fn require_private(chat: &Chat) -> Result<(), CommandError> {
    if chat.private {
        Ok(())
    } else {
        Err(UserError::NotPrivateChat.into())
    }
}

/// Loads a user an event refers to. A dangling reference is a store defect.
pub(crate) async fn require_user(ctx: &BotContext, id: UserId) -> Result<User, DomainError> {
    ctx.users.find_by_id(id).await?.ok_or_else(|| {
        DomainError::new(ErrorCode::UserNotFound, format!("User {} not found", id))
            .with_detail("user_id", id.to_string())
    })
}

/// Resolves the owner and participants of `event` for rendering.
pub(crate) async fn load_status(ctx: &BotContext, event: Event) -> Result<EventStatus, DomainError> {
    let owner = require_user(ctx, event.owner()).await?;
    let mut participants = Vec::with_capacity(event.participants().len());
    for id in event.participant_ids() {
        participants.push(require_user(ctx, id).await?);
    }
    Ok(EventStatus {
        event,
        owner,
        participants,
    })
}
