//! CreateEventHandler - opens a new event in the current chat.

use tracing::info;

use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::message::Message;
use crate::domain::event::Event;
use crate::domain::foundation::{EventId, UserError};
use crate::ports::EventStatus;

/// Handler for `/create`.
pub struct CreateEventHandler {
    ctx: BotContext,
}

impl CreateEventHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        let id = EventId::for_chat(message.chat.id);
        if self.ctx.events.find_by_id(id).await?.is_some() {
            return Err(UserError::AlreadyHasEvent.into());
        }

        let event = Event::new(id, message.chat.title.clone(), message.from.id());
        self.ctx.events.save(&event).await?;
        info!(event_id = %id, owner = %message.from.id(), "Event created");

        let status = EventStatus {
            event,
            owner: message.from.clone(),
            participants: Vec::new(),
        };
        self.ctx.output.send_event(message.chat.id, &status).await?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::CommandError;
    use crate::application::handlers::test_support::{group, message, reachable_user, TestBot};
    use crate::domain::foundation::{EventState, UserId};

    #[tokio::test]
    async fn creates_registering_event_owned_by_sender() {
        let ada = reachable_user(13, "Ada");
        let bot = TestBot::new(vec![ada.clone()], vec![]);

        let next = CreateEventHandler::new(bot.ctx.clone())
            .handle(&message(&ada, group(42), "/create"))
            .await
            .unwrap();

        assert!(next.is_none());
        let event = bot.event(42).unwrap();
        assert_eq!(event.owner(), UserId::new(13));
        assert_eq!(event.state(), EventState::Registering);
        assert_eq!(event.name(), "Office");
        assert_eq!(bot.output.deliveries().len(), 1);
    }

    #[tokio::test]
    async fn second_event_in_chat_is_rejected_without_writing() {
        let ada = reachable_user(13, "Ada");
        let existing = Event::new(EventId::new(42), "Office", UserId::new(13));
        let bot = TestBot::new(vec![ada.clone()], vec![existing]);

        let result = CreateEventHandler::new(bot.ctx.clone())
            .handle(&message(&ada, group(42), "/create"))
            .await;

        assert!(matches!(result, Err(CommandError::Rejected(UserError::AlreadyHasEvent))));
        assert_eq!(bot.write_count(), 0);
    }
}
