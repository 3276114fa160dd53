//! FinishEventHandler - removes a launched event once the exchange is over.

use tracing::info;

use super::dissolve;
use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::{authorize, load_event, load_status};
use crate::application::message::Message;
use crate::domain::foundation::UserError;
use crate::ports::InfoNotice;

/// Handler for `/finish`.
pub struct FinishEventHandler {
    ctx: BotContext,
}

impl FinishEventHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        let event = load_event(&self.ctx, &message.chat).await?;
        authorize(&self.ctx, &event, &message.chat, &message.from).await?;
        if !event.is_launched() {
            return Err(UserError::EventIsNotLaunched.into());
        }

        let status = load_status(&self.ctx, event).await?;
        dissolve(&self.ctx, status).await?;
        info!(chat_id = %message.chat.id, "Event finished");

        self.ctx
            .output
            .send_info(message.chat.id, InfoNotice::EventFinished)
            .await?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::CommandError;
    use crate::application::handlers::test_support::{
        event_with, group, message, reachable_user, TestBot,
    };
    use crate::domain::foundation::{ChatId, EventState};

    #[tokio::test]
    async fn registering_event_cannot_be_finished() {
        let mut members = vec![reachable_user(13, "Ada"), reachable_user(14, "Bob")];
        let event = event_with(42, &mut members);
        let bot = TestBot::new(members.clone(), vec![event]);

        let result = FinishEventHandler::new(bot.ctx.clone())
            .handle(&message(&members[0], group(42), "/finish"))
            .await;

        assert!(matches!(result, Err(CommandError::Rejected(UserError::EventIsNotLaunched))));
        assert!(bot.event(42).is_some());
        assert_eq!(bot.write_count(), 0);
    }

    #[tokio::test]
    async fn launched_event_is_removed() {
        let mut members = vec![reachable_user(13, "Ada"), reachable_user(14, "Bob")];
        let mut event = event_with(42, &mut members);
        event.set_state(EventState::Launched);
        let bot = TestBot::new(members.clone(), vec![event]);

        FinishEventHandler::new(bot.ctx.clone())
            .handle(&message(&members[0], group(42), "/finish"))
            .await
            .unwrap();

        assert!(bot.event(42).is_none());
        assert!(bot.user(14).active_events().is_empty());
        assert_eq!(
            bot.output.infos(),
            vec![(ChatId::new(42), InfoNotice::EventFinished)]
        );
    }
}
