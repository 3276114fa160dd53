//! CancelEventHandler - removes an event in any state.

use tracing::{info, warn};

use super::dissolve;
use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::{authorize, load_event, load_status};
use crate::application::message::Message;
use crate::ports::InfoNotice;

/// Handler for `/cancel`.
pub struct CancelEventHandler {
    ctx: BotContext,
}

impl CancelEventHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        let event = load_event(&self.ctx, &message.chat).await?;
        authorize(&self.ctx, &event, &message.chat, &message.from).await?;
        let status = load_status(&self.ctx, event).await?;

        for user in &status.participants {
            let Some(channel) = user.notification_channel() else {
                continue;
            };
            if let Err(e) = self
                .ctx
                .output
                .send_event_cancellation(channel, &status.event)
                .await
            {
                warn!(user_id = %user.id(), error = %e, "Failed to notify participant of cancellation");
            }
        }

        dissolve(&self.ctx, status).await?;
        info!(chat_id = %message.chat.id, "Event canceled");

        self.ctx
            .output
            .send_info(message.chat.id, InfoNotice::EventCanceled)
            .await?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Delivery;
    use crate::application::errors::CommandError;
    use crate::application::handlers::test_support::{
        event_with, group, message, reachable_user, TestBot,
    };
    use crate::domain::foundation::{ChatId, UserError, UserId};
    use crate::domain::user::User;

    #[tokio::test]
    async fn deletes_event_and_notifies_reachable_participants() {
        let mut members = vec![reachable_user(13, "Ada"), User::new(UserId::new(14), "Bob")];
        let event = event_with(42, &mut members);
        let bot = TestBot::new(members.clone(), vec![event]);

        CancelEventHandler::new(bot.ctx.clone())
            .handle(&message(&members[0], group(42), "/cancel"))
            .await
            .unwrap();

        assert!(bot.event(42).is_none());
        assert!(bot.user(13).active_events().is_empty());
        assert!(bot.user(14).active_events().is_empty());

        let notified: Vec<ChatId> = bot
            .output
            .deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::EventCancellation { chat, .. } => Some(chat),
                _ => None,
            })
            .collect();
        assert_eq!(notified, vec![ChatId::new(13)]);
        assert_eq!(
            bot.output.infos(),
            vec![(ChatId::new(42), InfoNotice::EventCanceled)]
        );
    }

    #[tokio::test]
    async fn stranger_cannot_cancel() {
        let mut members = vec![reachable_user(13, "Ada")];
        let event = event_with(42, &mut members);
        let bot = TestBot::new(members, vec![event]);

        let result = CancelEventHandler::new(bot.ctx.clone())
            .handle(&message(&reachable_user(99, "Eve"), group(42), "/cancel"))
            .await;

        assert!(matches!(result, Err(CommandError::Rejected(UserError::PermissionDenied))));
        assert!(bot.event(42).is_some());
        assert_eq!(bot.write_count(), 0);
    }

    #[tokio::test]
    async fn unreachable_cancellation_target_does_not_block_cancel() {
        let mut members = vec![reachable_user(13, "Ada"), reachable_user(14, "Bob")];
        let event = event_with(42, &mut members);
        let bot = TestBot::new(members.clone(), vec![event]);
        bot.output.fail_deliveries_to(ChatId::new(14));

        CancelEventHandler::new(bot.ctx.clone())
            .handle(&message(&members[0], group(42), "/cancel"))
            .await
            .unwrap();

        assert!(bot.event(42).is_none());
    }
}
