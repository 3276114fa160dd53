//! SetBudgetHandler - replaces the free-text gift budget.

use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::{authorize, load_event, load_status};
use crate::application::message::Message;
use crate::domain::foundation::UserError;
use crate::ports::InfoNotice;

/// Handler for `/set_budget <text...>`.
pub struct SetBudgetHandler {
    ctx: BotContext,
}

impl SetBudgetHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        if message.args.is_empty() {
            return Err(UserError::ArgumentExpected.into());
        }

        let mut event = load_event(&self.ctx, &message.chat).await?;
        authorize(&self.ctx, &event, &message.chat, &message.from).await?;

        event.set_budget(message.args.join(" "));
        self.ctx.events.save(&event).await?;

        self.ctx
            .output
            .send_info(message.chat.id, InfoNotice::BudgetUpdated)
            .await?;
        let status = load_status(&self.ctx, event).await?;
        self.ctx.output.send_event(message.chat.id, &status).await?;
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
    use crate::domain::foundation::EventState;

    #[tokio::test]
    async fn joins_arguments_with_single_spaces() {
        let mut members = vec![reachable_user(13, "Ada")];
        let event = event_with(42, &mut members);
        let bot = TestBot::new(members.clone(), vec![event]);

        SetBudgetHandler::new(bot.ctx.clone())
            .handle(&message(&members[0], group(42), "/set_budget  20   EUR "))
            .await
            .unwrap();

        assert_eq!(bot.event(42).unwrap().budget(), Some("20 EUR"));
    }

    #[tokio::test]
    async fn budget_can_change_after_launch() {
        let mut members = vec![reachable_user(13, "Ada")];
        let mut event = event_with(42, &mut members);
        event.set_state(EventState::Launched);
        let bot = TestBot::new(members.clone(), vec![event]);

        SetBudgetHandler::new(bot.ctx.clone())
            .handle(&message(&members[0], group(42), "/set_budget 30"))
            .await
            .unwrap();

        assert_eq!(bot.event(42).unwrap().budget(), Some("30"));
    }

    #[tokio::test]
    async fn arguments_are_checked_before_the_event() {
        let ada = reachable_user(13, "Ada");
        let bot = TestBot::new(vec![ada.clone()], vec![]);

        let result = SetBudgetHandler::new(bot.ctx.clone())
            .handle(&message(&ada, group(42), "/set_budget"))
            .await;

        assert!(matches!(result, Err(CommandError::Rejected(UserError::ArgumentExpected))));
    }

    #[tokio::test]
    async fn stranger_cannot_change_budget() {
        let mut members = vec![reachable_user(13, "Ada")];
        let event = event_with(42, &mut members);
        let bot = TestBot::new(members, vec![event]);

        let result = SetBudgetHandler::new(bot.ctx.clone())
            .handle(&message(&reachable_user(99, "Eve"), group(42), "/set_budget 5"))
            .await;

        assert!(matches!(result, Err(CommandError::Rejected(UserError::PermissionDenied))));
        assert_eq!(bot.write_count(), 0);
    }
}
