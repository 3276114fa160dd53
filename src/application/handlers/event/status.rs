//! ShowStatusHandler - re-posts the event status message.

use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::{load_event, load_status};
use crate::application::message::Message;

/// Handler for `/status`.
pub struct ShowStatusHandler {
    ctx: BotContext,
}

impl ShowStatusHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        let event = load_event(&self.ctx, &message.chat).await?;
        let status = load_status(&self.ctx, event).await?;
        self.ctx.output.send_event(message.chat.id, &status).await?;
        Ok(None)
    }
}
