//! HelpHandler - describes the bot and its commands.

use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::message::Message;
use crate::ports::InfoNotice;

/// Handler for `/start`, `/help` and unrecognized commands.
pub struct HelpHandler {
    ctx: BotContext,
}

impl HelpHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        self.ctx
            .output
            .send_info(message.chat.id, InfoNotice::Help)
            .await?;
        Ok(None)
    }
}
