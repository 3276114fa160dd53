//! ShowWishlistHandler - sends the caller their own wishlist.

use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::require_private;
use crate::application::message::Message;

/// Handler for `/get_wishlist`.
pub struct ShowWishlistHandler {
    ctx: BotContext,
}

impl ShowWishlistHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        require_private(&message.chat)?;
        self.ctx
            .output
            .send_wishlist(message.chat.id, &message.from)
            .await?;
        Ok(None)
    }
}
