//! RequestWishlistHandler - asks for the wishlist text in the next message.

use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::require_private;
use crate::application::message::Message;
use crate::domain::dialog::Dialog;
use crate::ports::InfoNotice;

/// Handler for `/wishlist`. Leaves the chat awaiting the wishlist.
pub struct RequestWishlistHandler {
    ctx: BotContext,
}

impl RequestWishlistHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        require_private(&message.chat)?;
        self.ctx
            .output
            .send_info(message.chat.id, InfoNotice::WaitingForWishlist)
            .await?;
        Ok(Some(Dialog::AwaitingWishlist))
    }
}
