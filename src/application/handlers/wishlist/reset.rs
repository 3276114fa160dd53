//! ResetWishlistHandler - deletes the caller's wishlist.

use super::fanout::notify_santas;
use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::require_private;
use crate::application::message::Message;
use crate::ports::InfoNotice;

/// Handler for `/reset_wishlist`.
pub struct ResetWishlistHandler {
    ctx: BotContext,
}

impl ResetWishlistHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        require_private(&message.chat)?;

        let mut user = message.from.clone();
        user.set_wishlist(None);
        self.ctx.users.save(&user).await?;

        self.ctx
            .output
            .send_info(message.chat.id, InfoNotice::WishlistReset)
            .await?;
        notify_santas(&self.ctx, &user).await?;
        Ok(None)
    }
}
