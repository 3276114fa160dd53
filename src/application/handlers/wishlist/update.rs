//! UpdateWishlistHandler - stores the text received while awaiting a wishlist.

use super::fanout::notify_santas;
use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::message::Message;
use crate::ports::InfoNotice;

/// Continuation of [`Dialog::AwaitingWishlist`](crate::domain::dialog::Dialog).
///
/// Accepts any text; an empty message clears the wishlist.
pub struct UpdateWishlistHandler {
    ctx: BotContext,
}

impl UpdateWishlistHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, message: &Message) -> HandlerResult {
        let mut user = message.from.clone();
        user.set_wishlist(Some(message.text.clone()));
        self.ctx.users.save(&user).await?;

        self.ctx
            .output
            .send_info(message.chat.id, InfoNotice::WishlistUpdated)
            .await?;
        notify_santas(&self.ctx, &user).await?;
        Ok(None)
    }
}
