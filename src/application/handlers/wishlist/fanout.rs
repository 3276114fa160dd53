//! Wishlist change notifications for a user's Secret Santas.

use tracing::warn;

use crate::application::context::BotContext;
use crate::domain::foundation::DomainError;
use crate::domain::user::User;

/// Tells the santa of `user` in each of their active events about the new
/// wishlist. Stale event references and unreachable santas are skipped.
pub(crate) async fn notify_santas(ctx: &BotContext, user: &User) -> Result<(), DomainError> {
    for &event_id in user.active_events() {
        let Some(event) = ctx.events.find_by_id(event_id).await? else {
            warn!(event_id = %event_id, user_id = %user.id(), "Active event no longer exists");
            continue;
        };
        let Some(santa_id) = event.santa_of(user.id()) else {
            continue;
        };
        let Some(channel) = ctx
            .users
            .find_by_id(santa_id)
            .await?
            .and_then(|santa| santa.notification_channel())
        else {
            continue;
        };
        if let Err(e) = ctx.output.send_wishlist_update(channel, user).await {
            warn!(event_id = %event_id, santa_id = %santa_id, error = %e, "Failed to deliver wishlist update");
        }
    }
    Ok(())
}
