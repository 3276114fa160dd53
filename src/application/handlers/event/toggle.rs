//! ToggleParticipationHandler - join/leave button under the status message.

use tracing::debug;

use crate::application::context::BotContext;
use crate::application::handlers::guards::load_status;
use crate::application::message::ClickRequest;
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::ClickResponse;

/// Handler for the toggle button.
///
/// Clicks never produce chat errors; every outcome is answered on the click.
pub struct ToggleParticipationHandler {
    ctx: BotContext,
}

impl ToggleParticipationHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub async fn handle(&self, click: &ClickRequest) -> Result<(), DomainError> {
        let output = &self.ctx.output;

        let Some(mut event) = self.ctx.events.find_by_id(EventId::for_chat(click.chat)).await?
        else {
            output
                .respond_on_click(&click.id, ClickResponse::EventCanceled)
                .await?;
            return output.cancel_event(click.chat, click.message).await;
        };

        if event.is_launched() {
            output
                .respond_on_click(&click.id, ClickResponse::AlreadyLaunched)
                .await?;
            let status = load_status(&self.ctx, event).await?;
            return output.update_event(click.chat, click.message, &status).await;
        }

        let mut user = click.from.clone();
        let joined = event.toggle_participant(&mut user)?;
        self.ctx.events.save(&event).await?;
        self.ctx.users.save(&user).await?;
        debug!(event_id = %event.id(), user_id = %user.id(), joined, "Participation toggled");

        let response = if joined {
            ClickResponse::EventJoined
        } else {
            ClickResponse::EventLeft
        };
        output.respond_on_click(&click.id, response).await?;

        let status = load_status(&self.ctx, event).await?;
        output.update_event(click.chat, click.message, &status).await
    }
}
