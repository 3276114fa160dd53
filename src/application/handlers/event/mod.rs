//! Event lifecycle handlers.

mod cancel;
mod create;
mod finish;
mod launch;
mod set_budget;
mod status;
mod toggle;

pub use cancel::CancelEventHandler;
pub use create::CreateEventHandler;
pub use finish::FinishEventHandler;
pub use launch::{LaunchEventHandler, MIN_PARTICIPANTS};
pub use set_budget::SetBudgetHandler;
pub use status::ShowStatusHandler;
pub use toggle::ToggleParticipationHandler;

use crate::application::context::BotContext;
use crate::domain::foundation::DomainError;
use crate::ports::EventStatus;

/// Deletes the event and drops it from every participant's active events.
async fn dissolve(ctx: &BotContext, status: EventStatus) -> Result<(), DomainError> {
    let id = status.event.id();
    for mut user in status.participants {
        if user.remove_active_event(id) {
            ctx.users.save(&user).await?;
        }
    }
    ctx.events.delete(id).await
}
