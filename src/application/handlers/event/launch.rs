//! LaunchEventHandler - closes registration and assigns gift targets.

use tracing::{info, warn};

use crate::application::context::BotContext;
use crate::application::errors::HandlerResult;
use crate::application::handlers::guards::{authorize, load_event, load_status};
use crate::application::message::Message;
use crate::domain::event::generate_pairs;
use crate::domain::foundation::{EventState, StateMachine, UserError};
use crate::ports::InfoNotice;

/// Fewest participants a launch accepts.
pub const MIN_PARTICIPANTS: usize = 2;

/// Handler for `/launch`.
pub struct LaunchEventHandler {
    ctx: BotContext,
}

impl LaunchEventHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    /// Guards run in a fixed order and the first failure wins: event exists,
    /// caller may manage it, not launched yet, enough participants, every
    /// participant reachable.
    pub async fn handle(&self, message: &Message) -> HandlerResult {
        let chat = message.chat.id;

        // 1. Load and authorize
        let event = load_event(&self.ctx, &message.chat).await?;
        authorize(&self.ctx, &event, &message.chat, &message.from).await?;

        // 2. Lifecycle and size guards
        if !event.state().can_transition_to(&EventState::Launched) {
            return Err(UserError::EventAlreadyLaunched.into());
        }
        if event.participants().len() < MIN_PARTICIPANTS {
            return Err(UserError::NotEnoughUsers.into());
        }

        // 3. Reachability guard
        let status = load_status(&self.ctx, event).await?;
        if status.unreachable().next().is_some() {
            self.ctx.output.send_event(chat, &status).await?;
            return Err(UserError::NotAuthorizedUser.into());
        }

        // 4. Pair, then commit state and targets
        let pairs = {
            let mut rng = rand::thread_rng();
            generate_pairs(status.participants, &mut rng)
        };
        let mut event = status.event;
        event.set_state(EventState::Launched);
        self.ctx.events.save(&event).await?;
        for pair in &pairs {
            event.set_target(pair.user.id(), pair.target.id())?;
            self.ctx.events.save(&event).await?;
        }
        info!(event_id = %event.id(), participants = pairs.len(), "Event launched");

        // 5. Deliver targets, best effort per recipient
        for pair in &pairs {
            let Some(channel) = pair.user.notification_channel() else {
                warn!(user_id = %pair.user.id(), "Participant lost their channel before delivery");
                continue;
            };
            if let Err(e) = self.ctx.output.send_target(channel, &event, &pair.target).await {
                warn!(user_id = %pair.user.id(), error = %e, "Failed to deliver gift target");
            }
        }

        self.ctx.output.send_info(chat, InfoNotice::EventLaunched).await?;
        Ok(None)
    }
}
