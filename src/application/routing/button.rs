//! Inline button dispatch. Buttons are stateless and never open dialogs.

use crate::application::context::BotContext;
use crate::application::handlers::ToggleParticipationHandler;
use crate::application::message::ClickRequest;
use crate::domain::foundation::DomainError;
use crate::ports::TOGGLE_PAYLOAD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Join or leave the chat's event.
    Toggle,
}

impl Button {
    pub fn from_payload(payload: &str) -> Option<Self> {
        match payload {
            TOGGLE_PAYLOAD => Some(Button::Toggle),
            _ => None,
        }
    }

    pub async fn on_click(self, ctx: &BotContext, click: &ClickRequest) -> Result<(), DomainError> {
        match self {
            Button::Toggle => ToggleParticipationHandler::new(ctx.clone()).handle(click).await,
        }
    }
}
