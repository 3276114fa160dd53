//! Router - turns inbound updates into handler calls.
//!
//! A message first goes to its chat's pending dialog, if there is one, and
//! only otherwise to the command table. Handlers answer with the chat's next
//! dialog, which replaces (or clears) the stored one.

use std::sync::Arc;

use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use super::button::Button;
use super::command::{continue_dialog, CommandRegistry};
use super::parser::CommandParser;
use super::update::{IncomingClick, IncomingMessage, Sender, Update, UNKNOWN_TITLE};
use crate::application::context::BotContext;
use crate::application::message::{Chat, ClickRequest, Message};
use crate::domain::foundation::{ChatId, DomainError, MessageId, UserError};
use crate::domain::user::User;
use crate::ports::{ClickResponse, DialogStore};

pub struct Router {
    ctx: BotContext,
    dialogs: Arc<dyn DialogStore>,
    commands: CommandRegistry,
    parser: CommandParser,
}

impl Router {
    /// A router with the standard command table.
    pub fn new(ctx: BotContext, dialogs: Arc<dyn DialogStore>, bot_name: impl Into<String>) -> Self {
        Self::with_registry(ctx, dialogs, CommandRegistry::standard(), bot_name)
    }

    pub fn with_registry(
        ctx: BotContext,
        dialogs: Arc<dyn DialogStore>,
        commands: CommandRegistry,
        bot_name: impl Into<String>,
    ) -> Self {
        Self {
            ctx,
            dialogs,
            commands,
            parser: CommandParser::new(bot_name),
        }
    }

    pub async fn handle(&self, update: Update) {
        match update {
            Update::Message(message) => self.handle_message(message).await,
            Update::Click(click) => self.handle_click(click).await,
        }
    }

    /// Processes one message to completion. Never fails: fatal errors are
    /// logged and answered with a generic internal error.
    pub async fn handle_message(&self, incoming: IncomingMessage) {
        let Some(sender) = incoming.from.clone() else {
            debug!(chat_id = %incoming.chat.id, "Ignoring message without sender");
            return;
        };
        let chat = incoming.chat.id;
        let span = info_span!(
            "message",
            chat_id = %chat,
            user_id = %sender.id,
            correlation_id = %Uuid::new_v4(),
        );

        async move {
            if let Err(e) = self.process_message(incoming, &sender).await {
                error!(error = %e, "Failed to process message");
                self.dialogs.clear(chat);
                if let Err(e) = self.ctx.output.send_error(chat, UserError::InternalError).await {
                    warn!(error = %e, "Failed to report internal error");
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Processes one button click to completion. Clicks without a payload
    /// or message reference, and unknown payloads, are ignored.
    pub async fn handle_click(&self, click: IncomingClick) {
        let (Some(payload), Some(chat), Some(message)) =
            (click.data.as_deref(), click.chat, click.message)
        else {
            warn!(callback_id = %click.id, "Ignoring click without payload or message");
            return;
        };
        let Some(button) = Button::from_payload(payload) else {
            warn!(callback_id = %click.id, payload, "Ignoring unknown button");
            return;
        };
        let span = info_span!(
            "click",
            chat_id = %chat,
            user_id = %click.from.id,
            correlation_id = %Uuid::new_v4(),
        );

        async move {
            if let Err(e) = self.process_click(&click, button, chat, message).await {
                error!(error = %e, "Failed to process click");
                if let Err(e) = self
                    .ctx
                    .output
                    .respond_on_click(&click.id, ClickResponse::InternalError)
                    .await
                {
                    warn!(error = %e, "Failed to report internal error");
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn process_click(
        &self,
        click: &IncomingClick,
        button: Button,
        chat: ChatId,
        message: MessageId,
    ) -> Result<(), DomainError> {
        let request = ClickRequest {
            id: click.id.clone(),
            from: self.resolve_user(&click.from).await?,
            chat,
            message,
        };
        button.on_click(&self.ctx, &request).await
    }

    async fn process_message(
        &self,
        incoming: IncomingMessage,
        sender: &Sender,
    ) -> Result<(), DomainError> {
        let chat_id = incoming.chat.id;
        let private = incoming.chat.is_private();

        let mut user = self.resolve_user(sender).await?;
        if private && user.bind_channel(chat_id) {
            debug!("Bound notification channel");
            self.ctx.users.save(&user).await?;
        }

        let text = incoming.text.unwrap_or_default();
        let parsed = self.parser.parse(&text);
        let message = Message {
            from: user,
            chat: Chat {
                id: chat_id,
                title: incoming.chat.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
                private,
            },
            text,
            args: parsed.args,
        };

        let next = match self.dialogs.get(chat_id) {
            Some(dialog) => {
                debug!(?dialog, "Continuing dialog");
                continue_dialog(dialog, &self.ctx, &message).await?
            }
            None => {
                let command = self.commands.resolve(parsed.command.as_deref());
                debug!(?command, "Dispatching command");
                command.process(&self.ctx, &message).await?
            }
        };

        match next {
            Some(dialog) => self.dialogs.set(chat_id, dialog),
            None => self.dialogs.clear(chat_id),
        }
        Ok(())
    }

    /// Loads the sender, creating them on first sight.
    async fn resolve_user(&self, sender: &Sender) -> Result<User, DomainError> {
        if let Some(user) = self.ctx.users.find_by_id(sender.id).await? {
            return Ok(user);
        }
        let user = User::new(sender.id, sender.display_name());
        self.ctx.users.save(&user).await?;
        debug!(user_id = %sender.id, "Registered new user");
        Ok(user)
    }
}
