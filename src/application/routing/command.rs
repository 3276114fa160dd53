//! Command table and dialog continuations.

use std::collections::HashMap;

use crate::application::context::BotContext;
use crate::application::errors::{CommandError, HandlerResult};
use crate::application::handlers::{
    CancelEventHandler, CreateEventHandler, FinishEventHandler, HelpHandler, LaunchEventHandler,
    RequestWishlistHandler, ResetWishlistHandler, SetBudgetHandler, ShowStatusHandler,
    ShowWishlistHandler, UpdateWishlistHandler,
};
use crate::application::message::Message;
use crate::domain::dialog::Dialog;
use crate::domain::foundation::DomainError;

/// Every verb the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Create,
    Launch,
    Cancel,
    Finish,
    Status,
    Wishlist,
    GetWishlist,
    ResetWishlist,
    SetBudget,
    /// Messages without a command. Ignored.
    Blank,
}

impl Command {
    /// Runs the command. Rejections are reported to the chat here; only
    /// fatal errors escape.
    pub async fn process(
        self,
        ctx: &BotContext,
        message: &Message,
    ) -> Result<Option<Dialog>, DomainError> {
        let result = match self {
            Command::Help => HelpHandler::new(ctx.clone()).handle(message).await,
            Command::Create => CreateEventHandler::new(ctx.clone()).handle(message).await,
            Command::Launch => LaunchEventHandler::new(ctx.clone()).handle(message).await,
            Command::Cancel => CancelEventHandler::new(ctx.clone()).handle(message).await,
            Command::Finish => FinishEventHandler::new(ctx.clone()).handle(message).await,
            Command::Status => ShowStatusHandler::new(ctx.clone()).handle(message).await,
            Command::Wishlist => RequestWishlistHandler::new(ctx.clone()).handle(message).await,
            Command::GetWishlist => ShowWishlistHandler::new(ctx.clone()).handle(message).await,
            Command::ResetWishlist => ResetWishlistHandler::new(ctx.clone()).handle(message).await,
            Command::SetBudget => SetBudgetHandler::new(ctx.clone()).handle(message).await,
            Command::Blank => Ok(None),
        };
        settle(ctx, message, result).await
    }
}

/// Feeds `message` to the pending `dialog` of its chat.
pub async fn continue_dialog(
    dialog: Dialog,
    ctx: &BotContext,
    message: &Message,
) -> Result<Option<Dialog>, DomainError> {
    let result = match dialog {
        Dialog::AwaitingWishlist => UpdateWishlistHandler::new(ctx.clone()).handle(message).await,
    };
    settle(ctx, message, result).await
}

async fn settle(
    ctx: &BotContext,
    message: &Message,
    result: HandlerResult,
) -> Result<Option<Dialog>, DomainError> {
    match result {
        Ok(next) => Ok(next),
        Err(CommandError::Rejected(error)) => {
            tracing::debug!(%error, "Command rejected");
            ctx.output.send_error(message.chat.id, error).await?;
            Ok(None)
        }
        Err(CommandError::Fatal(error)) => Err(error),
    }
}

/// Maps command tokens to [`Command`]s.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
    fallback: Command,
}

impl CommandRegistry {
    /// An empty table answering every token with `fallback`.
    pub fn new(fallback: Command) -> Self {
        Self {
            commands: HashMap::new(),
            fallback,
        }
    }

    /// The bot's full command table; unknown commands get help.
    pub fn standard() -> Self {
        let mut registry = Self::new(Command::Help);
        registry
            .register("/start", Command::Help)
            .register("/help", Command::Help)
            .register("/create", Command::Create)
            .register("/launch", Command::Launch)
            .register("/cancel", Command::Cancel)
            .register("/finish", Command::Finish)
            .register("/status", Command::Status)
            .register("/wishlist", Command::Wishlist)
            .register("/get_wishlist", Command::GetWishlist)
            .register("/reset_wishlist", Command::ResetWishlist)
            .register("/set_budget", Command::SetBudget);
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, command: Command) -> &mut Self {
        self.commands.insert(name.into(), command);
        self
    }

    /// `None` (no command token) resolves to [`Command::Blank`].
    pub fn resolve(&self, name: Option<&str>) -> Command {
        match name {
            None => Command::Blank,
            Some(name) => self.commands.get(name).copied().unwrap_or(self.fallback),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
