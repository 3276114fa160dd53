//! Application layer - handlers and the router that drives them.
//!
//! Handlers orchestrate the aggregates through the ports in [`BotContext`];
//! the [`Router`] feeds them one inbound update at a time.

pub mod context;
pub mod errors;
pub mod handlers;
pub mod message;
pub mod routing;

pub use context::BotContext;
pub use errors::{CommandError, HandlerResult};
pub use message::{Chat, ClickRequest, Message};
pub use routing::{Command, CommandRegistry, Router, Update};
