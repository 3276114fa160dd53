//! Inbound update routing: parsing, command table, dialogs and buttons.

mod button;
mod command;
mod parser;
mod router;
mod update;

pub use button::Button;
pub use command::{continue_dialog, Command, CommandRegistry};
pub use parser::{CommandParser, ParsedText};
pub use router::Router;
pub use update::{ChatKind, InboundChat, IncomingClick, IncomingMessage, Sender, Update};
