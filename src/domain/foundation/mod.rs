//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the event lifecycle enum, timestamps and error
//! types that form the vocabulary of the Secret Santa domain.

mod errors;
mod event_state;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, UserError};
pub use event_state::EventState;
pub use ids::{CallbackId, ChatId, EventId, MessageId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
