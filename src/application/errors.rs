//! Handler error type.

use thiserror::Error;

use crate::domain::dialog::Dialog;
use crate::domain::foundation::{DomainError, UserError};

/// Outcome of a failed handler.
///
/// `Rejected` is a rule violation reported back to the originating chat;
/// `Fatal` reaches the router and is shown only as an internal error.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("rejected: {0}")]
    Rejected(#[from] UserError),

    #[error(transparent)]
    Fatal(#[from] DomainError),
}

/// What a message handler returns: the chat's next dialog, if any.
pub type HandlerResult = Result<Option<Dialog>, CommandError>;
