//! Error types for the domain layer.
//!
//! Two families that never mix:
//!
//! - [`UserError`] is the closed set of rule violations a user can be told
//!   about. Handlers report these to the originating chat.
//! - [`DomainError`] covers invariant breaches and infrastructure failures.
//!   Its contents are for operators; users only ever see
//!   [`UserError::InternalError`] in its place.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// User-facing rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum UserError {
    #[error("this chat has no active event")]
    NoEvent,

    #[error("this chat already has an event")]
    AlreadyHasEvent,

    #[error("caller is neither the event owner nor a chat administrator")]
    PermissionDenied,

    #[error("event is already launched")]
    EventAlreadyLaunched,

    #[error("event is not launched")]
    EventIsNotLaunched,

    #[error("event needs at least two participants")]
    NotEnoughUsers,

    #[error("some participants cannot receive private messages")]
    NotAuthorizedUser,

    #[error("command is available only in private chats")]
    NotPrivateChat,

    #[error("command expects arguments")]
    ArgumentExpected,

    #[error("internal error")]
    InternalError,
}

/// Error codes for defensive and infrastructure failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Invariant violations
    ParticipantNotFound,
    ParticipantsFrozen,
    UserNotFound,

    // Infrastructure errors
    StorageError,
    SerializationError,
    DeliveryFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ParticipantNotFound => "PARTICIPANT_NOT_FOUND",
            ErrorCode::ParticipantsFrozen => "PARTICIPANTS_FROZEN",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::DeliveryFailed => "DELIVERY_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Creates a delivery error.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DeliveryFailed, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::new(ErrorCode::SerializationError, err.to_string())
    }
}
