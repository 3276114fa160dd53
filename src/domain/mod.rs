//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, lifecycle state, errors)
//! - `dialog` - Pending multi-step conversations
//! - `event` - Event aggregate and the pairing generator
//! - `user` - User aggregate

pub mod dialog;
pub mod event;
pub mod foundation;
pub mod user;
