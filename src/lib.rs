//! Secret Santa Bot - gift exchanges organized inside group chats.
//!
//! Participants join an event in their group, the organizer launches it and
//! every participant privately learns whom to buy a present for.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
