//! Event domain module.
//!
//! Handles the lifecycle of a Secret Santa exchange: registration, the
//! one-shot launch that assigns targets, and deletion on cancel or finish.

mod aggregate;
mod pairing;

pub use aggregate::{Event, Participant};
pub use pairing::{generate_pairs, Pairing};
