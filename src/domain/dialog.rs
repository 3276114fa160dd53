//! Pending multi-step conversations.

use serde::{Deserialize, Serialize};

/// What a chat's next message belongs to, when a command asked a follow-up
/// question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialog {
    /// The next message is the caller's new wishlist. Empty text clears it.
    AwaitingWishlist,
}
