//! Application handlers.
//!
//! One handler per user-facing verb. Message handlers return the chat's next
//! dialog; rule violations come back as [`CommandError::Rejected`].
//!
//! [`CommandError::Rejected`]: crate::application::errors::CommandError::Rejected

pub mod event;
pub mod help;
pub mod wishlist;

mod guards;

#[cfg(test)]
pub(crate) mod test_support;

pub use event::{
    CancelEventHandler, CreateEventHandler, FinishEventHandler, LaunchEventHandler,
    SetBudgetHandler, ShowStatusHandler, ToggleParticipationHandler, MIN_PARTICIPANTS,
};
pub use help::HelpHandler;
pub use wishlist::{
    RequestWishlistHandler, ResetWishlistHandler, ShowWishlistHandler, UpdateWishlistHandler,
};
