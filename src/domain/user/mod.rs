//! User domain module.
//!
//! Users carry a display name, the private channel the bot can notify them
//! on, a free-text wishlist, and the index of events they take part in.

mod aggregate;

pub use aggregate::User;
