//! Wishlist handlers. All but the continuation require a private chat.

mod fanout;
mod request;
mod reset;
mod show;
mod update;

pub use request::RequestWishlistHandler;
pub use reset::ResetWishlistHandler;
pub use show::ShowWishlistHandler;
pub use update::UpdateWishlistHandler;
