//! Chat authority adapters.

mod static_authority;

pub use static_authority::StaticChatAuthority;
