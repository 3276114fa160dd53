//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventRepository`, `UserRepository` - entity store
//! - `OutputGateway` - rendering and delivery of responses
//! - `ChatAuthority` - chat administrator lookup
//! - `DialogStore` - pending continuations per chat

mod chat_authority;
mod dialog_store;
mod event_repository;
mod output_gateway;
mod user_repository;

pub use chat_authority::ChatAuthority;
pub use dialog_store::DialogStore;
pub use event_repository::EventRepository;
pub use output_gateway::{ClickResponse, EventStatus, InfoNotice, OutputGateway, TOGGLE_PAYLOAD};
pub use user_repository::UserRepository;
