//! Adapters - Implementations of port interfaces.
//!
//! - `authority` - chat administrator lookup
//! - `dialog` - pending dialog storage
//! - `output` - rendering and delivery (console, recording)
//! - `storage` - entity stores (JSON files, in-memory)

pub mod authority;
pub mod dialog;
pub mod output;
pub mod storage;

pub use authority::StaticChatAuthority;
pub use dialog::InMemoryDialogStore;
pub use output::{ConsoleOutput, Delivery, RecordingOutput};
pub use storage::{InMemoryEventRepository, InMemoryUserRepository, JsonFileStore};
