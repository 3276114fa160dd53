//! Entity store adapters.

mod in_memory;
mod json_file_store;

pub use in_memory::{InMemoryEventRepository, InMemoryUserRepository};
pub use json_file_store::JsonFileStore;
