//! Dialog store adapters.

mod in_memory;

pub use in_memory::InMemoryDialogStore;
