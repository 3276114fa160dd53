//! Output gateway adapters.
//!
//! - `console` - JSON lines on a writer, plain-text rendering
//! - `recording` - captures deliveries for tests

mod console;
mod recording;
mod render;

pub use console::ConsoleOutput;
pub use recording::{Delivery, RecordingOutput};
