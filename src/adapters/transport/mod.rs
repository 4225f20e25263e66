//! Chat Transport Adapters.
//!
//! Implementations of the ChatTransport port.
//!
//! - `ConsoleTransport` - stdout delivery for local terminal sessions
//! - `RecordingTransport` - captures the transcript for tests

mod console;
mod recording;

pub use console::ConsoleTransport;
pub use recording::{RecordingTransport, SentMessage};
