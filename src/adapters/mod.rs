//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `store` - Conversation state keeping (in-memory)
//! - `search` - Job-search backend (HTTP, mock)
//! - `transport` - Chat delivery (console, recording)

pub mod search;
pub mod store;
pub mod transport;

pub use search::{HttpSearchConfig, HttpSearchGateway, MockSearchGateway};
pub use store::InMemoryConversationStore;
pub use transport::{ConsoleTransport, RecordingTransport, SentMessage};
