//! Conversation Store Adapters
//!
//! Implementations of the ConversationStore port.
//!
//! - `InMemoryConversationStore` - process-memory map; the flows are
//!   short-lived and do not survive restarts by design.

mod in_memory;

pub use in_memory::InMemoryConversationStore;
