//! Console Chat Transport.
//!
//! Prints outbound messages to stdout so the whole flow can be exercised
//! from a terminal session without a real chat network.

use async_trait::async_trait;

use crate::domain::ConversationId;
use crate::ports::{ChatTransport, TransportError};

/// ChatTransport implementation that writes to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_text(&self, to: &ConversationId, text: &str) -> Result<(), TransportError> {
        println!("[{}]\n{}\n", to, text);
        Ok(())
    }
}
