//! Recording Chat Transport for testing.
//!
//! Captures every outbound text so tests can assert on the transcript, and
//! can be armed to fail sends for resilience tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::ConversationId;
use crate::ports::{ChatTransport, TransportError};

/// One captured outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: ConversationId,
    pub text: String,
}

/// ChatTransport implementation that records instead of delivering.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    fail_sends: Arc<Mutex<bool>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent send fail.
    pub fn fail_from_now_on(&self) {
        *self.fail_sends.lock().unwrap() = true;
    }

    /// All captured messages, in send order.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent to one conversation, in order.
    pub fn texts_to(&self, id: &ConversationId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|m| &m.to == id)
            .map(|m| m.text.clone())
            .collect()
    }

    /// The most recent text sent to one conversation.
    pub fn last_text_to(&self, id: &ConversationId) -> Option<String> {
        self.texts_to(id).pop()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_text(&self, to: &ConversationId, text: &str) -> Result<(), TransportError> {
        if *self.fail_sends.lock().unwrap() {
            return Err(TransportError::send_failed(to.clone(), "send disabled"));
        }
        self.sent.lock().unwrap().push(SentMessage {
            to: to.clone(),
            text: text.to_string(),
        });
        Ok(())
    }
}
