//! Chat Transport Port - Interface to the messaging network.
//!
//! The transport library owns connection, delivery and identity; the bot
//! only needs "send text to thread X" plus the incoming event shape.

use async_trait::async_trait;

use crate::domain::ConversationId;

/// One inbound chat event as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub conversation_id: ConversationId,
    /// True for group threads, false for one-to-one chats.
    pub is_group: bool,
    pub text: String,
    /// Identifiers mentioned in the message (group mentions).
    pub mentioned_ids: Vec<String>,
    /// True when the event echoes a message the bot itself sent.
    pub sender_is_self: bool,
}

impl IncomingMessage {
    /// Direct-chat message with no mentions.
    pub fn direct(conversation_id: impl Into<ConversationId>, text: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            is_group: false,
            text: text.into(),
            mentioned_ids: Vec::new(),
            sender_is_self: false,
        }
    }

    /// Group-chat message with the given mention list.
    pub fn group(
        conversation_id: impl Into<ConversationId>,
        text: impl Into<String>,
        mentioned_ids: Vec<String>,
    ) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            is_group: true,
            text: text.into(),
            mentioned_ids,
            sender_is_self: false,
        }
    }
}

/// Errors surfaced by the transport when sending.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to deliver message to {conversation_id}: {reason}")]
    SendFailed {
        conversation_id: ConversationId,
        reason: String,
    },
}

impl TransportError {
    pub fn send_failed(conversation_id: ConversationId, reason: impl Into<String>) -> Self {
        Self::SendFailed {
            conversation_id,
            reason: reason.into(),
        }
    }
}

/// Port for sending text back into a chat thread.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_text(&self, to: &ConversationId, text: &str) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_constructor_sets_flags() {
        let msg = IncomingMessage::direct("chat-1", "!vagas");
        assert!(!msg.is_group);
        assert!(!msg.sender_is_self);
        assert!(msg.mentioned_ids.is_empty());
    }

    #[test]
    fn group_constructor_keeps_mentions() {
        let msg = IncomingMessage::group("group-1", "!vagas", vec!["vagabot".to_string()]);
        assert!(msg.is_group);
        assert_eq!(msg.mentioned_ids, vec!["vagabot".to_string()]);
    }

    #[test]
    fn send_failed_names_the_thread() {
        let err = TransportError::send_failed(ConversationId::new("chat-9"), "socket closed");
        assert!(err.to_string().contains("chat-9"));
        assert!(err.to_string().contains("socket closed"));
    }
}
