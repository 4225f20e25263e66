//! Conversation Store Port - Interface for keeping in-progress dialogues.
//!
//! The store owns the one-state-per-conversation invariant: states are
//! created by the trigger path, replaced by the dispatcher, and deleted on
//! completion, cancellation or unrecoverable error. Implementations may be
//! volatile or backed by external storage; the dispatcher does not care.

use async_trait::async_trait;

use crate::domain::{ConversationId, ConversationState};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum ConversationStoreError {
    #[error("no active conversation for {0}")]
    NotFound(ConversationId),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Port for persisting and loading per-conversation dialogue state.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Loads the state for a conversation.
    ///
    /// # Errors
    /// Returns `ConversationStoreError::NotFound` if no flow is active.
    async fn load(&self, id: &ConversationId) -> Result<ConversationState, ConversationStoreError>;

    /// Saves (creates or replaces) the state for a conversation.
    async fn save(&self, state: &ConversationState) -> Result<(), ConversationStoreError>;

    /// Deletes the state for a conversation. Deleting an absent state is not
    /// an error.
    async fn delete(&self, id: &ConversationId) -> Result<(), ConversationStoreError>;

    /// Checks whether a flow is active for a conversation.
    async fn exists(&self, id: &ConversationId) -> Result<bool, ConversationStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_names_the_conversation() {
        let err = ConversationStoreError::NotFound(ConversationId::new("chat-7"));
        assert!(err.to_string().contains("chat-7"));
    }

    #[test]
    fn storage_error_carries_detail() {
        let err = ConversationStoreError::Storage("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}
