//! In-Memory Conversation Store Adapter
//!
//! Keeps dialogue state in process memory. This is the production store:
//! flows are short-lived and deliberately do not survive a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{ConversationId, ConversationState};
use crate::ports::{ConversationStore, ConversationStoreError};

/// In-memory storage for per-conversation dialogue state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    states: Arc<RwLock<HashMap<ConversationId, ConversationState>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active flows (useful for tests).
    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.states.read().await.is_empty()
    }

    /// Clears all stored state (useful for tests).
    pub async fn clear(&self) {
        self.states.write().await.clear();
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn load(&self, id: &ConversationId) -> Result<ConversationState, ConversationStoreError> {
        let states = self.states.read().await;
        states
            .get(id)
            .cloned()
            .ok_or_else(|| ConversationStoreError::NotFound(id.clone()))
    }

    async fn save(&self, state: &ConversationState) -> Result<(), ConversationStoreError> {
        let mut states = self.states.write().await;
        states.insert(state.conversation_id.clone(), state.clone());
        Ok(())
    }

    async fn delete(&self, id: &ConversationId) -> Result<(), ConversationStoreError> {
        self.states.write().await.remove(id);
        Ok(())
    }

    async fn exists(&self, id: &ConversationId) -> Result<bool, ConversationStoreError> {
        Ok(self.states.read().await.contains_key(id))
    }
}
