//! Strongly-typed identifier value objects.
//!
//! Both ids are opaque strings issued by external systems: conversation ids
//! come from the chat transport (a user or group thread key), source ids are
//! the site identifiers the search backend expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a chat thread (direct or group) with the bot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Creates a ConversationId from the transport's thread key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a job-listing site as the search backend knows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Creates a SourceId from the backend's site identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_id_roundtrips_as_string() {
        let id = ConversationId::new("5521999999999@s.whatsapp.net");
        assert_eq!(id.as_str(), "5521999999999@s.whatsapp.net");
        assert_eq!(id.to_string(), "5521999999999@s.whatsapp.net");
    }

    #[test]
    fn source_id_serializes_transparently() {
        let id = SourceId::new("gupy.io");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gupy.io\"");
    }

    #[test]
    fn ids_with_same_key_are_equal() {
        assert_eq!(ConversationId::new("a"), ConversationId::from("a"));
        assert_ne!(ConversationId::new("a"), ConversationId::new("b"));
    }
}
