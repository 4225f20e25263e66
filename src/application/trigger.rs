//! Trigger detection: does this message start a new flow?

use crate::ports::IncomingMessage;

/// Decides whether an inbound message opens a new guided search.
///
/// A message never triggers while a flow is active (it is that flow's
/// answer). Otherwise the trimmed text must equal the trigger keyword,
/// case-insensitively; in group threads the bot must also be mentioned,
/// so casual keyword use between members does not wake it.
#[derive(Debug, Clone)]
pub struct TriggerDetector {
    keyword: String,
    bot_id: String,
}

impl TriggerDetector {
    pub fn new(keyword: impl Into<String>, bot_id: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            bot_id: bot_id.into(),
        }
    }

    pub fn should_trigger(&self, message: &IncomingMessage, flow_active: bool) -> bool {
        if flow_active {
            return false;
        }
        if message.text.trim().to_lowercase() != self.keyword {
            return false;
        }
        if message.is_group {
            return message.mentioned_ids.iter().any(|id| id == &self.bot_id);
        }
        true
    }
}
