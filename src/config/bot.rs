//! Bot configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Chat-facing configuration: keywords and the bot's mention identity.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Word that opens a new flow.
    #[serde(default = "default_trigger_keyword")]
    pub trigger_keyword: String,

    /// Word that abandons an active flow.
    #[serde(default = "default_cancel_keyword")]
    pub cancel_keyword: String,

    /// Identity the bot must be mentioned by in group threads.
    #[serde(default = "default_bot_id")]
    pub bot_id: String,
}

impl BotConfig {
    /// Validate bot configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trigger_keyword.trim().is_empty() {
            return Err(ValidationError::EmptyTriggerKeyword);
        }
        if self.cancel_keyword.trim().is_empty() {
            return Err(ValidationError::EmptyCancelKeyword);
        }
        if self.trigger_keyword.eq_ignore_ascii_case(&self.cancel_keyword) {
            return Err(ValidationError::KeywordsCollide);
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger_keyword: default_trigger_keyword(),
            cancel_keyword: default_cancel_keyword(),
            bot_id: default_bot_id(),
        }
    }
}

fn default_trigger_keyword() -> String {
    "!vagas".to_string()
}

fn default_cancel_keyword() -> String {
    "!cancelar".to_string()
}

fn default_bot_id() -> String {
    "vagabot".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = BotConfig::default();
        assert_eq!(config.trigger_keyword, "!vagas");
        assert_eq!(config.cancel_keyword, "!cancelar");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_keywords_are_rejected() {
        let config = BotConfig {
            trigger_keyword: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BotConfig {
            cancel_keyword: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn identical_keywords_are_rejected() {
        let config = BotConfig {
            trigger_keyword: "!x".to_string(),
            cancel_keyword: "!X".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
