//! Search backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Connection settings for the job-search backend.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request deadline in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Result-count cap sent with every query.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        // The backend caps searches at 30 results per request.
        if self.max_results == 0 || self.max_results > 30 {
            return Err(ValidationError::InvalidMaxResults);
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_results: default_max_results(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_results() -> u32 {
    20
}
