//! Search Gateway Port - Interface to the external job-search backend.
//!
//! The backend receives the collected criteria and answers with preformatted
//! posting strings. The bot never interprets result contents; they are
//! relayed verbatim.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::SourceId;

/// Collected criteria for one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub job_title: String,
    pub location: String,
    pub sources: Vec<SourceId>,
    pub max_results: u32,
}

impl SearchQuery {
    pub fn new(
        job_title: impl Into<String>,
        location: impl Into<String>,
        sources: Vec<SourceId>,
        max_results: u32,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            location: location.into(),
            sources,
            max_results,
        }
    }
}

/// Search backend errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request did not complete within the configured deadline.
    #[error("search timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Connection-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, body: String },

    /// Backend answered 2xx but the body was not a JSON string array.
    #[error("malformed backend response: {0}")]
    Parse(String),
}

impl SearchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Port for running a search against the external backend.
///
/// One attempt per flow: callers surface a failure to the user and tear the
/// conversation down rather than retrying.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, query: SearchQuery) -> Result<Vec<String>, SearchError>;
}
