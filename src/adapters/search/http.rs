//! HTTP Search Gateway - reqwest client for the job-search backend.
//!
//! The backend exposes a single JSON endpoint:
//!
//! ```text
//! POST {base_url}/buscar_vagas
//! {"cargo": "...", "localizacao": "...", "sites": [...], "quantidade": 20}
//! ```
//!
//! answering with a JSON array of preformatted posting strings. Failures of
//! any kind end the flow; there is no retry.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::SourceId;
use crate::ports::{SearchError, SearchGateway, SearchQuery};

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpSearchConfig {
    /// Backend base URL (e.g. `http://127.0.0.1:5000`).
    pub base_url: String,
    /// Request deadline; expiry is surfaced as `SearchError::Timeout`.
    pub timeout: Duration,
}

impl HttpSearchConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// SearchGateway implementation over HTTP.
pub struct HttpSearchGateway {
    config: HttpSearchConfig,
    client: Client,
}

impl HttpSearchGateway {
    pub fn new(config: HttpSearchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn search_url(&self) -> String {
        format!("{}/buscar_vagas", self.config.base_url.trim_end_matches('/'))
    }

    fn map_send_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if err.is_connect() {
            SearchError::network(format!("connection failed: {}", err))
        } else {
            SearchError::network(err.to_string())
        }
    }
}

#[async_trait]
impl SearchGateway for HttpSearchGateway {
    async fn search(&self, query: SearchQuery) -> Result<Vec<String>, SearchError> {
        let request = WireSearchRequest::from(&query);

        let response = self
            .client
            .post(self.search_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::status(status.as_u16(), body));
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }
}

/// Request body in the backend's wire vocabulary.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct WireSearchRequest {
    cargo: String,
    localizacao: String,
    sites: Vec<SourceId>,
    quantidade: u32,
}

impl From<&SearchQuery> for WireSearchRequest {
    fn from(query: &SearchQuery) -> Self {
        Self {
            cargo: query.job_title.clone(),
            localizacao: query.location.clone(),
            sites: query.sources.clone(),
            quantidade: query.max_results,
        }
    }
}
