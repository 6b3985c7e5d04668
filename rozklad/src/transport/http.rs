//! Reqwest-backed transport.

use std::collections::BTreeMap;

use super::Transport;
use super::error::TransportError;

/// Default base URL for the journey planner.
const DEFAULT_BASE_URL: &str = "http://rozklad-pkp.pl";

/// How much of an error response body to keep in the error message.
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for the remote host (defaults to production).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl TransportConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the journey planner host.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<String, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, params = query.len(), "issuing GET");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        Ok(response.text().await?)
    }
}
