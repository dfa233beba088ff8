//! HTTP transport
//!
//! The client core only needs `fetch(uri) -> body | error`; [`Transport`] is
//! that seam, and [`HttpTransport`] is the reqwest-backed implementation used
//! by default. Tests inject their own implementation instead of standing up
//! a server.

use crate::config::CseConfig;
use crate::error::{SearchError, SearchResult};
use async_trait::async_trait;

/// User-Agent header sent with every request
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " - ",
    env!("CARGO_PKG_REPOSITORY"),
    " (rust)"
);

/// Black-box fetch collaborator: one URI in, one body or error out
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn fetch(&self, url: &str) -> SearchResult<String>;
}

/// reqwest-backed transport with the configured timeout and TLS policy
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout_ms: u64,
}

impl HttpTransport {
    pub fn new(config: &CseConfig) -> SearchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout_ms: config.timeout.as_millis() as u64,
        })
    }

    fn map_transport_error(&self, error: reqwest::Error) -> SearchError {
        if error.is_timeout() {
            SearchError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            SearchError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> SearchResult<String> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status().as_u16();
        match status {
            200..=299 => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| self.map_transport_error(e))?;
                log::debug!("received {} byte response", body.len());
                Ok(body)
            }
            300..=499 => Err(SearchError::InvalidRequest { status }),
            500..=599 => Err(SearchError::ServerError { status }),
            _ => Err(SearchError::Transport(format!(
                "unexpected response status {status}"
            ))),
        }
    }
}
