//! Error types for the Custom Search client

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Error surface of the client; every variant is terminal for the call
/// that produced it (no internal retries).
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    /// The server rejected or redirected the request (HTTP 300-499)
    #[error("invalid request: server responded with status {status}")]
    InvalidRequest { status: u16 },

    /// The server failed to handle the request (HTTP 500-599)
    #[error("server error: status {status}")]
    ServerError { status: u16 },

    /// The transport gave up waiting for a response
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The response body is not parseable as the expected XML shape
    #[error("invalid XML response: {0}")]
    InvalidXml(String),

    /// Configuration rejected at client construction
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure other than a timeout (DNS, connection refused, TLS)
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SearchError::Timeout {
                timeout_ms: crate::config::DEFAULT_TIMEOUT.as_millis() as u64,
            }
        } else {
            SearchError::Transport(error.to_string())
        }
    }
}

impl From<quick_xml::DeError> for SearchError {
    fn from(error: quick_xml::DeError) -> Self {
        SearchError::InvalidXml(error.to_string())
    }
}
