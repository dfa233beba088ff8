//! Client configuration
//!
//! An explicit value object handed to [`CseClient::new`](crate::CseClient::new)
//! at construction time. There is no process-wide configuration; build a new
//! client to change settings (this also gives test isolation for free).

use crate::error::{SearchError, SearchResult};
use std::collections::BTreeMap;
use std::time::Duration;

/// Default read timeout for a search request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Default API host
pub const DEFAULT_HOST: &str = "www.google.com";

/// Configuration for the Custom Search client
#[derive(Debug, Clone)]
pub struct CseConfig {
    /// Custom Search Engine ID, sent as the `cx` request parameter
    pub cx: String,
    /// Extra request parameters merged into every request. A key that
    /// collides with one of the canonical keys overwrites it
    /// (last-writer-wins, deliberately not rejected).
    pub default_params: BTreeMap<String, String>,
    /// Use HTTPS on port 443; plain HTTP otherwise
    pub secure: bool,
    /// Read timeout enforced by the transport
    pub timeout: Duration,
    /// Verify the server certificate on secure connections. Disabling this
    /// is an explicit opt-in; the legacy client skipped verification
    /// unconditionally, which this port does not reproduce.
    pub verify_tls: bool,
    /// API host, overridable to point tests at a local mock server
    pub host: String,
}

impl Default for CseConfig {
    fn default() -> Self {
        Self {
            cx: String::new(),
            default_params: BTreeMap::new(),
            secure: true,
            timeout: DEFAULT_TIMEOUT,
            verify_tls: true,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl CseConfig {
    /// Create a configuration with the given engine ID and defaults for
    /// everything else
    pub fn new(cx: impl Into<String>) -> Self {
        Self {
            cx: cx.into(),
            ..Default::default()
        }
    }

    /// Add a default request parameter (builder style)
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_params.insert(key.into(), value.into());
        self
    }

    /// Validate the configuration. The URI builder itself never checks `cx`;
    /// this is the downstream check performed at client construction.
    pub fn validate(&self) -> SearchResult<()> {
        if self.cx.is_empty() {
            return Err(SearchError::Config(
                "Search Engine ID (cx) is required".to_string(),
            ));
        }
        if self.host.is_empty() {
            return Err(SearchError::Config("API host must not be empty".to_string()));
        }
        Ok(())
    }
}
