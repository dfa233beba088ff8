//! The search client: build URI, fetch, parse

use crate::config::CseConfig;
use crate::error::SearchResult;
use crate::request::{build_search_url, SearchOptions};
use crate::result_set::ResultSet;
use crate::transport::{HttpTransport, Transport};

/// Client for one Custom Search engine.
///
/// Construction validates the configuration; each [`search`](Self::search)
/// call is one linear pipeline with no retries and no shared mutable state,
/// so a client can be used concurrently from multiple tasks.
#[derive(Debug)]
pub struct CseClient {
    config: CseConfig,
    transport: Box<dyn Transport>,
}

impl CseClient {
    /// Create a client with the default HTTP transport
    pub fn new(config: CseConfig) -> SearchResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            config,
            transport: Box::new(transport),
        })
    }

    /// Create a client with an injected transport (used by tests)
    pub fn with_transport(config: CseConfig, transport: Box<dyn Transport>) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &CseConfig {
        &self.config
    }

    /// Run one search: build the canonical URI, fetch the body, parse it
    pub async fn search(&self, query: &str, options: &SearchOptions) -> SearchResult<ResultSet> {
        let url = build_search_url(query, options, &self.config);
        log::debug!("search request: {url}");

        let body = self.transport.fetch(&url).await?;
        let result_set = ResultSet::parse(&body)?;

        log::debug!(
            "parsed {} results of {} total matches",
            result_set.results.len(),
            result_set.total_entries
        );
        Ok(result_set)
    }
}
