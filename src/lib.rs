//! # google-cse
//!
//! A Rust client for the Google Custom Search Engine XML API (the
//! `xml_no_dtd` output format). It builds a canonical search URI from
//! pagination options, issues the request, and parses the GSP response into
//! a typed [`ResultSet`] with derived pagination metadata.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use google_cse::{CseClient, CseConfig, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CseConfig::new("YOUR_SEARCH_ENGINE_ID").with_param("ie", "utf8");
//!     let client = CseClient::new(config)?;
//!
//!     let page = client.search("raspberry", &SearchOptions::page(2)).await?;
//!
//!     println!(
//!         "page {} of {} ({} matches)",
//!         page.current_page(),
//!         page.total_pages(),
//!         page.total_entries
//!     );
//!     for result in &page.results {
//!         println!("{}: {}", result.title, result.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod result_set;
pub mod transport;

// Re-export common types
pub use client::CseClient;
pub use config::CseConfig;
pub use error::{SearchError, SearchResult as Result};
pub use request::{Param, SearchOptions};
pub use result_set::{ResultSet, SearchResult};
pub use transport::Transport;

/// One-shot search: builds a throwaway client for `config` and runs a single
/// query. Prefer holding a [`CseClient`] when issuing more than one request.
pub async fn search(
    query: &str,
    options: &SearchOptions,
    config: CseConfig,
) -> Result<ResultSet> {
    let client = CseClient::new(config)?;
    client.search(query, options).await
}
