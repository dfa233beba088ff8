//! Search options and canonical request-URI construction
//!
//! [`build_search_url`] is a pure function from (query, options, config) to a
//! URI string. Parameter order is sorted by key so tests can compare whole
//! URI strings.

use crate::config::CseConfig;
use std::collections::BTreeMap;

/// Default zero-based offset of the first requested result
pub const DEFAULT_OFFSET: u64 = 0;

/// Default number of results per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A pagination scalar accepted either as an integer or as a numeric string.
///
/// Callers frequently hold these values as untrusted strings (query-string
/// echoes, form input); coercion never panics and falls back to the field's
/// default on non-numeric input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(i64),
    Text(String),
}

impl Param {
    fn as_i64(&self) -> Option<i64> {
        match self {
            Param::Int(n) => Some(*n),
            Param::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Param::Int(n)
    }
}

impl From<u32> for Param {
    fn from(n: u32) -> Self {
        Param::Int(n as i64)
    }
}

impl From<i32> for Param {
    fn from(n: i32) -> Self {
        Param::Int(n as i64)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Text(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Text(s)
    }
}

/// Pagination options for a search request.
///
/// All fields default to `None`, which resolves to offset 0 and ten results
/// per page. When `page` is set it always wins over `offset`:
/// `offset = (max(page, 1) - 1) * per_page`.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Zero-based index of the first result to return
    pub offset: Option<Param>,
    /// Number of results per page
    pub per_page: Option<Param>,
    /// One-based page number; overrides `offset` when present
    pub page: Option<Param>,
}

impl SearchOptions {
    /// Request a specific page with the default page size
    pub fn page(page: impl Into<Param>) -> Self {
        Self {
            page: Some(page.into()),
            ..Default::default()
        }
    }

    /// Effective page size after coercion; invalid or non-positive input
    /// falls back to the default
    pub fn resolved_per_page(&self) -> u32 {
        self.per_page
            .as_ref()
            .and_then(Param::as_i64)
            .filter(|n| *n > 0)
            .map(|n| n as u32)
            .unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Effective offset after coercion. A present `page` overrides any
    /// caller-supplied offset; pages below 1 normalize to 1.
    pub fn resolved_offset(&self) -> u64 {
        if let Some(page) = &self.page {
            let page = page.as_i64().unwrap_or(1).max(1) as u64;
            return (page - 1) * u64::from(self.resolved_per_page());
        }
        self.offset
            .as_ref()
            .and_then(Param::as_i64)
            .filter(|n| *n >= 0)
            .map(|n| n as u64)
            .unwrap_or(DEFAULT_OFFSET)
    }
}

/// Build the canonical search URI for a query.
///
/// The fixed keys `q`, `start`, `num`, `client`, `output` and `cx` are always
/// present; `config.default_params` is merged on top, so a configured default
/// that collides with a fixed key overwrites it (last-writer-wins). A missing
/// `cx` is passed through untouched; [`CseConfig::validate`] is the place
/// that rejects it.
pub fn build_search_url(query: &str, options: &SearchOptions, config: &CseConfig) -> String {
    let mut params: BTreeMap<String, String> = BTreeMap::new();
    params.insert("q".to_string(), query.to_string());
    params.insert("start".to_string(), options.resolved_offset().to_string());
    params.insert("num".to_string(), options.resolved_per_page().to_string());
    params.insert("client".to_string(), "google-csbe".to_string());
    params.insert("output".to_string(), "xml_no_dtd".to_string());
    params.insert("cx".to_string(), config.cx.clone());

    for (key, value) in &config.default_params {
        params.insert(key.clone(), value.clone());
    }

    let query_string = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();

    // Port 443 is pinned explicitly on secure connections, matching the
    // service's documented endpoint; plain HTTP leaves the port implied.
    let base = if config.secure {
        format!("https://{}:443/cse", config.host)
    } else {
        format!("http://{}/cse", config.host)
    };

    format!("{base}?{query_string}")
}
