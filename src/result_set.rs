//! Parsing of the GSP (`xml_no_dtd`) response format
//!
//! The response is a `GSP` document: an optional `RES` block carrying the
//! match count, start/end indices and the result records, a list of `PARAM`
//! elements echoing the request parameters, and an optional spelling
//! suggestion. [`ResultSet::parse`] turns one document into a typed value;
//! everything else in this module is the serde shape of the wire format.

use crate::error::{SearchError, SearchResult as Result};
use serde::{Deserialize, Serialize};

/// One search result record, flattened from an `R` node.
///
/// Field text is preserved verbatim after entity decoding; Google embeds
/// `<b>` highlight markup in titles and excerpts and this layer does not
/// strip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Title of the matched page
    pub title: String,
    /// Snippet of the matched page, with query terms highlighted
    pub excerpt: String,
    /// URL of the matched page
    pub url: String,
}

/// A parsed page of search results with pagination accounting.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet {
    /// Estimated total number of matches across all pages
    pub total_entries: u64,
    /// Results on this page, in response order
    pub results: Vec<SearchResult>,
    /// Page size, recovered from the echoed `num` parameter
    pub per_page: u32,
    /// One-based index of the first result on this page (0 when empty)
    pub start_index: u64,
    /// One-based index of the last result on this page (0 when empty)
    pub end_index: u64,
    /// Spelling correction offered by the engine, if any
    pub suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Gsp {
    #[serde(rename = "RES")]
    res: Option<ResBlock>,
    #[serde(rename = "PARAM", default)]
    params: Vec<EchoedParam>,
    #[serde(rename = "Spelling")]
    spelling: Option<Spelling>,
}

#[derive(Debug, Deserialize)]
struct ResBlock {
    #[serde(rename = "M", default)]
    total: String,
    #[serde(rename = "SN", default)]
    start_index: String,
    #[serde(rename = "EN", default)]
    end_index: String,
    // A lone R element deserializes into a one-element Vec, so a
    // single-match response needs no special casing downstream.
    #[serde(rename = "R", default)]
    records: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "T", default)]
    title: String,
    #[serde(rename = "S", default)]
    excerpt: String,
    #[serde(rename = "U", default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct EchoedParam {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value", default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct Spelling {
    #[serde(rename = "Suggestion")]
    suggestion: Option<Suggestion>,
}

#[derive(Debug, Deserialize)]
struct Suggestion {
    #[serde(rename = "@q")]
    q: String,
}

/// Numeric fields in the response are coerced, never rejected: a missing or
/// garbled value degrades to 0 instead of failing the whole parse.
fn coerce_u64(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

impl ResultSet {
    /// Parse a raw response body.
    ///
    /// Fails with [`SearchError::InvalidXml`] when the body is not
    /// well-formed XML or is missing the echoed `num` parameter, which
    /// downstream pagination math depends on. A well-formed response with no
    /// `RES` block is a valid empty result set, not an error.
    pub fn parse(xml: &str) -> Result<Self> {
        let document: Gsp = quick_xml::de::from_str(xml)?;

        let per_page = document
            .params
            .iter()
            .find(|param| param.name == "num")
            .map(|param| coerce_u64(&param.value) as u32)
            .ok_or_else(|| {
                SearchError::InvalidXml("response is missing the echoed \"num\" parameter".into())
            })?;

        let suggestion = document
            .spelling
            .and_then(|spelling| spelling.suggestion)
            .map(|suggestion| suggestion.q);

        let (total_entries, start_index, end_index, results) = match document.res {
            Some(res) => (
                coerce_u64(&res.total),
                coerce_u64(&res.start_index),
                coerce_u64(&res.end_index),
                res.records
                    .into_iter()
                    .map(|record| SearchResult {
                        title: record.title,
                        excerpt: record.excerpt,
                        url: record.url,
                    })
                    .collect(),
            ),
            None => (0, 0, 0, Vec::new()),
        };

        Ok(Self {
            total_entries,
            results,
            per_page,
            start_index,
            end_index,
            suggestion,
        })
    }

    /// One-based number of the current page; 0 for an empty result set
    pub fn current_page(&self) -> u64 {
        div_ceil(self.start_index, u64::from(self.per_page))
    }

    /// Zero-based offset of the first result, clamped to 0 when the page is
    /// empty
    pub fn offset(&self) -> u64 {
        self.start_index.saturating_sub(1)
    }

    /// Total number of pages implied by the match count and page size
    pub fn total_pages(&self) -> u64 {
        div_ceil(self.total_entries, u64::from(self.per_page))
    }
}

fn div_ceil(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator)
}
