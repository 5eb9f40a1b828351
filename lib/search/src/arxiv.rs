//! arXiv query API client.
//!
//! Issues one bounded `GET` per call and parses the Atom response with
//! [`parse_feed`](crate::atom::parse_feed).

use crate::atom::parse_feed;
use crate::error::{Result, SearchError};
use async_trait::async_trait;
use paperrank_core::{CandidatePaper, PaperSource, ServiceConfig, SortBy, SortOrder};
use reqwest::Client;
use tracing::debug;

/// Client for the arXiv `api/query` endpoint.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    client: Client,
    endpoint: String,
}

impl ArxivClient {
    /// Create a client for the given query endpoint
    /// (e.g. `http://export.arxiv.org/api/query`).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.search_endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch up to `max_results` papers matching `query`, starting at offset 0.
    ///
    /// # Errors
    /// - [`SearchError::Transport`] if the request could not be completed
    /// - [`SearchError::Status`] on a non-success status
    /// - [`SearchError::Parse`] if the body is not a usable Atom feed
    pub async fn fetch_candidates(
        &self,
        query: &str,
        max_results: u32,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> Result<Vec<CandidatePaper>> {
        let max_results = max_results.to_string();
        let params = [
            ("search_query", query),
            ("max_results", max_results.as_str()),
            ("start", "0"),
            ("sortBy", sort_by.as_str()),
            ("sortOrder", sort_order.as_str()),
        ];

        debug!("GET {} {:?}", self.endpoint, params);
        let response = self.client.get(&self.endpoint).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let papers = parse_feed(&body)?;
        debug!("arXiv returned {} entries", papers.len());
        Ok(papers)
    }
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn fetch_candidates(
        &self,
        query: &str,
        max_results: u32,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> paperrank_core::Result<Vec<CandidatePaper>> {
        Ok(ArxivClient::fetch_candidates(self, query, max_results, sort_by, sort_order).await?)
    }

    fn name(&self) -> &str {
        "arxiv"
    }
}
