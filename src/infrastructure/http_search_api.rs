//! [`SearchApi`] backed by the CLOMonitor HTTP API.
//!
//! Issues `GET {base}/projects/search` with paging, sort and filter
//! parameters. The body is a JSON array of projects; the total number of
//! matches comes back in the `Pagination-Total-Count` header.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    application::{
        ApplicationResult, dto::SearchRequest, error::ApplicationError,
        ports::search_api::SearchApi,
    },
    domain::project::{Project, ResultsPage},
};

pub const PAGINATION_TOTAL_COUNT: &str = "pagination-total-count";
const SEARCH_ENDPOINT: &str = "projects/search";

/// Errors from the search HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum SearchApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("search API error ({status}): {body}")]
    Status {
        status: u16,
        body: String,
    },

    #[error("response is missing the pagination-total-count header")]
    MissingTotalCount,

    #[error("invalid pagination-total-count header: {0}")]
    InvalidTotalCount(String),
}

impl From<SearchApiError> for ApplicationError {
    fn from(err: SearchApiError) -> Self {
        ApplicationError::infrastructure(err.to_string())
    }
}

pub struct HttpSearchApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchApi {
    /// Build a client for `base_url` (e.g. `https://clomonitor.io/api`) with
    /// a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SearchApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn search_url(&self, request: &SearchRequest) -> String {
        let query = serde_urlencoded::to_string(query_pairs(request)).unwrap_or_default();
        format!("{}/{SEARCH_ENDPOINT}?{query}", self.base_url)
    }

    async fn run(&self, request: &SearchRequest) -> Result<ResultsPage, SearchApiError> {
        let url = self.search_url(request);
        tracing::debug!(%url, "requesting search results");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let total_count = parse_total_count(response.headers())?;
        let items: Vec<Project> = response.json().await?;
        Ok(ResultsPage::new(items, total_count))
    }
}

#[async_trait]
impl SearchApi for HttpSearchApi {
    async fn search(&self, request: &SearchRequest) -> ApplicationResult<ResultsPage> {
        Ok(self.run(request).await?)
    }
}

/// Query parameters in the order the API documents them. Filter values are
/// sent as indexed keys, e.g. `maturity[0]=2`.
pub fn query_pairs(request: &SearchRequest) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("limit".to_string(), request.limit.to_string()),
        ("offset".to_string(), request.offset.to_string()),
        ("sort_by".to_string(), request.sort_by.to_string()),
        ("sort_direction".to_string(), request.sort_direction.to_string()),
    ];

    let scalars = [
        ("text", request.text.as_deref()),
        ("accepted_from", request.accepted_from.as_deref()),
        ("accepted_to", request.accepted_to.as_deref()),
    ];
    for (key, value) in scalars {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    push_indexed(&mut pairs, "category", &request.category);
    push_indexed(&mut pairs, "maturity", &request.maturity);
    push_indexed(&mut pairs, "rating", &request.rating);
    pairs
}

fn push_indexed<T: ToString>(pairs: &mut Vec<(String, String)>, key: &str, values: &[T]) {
    for (index, value) in values.iter().enumerate() {
        pairs.push((format!("{key}[{index}]"), value.to_string()));
    }
}

fn parse_total_count(headers: &reqwest::header::HeaderMap) -> Result<u64, SearchApiError> {
    let raw = headers
        .get(PAGINATION_TOTAL_COUNT)
        .ok_or(SearchApiError::MissingTotalCount)?;
    let raw = raw
        .to_str()
        .map_err(|_| SearchApiError::InvalidTotalCount("non-ascii value".into()))?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| SearchApiError::InvalidTotalCount(raw.to_string()))
}
