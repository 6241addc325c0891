//! HTTP client for the politician search API.

use async_trait::async_trait;
use thiserror::Error;

use super::query::SearchQuery;
use super::types::SearchResponse;

/// Why a search request produced no usable response.
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// Connection, TLS or body read failed
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Network response was not ok (status {status})")]
    Status { status: u16 },

    /// Body was not JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced to the user by a search submission.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Input was empty after trimming; no request is made
    #[error("Please enter a politician name to search.")]
    EmptyQuery,

    /// The request was made and failed
    #[error("Error fetching results: {0}")]
    Failed(#[from] RequestFailure),
}

/// Trait for the search API.
///
/// Use `HttpSearchClient` for real HTTP calls, or
/// `mock::MockSearchClient` in tests.
#[async_trait]
pub trait PoliticianSearchClient: Send + Sync {
    /// Search politicians by (partial) name.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, RequestFailure>;
}

/// HTTP-based implementation of `PoliticianSearchClient`.
pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for a query.
    #[must_use]
    pub fn url_for(&self, query: &SearchQuery) -> String {
        format!("{}{}", self.base_url, query.path())
    }
}

#[async_trait]
impl PoliticianSearchClient for HttpSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, RequestFailure> {
        let url = self.url_for(query);
        tracing::debug!(%url, "sending search request");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailure::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!(count = ?parsed.count, "search response received");
        Ok(parsed)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{PoliticianSearchClient, RequestFailure, SearchQuery, SearchResponse};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock implementation of `PoliticianSearchClient`.
    ///
    /// Queue responses with `push_result` and verify calls with `calls()`.
    /// Once the queue is empty every search answers with an empty result set.
    pub struct MockSearchClient {
        results: Mutex<VecDeque<Result<SearchResponse, RequestFailure>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockSearchClient {
        pub fn new() -> Self {
            Self {
                results: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Queue the result for the next `search` call.
        pub fn push_result(&self, result: Result<SearchResponse, RequestFailure>) {
            self.results.lock().unwrap().push_back(result);
        }

        /// All (trimmed) queries passed to `search`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockSearchClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PoliticianSearchClient for MockSearchClient {
        async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, RequestFailure> {
            self.calls.lock().unwrap().push(query.as_str().to_string());

            self.results.lock().unwrap().pop_front().unwrap_or_else(|| {
                Ok(SearchResponse {
                    message: format!("No data found for '{query}'"),
                    count: Some(0),
                    results: Vec::new(),
                })
            })
        }
    }
}
