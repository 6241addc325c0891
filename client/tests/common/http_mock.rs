//! HTTP mock server helpers for testing the search client.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_search() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/query=John%20Doe")
//!         .respond_with_json(json!({"message": "...", "count": 0, "results": []}))
//!         .mount()
//!         .await;
//!
//!     let client = HttpSearchClient::new(server.url());
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`
//!
//! Paths are matched as sent, so percent-encoded segments must be written
//! encoded (`/query=John%20Doe`).

use std::time::Duration;

use serde_json::Value;
pub use wiremock::matchers::{method, path};
pub use wiremock::MockServer as WiremockServer;
pub use wiremock::{Mock, ResponseTemplate};

pub struct MockHttpServer {
    server: WiremockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: WiremockServer::start().await,
        }
    }

    /// Base URL of the mock server, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Underlying `wiremock` server for matchers this wrapper does not cover.
    pub fn inner(&self) -> &WiremockServer {
        &self.server
    }

    pub fn expect_get(&self, request_path: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            path: request_path.to_string(),
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }

    /// Panics if any `expect_times` expectation was not met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }
}

enum StubBody {
    Json(Value),
    Raw(String),
}

pub struct StubBuilder<'a> {
    server: &'a WiremockServer,
    path: String,
    status: u16,
    body: Option<StubBody>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(StubBody::Json(body));
        self
    }

    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(StubBody::Raw(body.into()));
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut template = ResponseTemplate::new(self.status);
        template = match self.body {
            Some(StubBody::Json(value)) => template.set_body_json(value),
            Some(StubBody::Raw(text)) => template.set_body_string(text),
            None => template,
        };
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = Mock::given(method("GET"))
            .and(path(self.path.as_str()))
            .respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
