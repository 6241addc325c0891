//! Politician search: query validation, the HTTP client and dispatch.
//!
//! # Architecture
//!
//! - [`SearchQuery`] - A trimmed, non-empty query and its request path
//! - [`PoliticianSearchClient`] - Trait defining the one API operation
//! - [`HttpSearchClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockSearchClient`] - Recording mock (behind `test-utils` feature)
//! - [`dispatch`] / [`fetch`] - Awaitable entry points returning a `Result`
//!
//! # Example
//!
//! ```ignore
//! use politician_search::search::{dispatch, HttpSearchClient};
//!
//! let client = HttpSearchClient::new("http://localhost:8000");
//! let response = dispatch(&client, "  John Doe ").await?;
//! println!("{}", response.message);
//! ```

mod client;
mod dispatch;
mod lenient;
mod query;
mod types;

pub use client::{HttpSearchClient, PoliticianSearchClient, RequestFailure, SearchError};
pub use dispatch::{dispatch, fetch};
pub use query::SearchQuery;
pub use types::{PoliticianName, PoliticianRecord, SearchResponse, TermRecord};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
