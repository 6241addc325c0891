//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - Stubbed search API built on `wiremock`
//! - [`fixtures`] - Response bodies shaped like the real search service's

#![allow(dead_code)]

pub mod http_mock;

pub mod fixtures {
    use serde_json::{json, Value};

    /// Two records as the search service returns them: full upstream records
    /// plus the `data_source` it adds.
    pub fn two_results() -> Value {
        json!({
            "message": "Found 2 results for 'alexander'",
            "count": 2,
            "results": [
                {
                    "id": {"bioguide": "A000360", "govtrack": 300002},
                    "name": {"first": "Lamar", "last": "Alexander", "official_full": "Lamar Alexander"},
                    "bio": {"birthday": "1940-07-03", "gender": "M"},
                    "terms": [
                        {"type": "sen", "start": "2003-01-07", "end": "2009-01-03", "state": "TN", "party": "Republican"},
                        {"type": "sen", "start": "2015-01-06", "end": "2021-01-03", "state": "TN", "party": "Republican"}
                    ],
                    "data_source": "legislators-historical"
                },
                {
                    "id": {"bioguide": "X000001"},
                    "name": {"first": "Jane"},
                    "data_source": "legislators-social-media"
                }
            ]
        })
    }

    pub fn no_results(query: &str) -> Value {
        json!({
            "message": format!("No data found for '{query}'"),
            "count": 0,
            "results": []
        })
    }
}
