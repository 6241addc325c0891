//! Data types for search API responses.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Body of a successful `/query=` response.
///
/// Decoding never fails on shape: missing or wrong-typed fields fall back
/// to empty values. `count` is expected to equal `results.len()` but nothing
/// checks it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    /// Human-readable summary, e.g. "Found 2 results for 'john'"
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,
    /// Number of results reported by the server, if it sent a usable one
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: Option<u64>,
    /// Matching records, in server order
    #[serde(default, deserialize_with = "lenient::records")]
    pub results: Vec<PoliticianRecord>,
}

/// A single politician record. Fields not listed here are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoliticianRecord {
    #[serde(default, deserialize_with = "lenient::object")]
    pub name: Option<PoliticianName>,
    /// Dataset the record came from (e.g. "legislators-current")
    #[serde(default, deserialize_with = "lenient::text")]
    pub data_source: String,
    /// Terms served, oldest first. Only the last one is displayed; entries
    /// that are not objects are kept as `None`.
    #[serde(default, deserialize_with = "lenient::array_of_objects")]
    pub terms: Option<Vec<Option<TermRecord>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoliticianName {
    #[serde(default, deserialize_with = "lenient::string")]
    pub first: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermRecord {
    /// Position held, e.g. "sen" or "rep"
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub kind: Option<String>,
    /// State abbreviation (e.g. "TN")
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: Option<String>,
}

/// Treat empty strings the same as missing values.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl PoliticianRecord {
    /// First name, or `""` when the name or the field is missing.
    #[must_use]
    pub fn first_name(&self) -> &str {
        non_empty(self.name.as_ref().and_then(|n| n.first.as_deref())).unwrap_or("")
    }

    /// Last name, or `""` when the name or the field is missing.
    #[must_use]
    pub fn last_name(&self) -> &str {
        non_empty(self.name.as_ref().and_then(|n| n.last.as_deref())).unwrap_or("")
    }

    /// The last entry of `terms`, if present, non-empty and an object.
    #[must_use]
    pub fn latest_term(&self) -> Option<&TermRecord> {
        self.terms
            .as_ref()
            .and_then(|terms| terms.last())
            .and_then(Option::as_ref)
    }
}

impl TermRecord {
    #[must_use]
    pub fn kind_or_na(&self) -> &str {
        non_empty(self.kind.as_deref()).unwrap_or("N/A")
    }

    #[must_use]
    pub fn state_or_na(&self) -> &str {
        non_empty(self.state.as_deref()).unwrap_or("N/A")
    }
}
