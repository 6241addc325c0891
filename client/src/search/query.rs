use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::client::SearchError;

/// Characters left as-is when encoding a URI component: ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A validated search query: trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the raw input and reject it if nothing is left.
    ///
    /// # Errors
    /// Returns [`SearchError::EmptyQuery`] for empty or whitespace-only input.
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Request path for this query.
    ///
    /// The query is a literal path segment (`/query=John%20Doe`), not a
    /// query-string parameter. Encoding matches JavaScript's
    /// `encodeURIComponent`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/query={}", utf8_percent_encode(&self.0, URI_COMPONENT))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
