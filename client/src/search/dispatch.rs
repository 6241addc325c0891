use super::client::{PoliticianSearchClient, RequestFailure, SearchError};
use super::query::SearchQuery;
use super::types::SearchResponse;

/// Run one validated query against the client, logging any failure.
///
/// # Errors
/// Returns the client's [`RequestFailure`] unchanged.
pub async fn fetch<C>(client: &C, query: &SearchQuery) -> Result<SearchResponse, RequestFailure>
where
    C: PoliticianSearchClient + ?Sized,
{
    client.search(query).await.inspect_err(|error| {
        tracing::error!(query = %query, %error, "search error");
    })
}

/// Validate raw input and, if non-empty, run the search.
///
/// Empty input never reaches the client and is not logged.
///
/// # Errors
/// [`SearchError::EmptyQuery`] for blank input, [`SearchError::Failed`] when
/// the request fails.
pub async fn dispatch<C>(client: &C, input: &str) -> Result<SearchResponse, SearchError>
where
    C: PoliticianSearchClient + ?Sized,
{
    let query = SearchQuery::parse(input)?;
    Ok(fetch(client, &query).await?)
}
