//! Search page state: the input field, loading indicator and results container.
//!
//! `Idle -> Searching -> Idle`. A search starts with [`SearchPage::begin`] and
//! ends with [`SearchPage::finish`]; [`SearchPage::search`] runs both around a
//! client call.
//!
//! Overlapping searches are not cancelled. Whichever outcome is passed to
//! `finish` last is what the page shows, and the first `finish` hides the
//! loading indicator even if another request is still in flight.

use crate::render::{escape_html, render, Fragment};
use crate::search::{
    fetch, PoliticianSearchClient, RequestFailure, SearchError, SearchQuery, SearchResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
}

/// What the results container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Empty,
    Error(String),
    Rendered(Fragment),
}

impl ResultsView {
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Error(message) => {
                format!("<div class=\"error-message\">{}</div>", escape_html(message))
            }
            Self::Rendered(fragment) => fragment.to_html(),
        }
    }

    /// Plain-text form for terminals.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Error(message) => message.clone(),
            Self::Rendered(fragment) => fragment.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    query: String,
    phase: Phase,
    last_response: Option<SearchResponse>,
    last_error: Option<String>,
}

impl SearchPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text of the search field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn loading_visible(&self) -> bool {
        self.phase == Phase::Searching
    }

    #[must_use]
    pub const fn last_response(&self) -> Option<&SearchResponse> {
        self.last_response.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Submit the current input.
    ///
    /// Blank input shows the empty-query message and returns `None`. Otherwise
    /// the page enters `Searching`, previous output is cleared and the
    /// validated query is returned for the caller to send.
    pub fn begin(&mut self) -> Option<SearchQuery> {
        match SearchQuery::parse(&self.query) {
            Ok(query) => {
                self.phase = Phase::Searching;
                self.last_response = None;
                self.last_error = None;
                Some(query)
            }
            Err(error) => {
                self.last_response = None;
                self.last_error = Some(error.to_string());
                None
            }
        }
    }

    /// Apply the outcome of a request and return to `Idle`.
    pub fn finish(&mut self, outcome: Result<SearchResponse, RequestFailure>) {
        self.phase = Phase::Idle;
        match outcome {
            Ok(response) => {
                self.last_error = None;
                self.last_response = Some(response);
            }
            Err(failure) => {
                self.last_response = None;
                self.last_error = Some(SearchError::Failed(failure).to_string());
            }
        }
    }

    /// Submit the current input and wait for the result.
    pub async fn search<C>(&mut self, client: &C)
    where
        C: PoliticianSearchClient + ?Sized,
    {
        self.search_with(client, |_| {}).await;
    }

    /// Like [`SearchPage::search`], calling `on_loading` once the loading
    /// indicator is shown and before the request is sent. Not called for
    /// blank input.
    pub async fn search_with<C, F>(&mut self, client: &C, on_loading: F)
    where
        C: PoliticianSearchClient + ?Sized,
        F: FnOnce(&Self),
    {
        let Some(query) = self.begin() else {
            return;
        };
        on_loading(self);
        let outcome = fetch(client, &query).await;
        self.finish(outcome);
    }

    /// Current contents of the results container.
    #[must_use]
    pub fn results(&self) -> ResultsView {
        if let Some(message) = &self.last_error {
            ResultsView::Error(message.clone())
        } else if let Some(response) = &self.last_response {
            ResultsView::Rendered(render(response))
        } else {
            ResultsView::Empty
        }
    }
}
