//! Live product search.
//!
//! Every keystroke that leaves non-empty text in the search box issues a
//! request tagged with a [`SearchTicket`]. Responses can arrive out of order,
//! so a result is only rendered if its ticket is still the latest one handed
//! out; anything older is dropped as [`SearchApplied::Stale`].
//!
//! An empty box issues no request and leaves whatever results were last
//! rendered on screen.

use std::sync::atomic::{AtomicU64, Ordering};

use shopfront_client::StorefrontClient;
use shopfront_core::SearchResult;

use crate::error::UiError;
use crate::ids;
use crate::page::Page;
use crate::view::{ElementNode, Node};

/// Sequence token for one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happened to a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchApplied {
    /// Results were rendered into `search-results`.
    Applied { count: usize },
    /// A newer request was issued while this one was in flight.
    Stale,
    /// Empty input; no request was made.
    Skipped,
}

/// The search box wired to a page's `search-query` input.
#[derive(Debug, Default)]
pub struct SearchBox {
    latest: AtomicU64,
}

impl SearchBox {
    /// Wires search if the page has a `search-query` input.
    #[must_use]
    pub fn attach(page: &Page) -> Option<Self> {
        page.contains(ids::SEARCH_QUERY).then(Self::default)
    }

    /// Issues a ticket for `text`, invalidating every earlier one.
    /// Returns `None` for empty input.
    pub fn begin(&self, text: &str) -> Option<SearchTicket> {
        if text.is_empty() {
            return None;
        }
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Some(SearchTicket {
            seq,
            query: text.to_owned(),
        })
    }

    #[must_use]
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }

    /// Runs the request for `ticket`. Does not touch the page.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Client`] if the request fails.
    pub async fn fetch(
        &self,
        client: &StorefrontClient,
        ticket: &SearchTicket,
    ) -> Result<Vec<SearchResult>, UiError> {
        tracing::debug!(seq = ticket.seq, query = %ticket.query, "search");
        Ok(client.search_products(&ticket.query).await?)
    }

    /// Renders `results` into `search-results` if `ticket` is still current.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if the page has no `search-results`.
    pub fn apply(
        &self,
        page: &mut Page,
        ticket: &SearchTicket,
        results: &[SearchResult],
    ) -> Result<SearchApplied, UiError> {
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.seq, "dropping stale search response");
            return Ok(SearchApplied::Stale);
        }
        page.replace_children(ids::SEARCH_RESULTS, render_search_results(results))?;
        Ok(SearchApplied::Applied {
            count: results.len(),
        })
    }

    /// Handles one input event: mirrors `text` into the input, then searches.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if the page lacks `search-query` or
    ///   `search-results`.
    /// - [`UiError::Client`] if the request fails; results are untouched.
    pub async fn on_input(
        &self,
        client: &StorefrontClient,
        page: &mut Page,
        text: &str,
    ) -> Result<SearchApplied, UiError> {
        page.set_value(ids::SEARCH_QUERY, text)?;
        let Some(ticket) = self.begin(text) else {
            return Ok(SearchApplied::Skipped);
        };
        page.require(ids::SEARCH_RESULTS)?;
        let results = self.fetch(client, &ticket).await?;
        self.apply(page, &ticket, &results)
    }
}

/// Name and price only.
#[must_use]
pub fn render_search_results(results: &[SearchResult]) -> Vec<Node> {
    results
        .iter()
        .map(|result| {
            ElementNode::new("div")
                .class("search-result")
                .child(ElementNode::new("h2").text(result.name.as_str()))
                .child(ElementNode::new("p").text(result.price.as_str()))
                .into()
        })
        .collect()
}
