//! Incremental substring search.
//!
//! SearchMode is a sum type with two states:
//! - Browsing: empty query, the full history is shown
//! - Searching: non-empty query with its paginated results
//!
//! There is no explicit "enter search mode" transition: [`update`] derives the
//! mode from whether the new query is empty.

use crate::model::HistoryEntry;
use crate::state::paginator::{paginate_with, PagedView};
use crate::state::BrowserState;
use tracing::debug;

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
///
/// Whitespace is significant: a single space is a valid query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: returns None if `raw` is empty.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== SearchMode =====

/// Which entries the browser is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// No query; the full history is shown.
    Browsing,
    /// Only entries containing `query` are shown.
    Searching {
        /// The active query.
        query: SearchQuery,
        /// Matching entries, paginated at the current capacity.
        results: PagedView,
    },
}

impl SearchMode {
    /// The current query text (empty while browsing).
    pub fn query_str(&self) -> &str {
        match self {
            SearchMode::Browsing => "",
            SearchMode::Searching { query, .. } => query.as_str(),
        }
    }

    /// Whether a query is active.
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchMode::Searching { .. })
    }
}

// ===== Search Execution =====

/// Entries containing `query` as a case-sensitive substring, in original order.
pub fn filter(all_entries: &[HistoryEntry], query: &SearchQuery) -> Vec<HistoryEntry> {
    all_entries
        .iter()
        .filter(|entry| entry.contains(query.as_str()))
        .cloned()
        .collect()
}

/// Install `new_query` and recompute the active view.
///
/// An empty query switches back to browsing the full history without running
/// [`filter`]. In both cases the page and selection cursors are reset to the
/// first entry of the first page (or the empty state when nothing matches).
/// Running this twice with the same query leaves the state unchanged.
pub fn update(state: &mut BrowserState, new_query: impl Into<String>) {
    state.mode = match SearchQuery::new(new_query) {
        Some(query) => {
            let matches = filter(state.store.entries(), &query);
            debug!(
                query = query.as_str(),
                matches = matches.len(),
                "Search updated"
            );
            let results = paginate_with(&matches, state.geometry.page_capacity());
            SearchMode::Searching { query, results }
        }
        None => {
            debug!("Search cleared, browsing full history");
            SearchMode::Browsing
        }
    };
    state.reset_cursors();
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
