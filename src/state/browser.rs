//! Browser state machine.
//!
//! Owns the history, the full-history pages, the search mode and the two
//! cursors. Every operation corresponds to one input event; after it returns,
//! the page cursor addresses a page of the active view and the selection
//! cursor addresses an entry on that page, or both are in the empty state.

use crate::model::{HistoryEntry, HistoryError};
use crate::source::HistoryStore;
use crate::state::counter::BoundedCounter;
use crate::state::geometry::DisplayGeometry;
use crate::state::paginator::{paginate_with, PagedView};
use crate::state::search::{self, SearchMode};
use tracing::debug;

/// Prefix drawn before the query on the prompt line.
pub const PROMPT_PREFIX: &str = ">>> ";

/// Fixed help line listing the supported keys.
pub const HELP_TEXT: &str =
    "Type to filter, UP/DOWN move, PGUP/PGDN page, RET/TAB select, ESC quit";

/// Interactive browser over the loaded history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    pub(super) store: HistoryStore,
    pub(super) geometry: DisplayGeometry,
    pub(super) all_view: PagedView,
    pub(super) mode: SearchMode,
    pub(super) page: BoundedCounter,
    pub(super) selected: BoundedCounter,
}

impl BrowserState {
    /// Start browsing `store` paginated for `geometry`.
    pub fn new(store: HistoryStore, geometry: DisplayGeometry) -> Self {
        let all_view = paginate_with(store.entries(), geometry.page_capacity());
        let mut state = Self {
            store,
            geometry,
            all_view,
            mode: SearchMode::Browsing,
            page: BoundedCounter::empty(),
            selected: BoundedCounter::empty(),
        };
        state.reset_cursors();
        state
    }

    // ===== Accessors =====

    /// The loaded history.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Geometry the pages are sized for.
    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Current search mode.
    pub fn mode(&self) -> &SearchMode {
        &self.mode
    }

    /// Current query text.
    pub fn search_string(&self) -> &str {
        self.mode.query_str()
    }

    /// True iff the query is non-empty.
    pub fn search_mode(&self) -> bool {
        self.mode.is_searching()
    }

    /// Search results while searching, the full history otherwise.
    pub fn active_view(&self) -> &PagedView {
        match &self.mode {
            SearchMode::Browsing => &self.all_view,
            SearchMode::Searching { results, .. } => results,
        }
    }

    /// Page cursor.
    pub fn page(&self) -> BoundedCounter {
        self.page
    }

    /// Selection cursor within the current page.
    pub fn selected(&self) -> BoundedCounter {
        self.selected
    }

    /// Entries on the current page (empty when nothing matches).
    pub fn visible_entries(&self) -> &[HistoryEntry] {
        self.active_view()
            .page(self.page.value())
            .unwrap_or_default()
    }

    // ===== Query editing =====

    /// Append `c` to the query and refresh the results.
    pub fn append_char(&mut self, c: char) {
        let mut query = self.search_string().to_string();
        query.push(c);
        search::update(self, query);
    }

    /// Remove the last character of the query and refresh the results.
    ///
    /// With an empty query the browser stays in browse mode, but the update
    /// still runs: page and selection move back to the first entry of the
    /// first page.
    pub fn backspace(&mut self) {
        let mut query = self.search_string().to_string();
        query.pop();
        search::update(self, query);
    }

    // ===== Navigation =====

    /// Move the selection down one entry, wrapping to the top of the page.
    pub fn move_selection_down(&mut self) {
        let entries = self.current_page_len();
        if entries > 0 {
            self.selected.increment(entries);
        }
    }

    /// Move the selection up one entry, wrapping to the bottom of the page.
    pub fn move_selection_up(&mut self) {
        let entries = self.current_page_len();
        if entries > 0 {
            self.selected.decrement(entries);
        }
    }

    /// Show the next page, wrapping to the first; the selection resets to the top.
    pub fn next_page(&mut self) {
        let pages = self.active_view().page_count();
        if pages > 1 {
            self.page.increment(pages);
            self.rebound_selection();
        }
    }

    /// Show the previous page, wrapping to the last; the selection resets to the top.
    pub fn prev_page(&mut self) {
        let pages = self.active_view().page_count();
        if pages > 1 {
            self.page.decrement(pages);
            self.rebound_selection();
        }
    }

    /// Repaginate for a new terminal size.
    ///
    /// The full history and any active search are recomputed at the new
    /// capacity and both cursors return to the first entry.
    pub fn resize(&mut self, geometry: DisplayGeometry) {
        if geometry.page_capacity() == self.geometry.page_capacity() {
            self.geometry = geometry;
            return;
        }
        debug!(rows = geometry.rows, cols = geometry.cols, "Repaginating history");
        self.geometry = geometry;
        self.all_view = paginate_with(self.store.entries(), geometry.page_capacity());
        let query = self.search_string().to_string();
        search::update(self, query);
    }

    // ===== Selection =====

    /// The highlighted entry.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NoSelection` if the active view is empty.
    pub fn current_command(&self) -> Result<&HistoryEntry, HistoryError> {
        if !self.selected.is_addressable() {
            return Err(HistoryError::NoSelection);
        }
        self.active_view()
            .entry(self.page.value(), self.selected.value())
            .ok_or(HistoryError::NoSelection)
    }

    /// Everything the renderer needs to draw the current state.
    pub fn render_model(&self) -> RenderModel<'_> {
        let view = self.active_view();
        let (page, pages) = if view.is_empty() {
            (0, 0)
        } else {
            (self.page.value() + 1, view.page_count())
        };
        RenderModel {
            prompt: format!("{PROMPT_PREFIX}{}", self.search_string()),
            help: HELP_TEXT,
            status: format!(
                "- mode:std - match:exact - case:sensitive - page {page}/{pages}"
            ),
            entries: self.visible_entries(),
            selected: self
                .selected
                .is_addressable()
                .then_some(self.selected.value()),
        }
    }

    // ===== Internals =====

    fn current_page_len(&self) -> usize {
        self.active_view().page_len(self.page.value())
    }

    fn rebound_selection(&mut self) {
        let entries = self.current_page_len();
        self.selected.set_bound_and_clamp(entries);
    }

    /// Point both cursors at the first entry of the active view.
    pub(super) fn reset_cursors(&mut self) {
        let pages = self.active_view().page_count();
        self.page.set_bound_and_clamp(pages);
        self.rebound_selection();
    }
}

/// Data handed to the renderer for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel<'a> {
    /// Prompt line: `">>> "` followed by the query.
    pub prompt: String,
    /// Fixed help line.
    pub help: &'static str,
    /// Status line with the page position.
    pub status: String,
    /// Entries on the current page.
    pub entries: &'a [HistoryEntry],
    /// Highlighted index into `entries`, if any.
    pub selected: Option<usize>,
}

// ===== Tests =====

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
