//! Fixed-size pagination of entry sequences.
//!
//! A [`PagedView`] covers its input in order: no entry is dropped or repeated,
//! every page except the last holds exactly `capacity` entries, and an empty
//! input produces zero pages rather than one empty page.

use crate::model::{HistoryEntry, HistoryError};
use std::num::NonZeroUsize;

/// Ordered pages over either the full history or the current search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedView {
    pages: Vec<Vec<HistoryEntry>>,
    capacity: NonZeroUsize,
}

impl PagedView {
    /// A view with zero pages.
    pub fn empty(capacity: NonZeroUsize) -> Self {
        Self {
            pages: Vec::new(),
            capacity,
        }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the view has no pages (and so no addressable entry).
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Maximum entries per page.
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Entries on page `index`, or `None` past the last page.
    pub fn page(&self, index: usize) -> Option<&[HistoryEntry]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    /// Number of entries on page `index` (zero past the last page).
    pub fn page_len(&self, index: usize) -> usize {
        self.page(index).map_or(0, <[HistoryEntry]>::len)
    }

    /// All pages in order.
    pub fn pages(&self) -> impl Iterator<Item = &[HistoryEntry]> {
        self.pages.iter().map(Vec::as_slice)
    }

    /// Entry addressed by page and index within the page.
    pub fn entry(&self, page: usize, index: usize) -> Option<&HistoryEntry> {
        self.page(page).and_then(|entries| entries.get(index))
    }

    /// Total entries across all pages.
    pub fn entry_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Convert `(page, index)` addressing to a position in the underlying sequence.
    ///
    /// Returns `None` if the address does not name an entry.
    pub fn global_index(&self, page: usize, index: usize) -> Option<usize> {
        self.entry(page, index)
            .map(|_| page * self.capacity.get() + index)
    }

    /// Convert a position in the underlying sequence to `(page, index)` addressing.
    ///
    /// Returns `None` if the position is past the last entry.
    pub fn locate(&self, position: usize) -> Option<(usize, usize)> {
        let capacity = self.capacity.get();
        let address = (position / capacity, position % capacity);
        self.entry(address.0, address.1).map(|_| address)
    }
}

/// Split `entries` into consecutive pages of `capacity` entries.
///
/// # Errors
///
/// Returns `HistoryError::InvalidArgument` if `capacity` is zero.
pub fn paginate(entries: &[HistoryEntry], capacity: usize) -> Result<PagedView, HistoryError> {
    let capacity = NonZeroUsize::new(capacity).ok_or(HistoryError::InvalidArgument {
        what: "page capacity",
        value: capacity,
    })?;
    Ok(paginate_with(entries, capacity))
}

/// Infallible form of [`paginate`] for capacities derived from display geometry.
pub fn paginate_with(entries: &[HistoryEntry], capacity: NonZeroUsize) -> PagedView {
    PagedView {
        pages: entries
            .chunks(capacity.get())
            .map(<[HistoryEntry]>::to_vec)
            .collect(),
        capacity,
    }
}
