//! Display geometry passed explicitly into pagination and rendering.

use std::num::NonZeroUsize;

/// Rows reserved above the entry list: prompt, help line and status line.
pub const HEADER_ROWS: u16 = 3;

/// Size of the drawable terminal area in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    /// Number of rows.
    pub rows: u16,
    /// Number of columns.
    pub cols: u16,
}

impl DisplayGeometry {
    /// Create a geometry from a terminal size.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Entries that fit on one page below the header rows.
    ///
    /// Never zero: terminals shorter than the header still show one entry.
    pub fn page_capacity(self) -> NonZeroUsize {
        let rows = usize::from(self.rows.saturating_sub(HEADER_ROWS));
        NonZeroUsize::new(rows).unwrap_or(NonZeroUsize::MIN)
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}
