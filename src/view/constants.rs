//! Row layout constants for the browser screen.

use crate::state::HEADER_ROWS;

/// Row of the `>>> query` prompt.
pub const PROMPT_ROW: u16 = 0;

/// Row of the fixed key help line.
pub const HELP_ROW: u16 = 1;

/// Row of the status bar.
pub const STATUS_ROW: u16 = 2;

/// First row of the entry list, directly below the header.
pub const FIRST_ENTRY_ROW: u16 = HEADER_ROWS;
