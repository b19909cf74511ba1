//! History navigation engine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod browser;
pub mod counter;
pub mod geometry;
pub mod key_handler;
pub mod paginator;
pub mod search;

// Re-export for convenience
pub use browser::{BrowserState, RenderModel, HELP_TEXT, PROMPT_PREFIX};
pub use counter::BoundedCounter;
pub use geometry::{DisplayGeometry, HEADER_ROWS};
pub use key_handler::{handle_key_action, SessionOutcome};
pub use paginator::{paginate, paginate_with, PagedView};
pub use search::{filter, update, SearchMode, SearchQuery};
