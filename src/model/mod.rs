//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod entry;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use entry::HistoryEntry;
pub use error::{AppError, HistoryError, InputError, ReplayError};
pub use key_action::KeyAction;
