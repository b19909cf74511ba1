//! History input source.
//!
//! The history file is read once at startup into a [`HistoryStore`]; the store is
//! immutable for the rest of the session.

pub mod history;

pub use history::HistoryStore;
