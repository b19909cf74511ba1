//! Error types for histr.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - History file reading failures (file not found, IO)
//!   - [`HistoryError`] - Navigation engine failures (invalid arguments, empty selection)
//!   - [`ReplayError`] - Failure to hand the selected command back to the shell
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!   - `ConfigError`, `LoggingError` - Startup failures before the session
//!   - `TuiError` - Session failures, including a history file that cannot be loaded
//!
//! # Error Recovery Strategy
//!
//! Input errors are fatal and surface before the interactive session starts: no partial
//! session is entered without a history file. `HistoryError::NoSelection` is recoverable
//! and is avoided by the event loop, which ignores confirm keys on an empty result set.
//! `HistoryError::InvalidArgument` is a programmer error; capacities derived from display
//! geometry are always at least one.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use histr::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _history = read_history()?;
///     Ok(())
/// }
/// # fn read_history() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the history file.
    ///
    /// **Recovery**: Display error to user and exit. The session cannot start without it.
    #[error("Failed to read history: {0}")]
    InputRead(#[from] InputError),

    /// The navigation engine rejected an operation.
    #[error("History browser error: {0}")]
    History(#[from] HistoryError),

    /// The selected command could not be replayed into the terminal.
    #[error("Failed to replay command: {0}")]
    Replay(#[from] ReplayError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt terminal cleanup, then exit with the message on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The interactive session failed. The terminal has already been restored.
    #[error("Session error: {0}")]
    Session(#[from] crate::view::TuiError),
}

/// Errors encountered when reading the history file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The history file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use histr::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing_history")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing_history"));
    /// ```
    #[error("History file not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// Generic I/O error while opening or reading the history file.
    ///
    /// Covers permission denied, disk errors and invalid UTF-8 content.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the pagination, counter and selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A capacity or bound was below one.
    ///
    /// Treated as an unrecoverable assertion: the display geometry always yields a
    /// capacity of at least one.
    ///
    /// # Examples
    ///
    /// ```
    /// use histr::model::error::HistoryError;
    ///
    /// let err = HistoryError::InvalidArgument { what: "page capacity", value: 0 };
    /// assert_eq!(err.to_string(), "Invalid page capacity: 0 (must be at least 1)");
    /// ```
    #[error("Invalid {what}: {value} (must be at least 1)")]
    InvalidArgument {
        /// Name of the rejected parameter.
        what: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The active view has no entries, so there is nothing to select.
    #[error("No entry is selected: the current view is empty")]
    NoSelection,
}

/// Errors encountered when injecting a command into the terminal's input queue.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The platform offers no way to push input into the terminal.
    #[error("Command injection is not supported on this platform")]
    Unsupported,

    /// The injection primitive or the fallback writer failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
