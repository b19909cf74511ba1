//! histr
//!
//! Interactive terminal browser for interpreter command history: filter the
//! history by substring, page through it, and hand the chosen command back to
//! the shell.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` hold no I/O,
//! while `source`, `view`, `replay` and `logging` own the file system and
//! terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod replay;
pub mod source;
pub mod state;
pub mod view;
