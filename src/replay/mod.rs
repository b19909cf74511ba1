//! Command replay sinks.
//!
//! The browser never talks to an OS primitive directly: the chosen command is
//! handed to a [`CommandReplaySink`] once the terminal has been restored.

use crate::model::ReplayError;
use std::io::Write;
use tracing::{info, warn};

/// Destination for the selected command.
pub trait CommandReplaySink {
    /// Feed `text` to the shell as if it had been typed.
    fn inject(&mut self, text: &str) -> Result<(), ReplayError>;
}

// ===== TiocstiSink =====

/// Pushes each byte into the controlling terminal's input queue with `TIOCSTI`.
///
/// Kernels may refuse the request (for example Linux with
/// `dev.tty.legacy_tiocsti = 0`); the error is reported, not retried.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiocstiSink;

impl CommandReplaySink for TiocstiSink {
    #[cfg(unix)]
    fn inject(&mut self, text: &str) -> Result<(), ReplayError> {
        for byte in text.bytes() {
            let ch = byte as libc::c_char;
            // SAFETY: TIOCSTI reads a single char through the pointer, which
            // stays valid for the duration of the call.
            let result = unsafe {
                libc::ioctl(
                    libc::STDIN_FILENO,
                    libc::TIOCSTI,
                    &ch as *const libc::c_char,
                )
            };
            if result != 0 {
                return Err(std::io::Error::last_os_error().into());
            }
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn inject(&mut self, _text: &str) -> Result<(), ReplayError> {
        Err(ReplayError::Unsupported)
    }
}

// ===== PrintSink =====

/// Writes the command to a writer (stdout in production).
///
/// Degraded replay for terminals without input injection: the user can copy
/// the printed command or let the shell's line editor pick it up.
#[derive(Debug)]
pub struct PrintSink<W: Write> {
    writer: W,
}

impl<W: Write> PrintSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PrintSink<std::io::Stdout> {
    /// Sink printing to the process's stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> CommandReplaySink for PrintSink<W> {
    fn inject(&mut self, text: &str) -> Result<(), ReplayError> {
        self.writer.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

// ===== FallbackSink =====

/// Tries `primary`, and on failure logs the error and uses `secondary`.
#[derive(Debug)]
pub struct FallbackSink<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackSink<P, S>
where
    P: CommandReplaySink,
    S: CommandReplaySink,
{
    /// Chain two sinks.
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P, S> CommandReplaySink for FallbackSink<P, S>
where
    P: CommandReplaySink,
    S: CommandReplaySink,
{
    fn inject(&mut self, text: &str) -> Result<(), ReplayError> {
        match self.primary.inject(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(%err, "Command injection failed, falling back");
                self.secondary.inject(text)
            }
        }
    }
}

/// Replay strategy chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayMode {
    /// Inject into the terminal, printing if injection fails.
    #[default]
    Inject,
    /// Always print to stdout.
    Print,
}

/// Build the production sink for `mode`.
pub fn sink_for(mode: ReplayMode) -> Box<dyn CommandReplaySink> {
    info!(?mode, "Selecting replay sink");
    match mode {
        ReplayMode::Inject => Box::new(FallbackSink::new(TiocstiSink, PrintSink::stdout())),
        ReplayMode::Print => Box::new(PrintSink::stdout()),
    }
}
