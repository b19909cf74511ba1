//! TUI rendering and event loop (impure shell).
//!
//! Owns the terminal for the length of one browsing session: raw mode and the
//! alternate screen are entered on start and always restored on exit.

pub mod constants;
pub mod layout;
pub mod styles;

pub use layout::{render_layout, BrowserView};
pub use styles::{BrowserStyles, ColorConfig};

use crate::config::{KeyBindings, KeyInput};
use crate::model::{HistoryError, InputError};
use crate::source::HistoryStore;
use crate::state::{handle_key_action, BrowserState, DisplayGeometry, SessionOutcome};
use crossterm::{
    event::{self, Event, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// History file could not be loaded
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Navigation engine error
    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: BrowserState,
    styles: BrowserStyles,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(store: HistoryStore, styles: BrowserStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, store, styles))
    }

    /// Run the event loop until the user selects a command or quits.
    ///
    /// Blocks on the next terminal event; each key is fully processed and
    /// redrawn before the next one is read.
    pub fn run(&mut self) -> Result<SessionOutcome, TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(outcome) = self.handle_key(key) {
                        return Ok(outcome);
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, store: HistoryStore, styles: BrowserStyles) -> Self {
        let geometry = match terminal.size() {
            Ok(size) => DisplayGeometry::new(size.height, size.width),
            Err(_) => DisplayGeometry::default(),
        };
        info!(
            entries = store.len(),
            rows = geometry.rows,
            cols = geometry.cols,
            "Starting history browser"
        );
        Self {
            terminal,
            state: BrowserState::new(store, geometry),
            styles,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns the outcome if the session should end
    fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
        match self.key_bindings.classify(key) {
            Some(KeyInput::Action(action)) => {
                debug!(?action, "Key action");
                handle_key_action(&mut self.state, action)
            }
            Some(KeyInput::Char(c)) => {
                self.state.append_char(c);
                None
            }
            None => None,
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.state.resize(DisplayGeometry::new(height, width));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let model = self.state.render_model();
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, &model, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(terminal: Terminal<B>, store: HistoryStore) -> Self {
        Self::with_terminal(terminal, store, BrowserStyles::default())
    }

    pub(crate) fn state(&self) -> &BrowserState {
        &self.state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
        self.handle_key(key)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Load the history at `history_path` and browse it interactively.
///
/// The file is read before the terminal is touched, so a missing history
/// never leaves the terminal in raw mode. Once the session starts, the
/// terminal is restored before returning, whether the session ended normally
/// or with an error. Logging must be initialized by the caller.
pub fn run_session(history_path: &Path, styles: BrowserStyles) -> Result<SessionOutcome, TuiError> {
    let store = HistoryStore::load(history_path)?;

    let mut app = match TuiApp::new(store, styles) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    if let Ok(outcome) = &result {
        info!(?outcome, "Session ended");
    }
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
