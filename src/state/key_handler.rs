//! Keyboard action handler.
//!
//! Pure functions that transform BrowserState in response to key actions and
//! decide when the session ends.

use crate::model::KeyAction;
use crate::state::BrowserState;
use tracing::debug;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user quit without choosing a command.
    Cancelled,
    /// The user chose a command to replay.
    Selected {
        /// Command text to inject.
        command: String,
        /// Whether a trailing newline should be injected to run it immediately.
        execute: bool,
    },
}

impl SessionOutcome {
    /// Text to inject into the terminal, if any.
    pub fn replay_text(&self) -> Option<String> {
        match self {
            SessionOutcome::Cancelled => None,
            SessionOutcome::Selected { command, execute } => Some(if *execute {
                format!("{command}\n")
            } else {
                command.clone()
            }),
        }
    }
}

/// Apply a key action to the browser.
///
/// Returns `Some(outcome)` when the action ends the session. Confirm actions on
/// an empty result set are ignored so the session keeps running.
pub fn handle_key_action(state: &mut BrowserState, action: KeyAction) -> Option<SessionOutcome> {
    if action.is_terminal() {
        return finish(state, action);
    }
    match action {
        KeyAction::MoveUp => state.move_selection_up(),
        KeyAction::MoveDown => state.move_selection_down(),
        KeyAction::NextPage => state.next_page(),
        KeyAction::PrevPage => state.prev_page(),
        KeyAction::Backspace => state.backspace(),
        KeyAction::Select | KeyAction::SelectAndExecute | KeyAction::Quit => {}
    }
    None
}

/// Outcome of an exit action, or None when there is nothing to select.
fn finish(state: &BrowserState, action: KeyAction) -> Option<SessionOutcome> {
    if action == KeyAction::Quit {
        return Some(SessionOutcome::Cancelled);
    }
    match state.current_command() {
        Ok(entry) => Some(SessionOutcome::Selected {
            command: entry.as_str().to_string(),
            execute: action == KeyAction::SelectAndExecute,
        }),
        Err(err) => {
            debug!(%err, ?action, "Ignoring confirm on empty view");
            None
        }
    }
}
