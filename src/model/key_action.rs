//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that key events are mapped to.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Printable characters are not actions: they extend the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Move the highlight up one entry, wrapping at the top. Default: ↑
    MoveUp,
    /// Move the highlight down one entry, wrapping at the bottom. Default: ↓
    MoveDown,

    // Paging
    /// Show the next page, wrapping to the first. Default: Page Down
    NextPage,
    /// Show the previous page, wrapping to the last. Default: Page Up
    PrevPage,

    // Query editing
    /// Remove the last character of the search query. Default: Backspace/Delete
    Backspace,

    // Exit
    /// Replay the selected command and exit. Default: Tab
    Select,
    /// Replay the selected command followed by a newline and exit. Default: Enter
    SelectAndExecute,
    /// Exit without replaying anything. Default: Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action ends the session.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            KeyAction::Select | KeyAction::SelectAndExecute | KeyAction::Quit
        )
    }
}
