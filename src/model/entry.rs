//! History entry newtype.

use std::fmt;

/// One deduplicated command line from the history file.
///
/// Immutable once built. Equality is exact string equality. Empty entries are
/// valid: a blank line in the history file becomes an empty command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    /// Build an entry from a raw history line, trimming surrounding whitespace.
    pub fn from_line(line: &str) -> Self {
        Self(line.trim().to_string())
    }

    /// The exact command text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the command text contains `needle` as a contiguous, case-sensitive substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HistoryEntry {
    fn from(line: &str) -> Self {
        Self::from_line(line)
    }
}

impl AsRef<str> for HistoryEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
