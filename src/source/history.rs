//! History file loading with order-preserving deduplication.

use crate::model::error::InputError;
use crate::model::HistoryEntry;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Ordered, deduplicated command history.
///
/// Built once at session start and never mutated afterwards. The first
/// occurrence of a command keeps its position; later duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load the history file at `path`.
    ///
    /// Each line is trimmed of surrounding whitespace. Blank lines become empty
    /// entries and take part in deduplication like any other command.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` if it cannot be opened or read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        let store = Self::from_lines(&lines);

        info!(
            path = %path.display(),
            lines = lines.len(),
            unique = store.len(),
            "History loaded"
        );
        Ok(store)
    }

    /// Build a store from in-memory lines, applying the same trimming and
    /// deduplication as [`HistoryStore::load`].
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for line in lines {
            let entry = HistoryEntry::from_line(line.as_ref());
            if seen.insert(entry.clone()) {
                entries.push(entry);
            } else {
                debug!(command = entry.as_str(), "Dropping duplicate history line");
            }
        }
        Self { entries }
    }

    /// All unique entries in first-seen order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of unique entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
