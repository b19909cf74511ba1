//! Acceptance tests: browse, filter and select a command from a history file.
//!
//! Each test drives the library the way the event loop does: load a file,
//! feed key actions, then replay the outcome into a sink.

use histr::model::{InputError, KeyAction};
use histr::replay::{CommandReplaySink, PrintSink};
use histr::source::HistoryStore;
use histr::state::{handle_key_action, BrowserState, DisplayGeometry, SessionOutcome};
use std::fs;
use std::path::PathBuf;

// ===== Test Fixtures =====

/// History file removed when dropped.
struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    fn new(name: &str, lines: &[&str]) -> Self {
        let path = std::env::temp_dir().join(format!("histr_acceptance_{name}"));
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents).unwrap();
        Self { path }
    }
}

impl Drop for HistoryFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

// 5 rows => 2 entries per page
fn two_per_page() -> DisplayGeometry {
    DisplayGeometry::new(5, 80)
}

fn page_texts(state: &BrowserState) -> Vec<Vec<&str>> {
    state
        .active_view()
        .pages()
        .map(|page| page.iter().map(|e| e.as_str()).collect())
        .collect()
}

// ===== Scenario: dedup, filter, backspace =====

#[test]
fn scenario_filter_then_backspace_restores_browse_view() {
    // GIVEN: A history file with one duplicate line
    let file = HistoryFile::new("scenario", &["ls", "cd /tmp", "ls", "git status"]);

    // WHEN: It is loaded and browsed two entries per page
    let store = HistoryStore::load(&file.path).unwrap();
    let mut state = BrowserState::new(store, two_per_page());

    // THEN: Duplicates are gone and the entries fill two pages
    let entries: Vec<&str> = state.store().entries().iter().map(|e| e.as_str()).collect();
    assert_eq!(entries, vec!["ls", "cd /tmp", "git status"]);
    assert_eq!(
        page_texts(&state),
        vec![vec!["ls", "cd /tmp"], vec!["git status"]]
    );

    // WHEN: "s" is typed
    state.append_char('s');

    // THEN: One page holds both matches
    assert!(state.search_mode());
    assert_eq!(page_texts(&state), vec![vec!["ls", "git status"]]);

    // WHEN: The selection moves and the query is erased
    state.move_selection_down();
    state.backspace();

    // THEN: The full two-page view returns with the selection on the first entry
    assert!(!state.search_mode());
    assert_eq!(
        page_texts(&state),
        vec![vec!["ls", "cd /tmp"], vec!["git status"]]
    );
    assert_eq!(state.page().value(), 0);
    assert_eq!(state.selected().value(), 0);
}

// ===== Scenario: select and replay =====

#[test]
fn scenario_select_on_second_page_replays_command() {
    let file = HistoryFile::new("second_page", &["ls", "cd /tmp", "git status"]);
    let mut state = BrowserState::new(HistoryStore::load(&file.path).unwrap(), two_per_page());

    assert_eq!(handle_key_action(&mut state, KeyAction::NextPage), None);
    let outcome = handle_key_action(&mut state, KeyAction::Select).unwrap();

    assert_eq!(
        outcome,
        SessionOutcome::Selected {
            command: "git status".to_string(),
            execute: false
        }
    );

    let mut sink = PrintSink::new(Vec::new());
    sink.inject(&outcome.replay_text().unwrap()).unwrap();
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "git status\n");
}

#[test]
fn scenario_select_and_execute_appends_newline() {
    let file = HistoryFile::new("execute", &["ls", "pwd"]);
    let mut state = BrowserState::new(HistoryStore::load(&file.path).unwrap(), two_per_page());

    handle_key_action(&mut state, KeyAction::MoveUp);
    let outcome = handle_key_action(&mut state, KeyAction::SelectAndExecute).unwrap();

    assert_eq!(outcome.replay_text().as_deref(), Some("pwd\n"));
}

#[test]
fn scenario_quit_replays_nothing() {
    let file = HistoryFile::new("quit", &["ls"]);
    let mut state = BrowserState::new(HistoryStore::load(&file.path).unwrap(), two_per_page());

    let outcome = handle_key_action(&mut state, KeyAction::Quit).unwrap();

    assert_eq!(outcome, SessionOutcome::Cancelled);
    assert_eq!(outcome.replay_text(), None);
}

// ===== Scenario: empty and missing input =====

#[test]
fn scenario_no_matches_ignores_confirm() {
    let file = HistoryFile::new("no_match", &["ls", "pwd"]);
    let mut state = BrowserState::new(HistoryStore::load(&file.path).unwrap(), two_per_page());

    state.append_char('#');

    assert!(state.active_view().is_empty());
    assert_eq!(handle_key_action(&mut state, KeyAction::Select), None);
    assert_eq!(handle_key_action(&mut state, KeyAction::NextPage), None);
    assert_eq!(handle_key_action(&mut state, KeyAction::MoveDown), None);
    assert_eq!(state.render_model().selected, None);
}

#[test]
fn scenario_missing_history_file_is_reported() {
    let path = std::env::temp_dir().join("histr_acceptance_does_not_exist");
    let _ = fs::remove_file(&path);

    let err = HistoryStore::load(&path).unwrap_err();

    assert!(matches!(err, InputError::FileNotFound { path: p } if p == path));
}
