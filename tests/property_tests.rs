//! Property-based tests for the history browser core.
//!
//! Tests validate:
//! 1. Loading keeps the first occurrence of each line, in order
//! 2. Pagination covers every entry exactly once with full pages before the last
//! 3. Counter increment/decrement wrap and undo each other
//! 4. Re-applying the same query leaves the browser unchanged
//! 5. Filter returns exactly the matching entries; an empty query browses everything

use histr::model::HistoryEntry;
use histr::source::HistoryStore;
use histr::state::{
    filter, paginate, update, BoundedCounter, BrowserState, DisplayGeometry, SearchQuery,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Lines drawn from a small alphabet so duplicates and matches are common.
fn history_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,4}", 0..40)
}

fn entries(lines: &[&str]) -> Vec<HistoryEntry> {
    lines.iter().map(|line| HistoryEntry::from_line(line)).collect()
}

// ===== Property 1: Deduplication =====

proptest! {
    #[test]
    fn store_has_no_duplicates(lines in history_lines()) {
        let store = HistoryStore::from_lines(&lines);
        let unique: HashSet<_> = store.entries().iter().collect();
        prop_assert_eq!(unique.len(), store.len());
    }

    #[test]
    fn store_keeps_first_occurrence_order(lines in history_lines()) {
        let store = HistoryStore::from_lines(&lines);

        let mut seen = HashSet::new();
        let expected: Vec<String> = lines
            .iter()
            .map(|line| line.trim().to_string())
            .filter(|line| seen.insert(line.clone()))
            .collect();
        let actual: Vec<&str> = store.entries().iter().map(HistoryEntry::as_str).collect();

        prop_assert_eq!(actual, expected);
    }
}

// ===== Property 2: Pagination =====

proptest! {
    #[test]
    fn pagination_concatenates_back_to_input(
        lines in prop::collection::vec("[a-z]{1,6}", 0..60),
        capacity in 1usize..10,
    ) {
        let input: Vec<HistoryEntry> = lines.iter().map(|l| HistoryEntry::from_line(l)).collect();
        let view = paginate(&input, capacity).unwrap();

        let flattened: Vec<HistoryEntry> = view.pages().flatten().cloned().collect();
        prop_assert_eq!(flattened, input.clone());
        prop_assert_eq!(view.page_count(), input.len().div_ceil(capacity));
    }

    #[test]
    fn only_last_page_may_be_short(
        len in 0usize..60,
        capacity in 1usize..10,
    ) {
        let input: Vec<HistoryEntry> =
            (0..len).map(|i| HistoryEntry::from_line(&i.to_string())).collect();
        let view = paginate(&input, capacity).unwrap();
        let pages: Vec<_> = view.pages().collect();

        for (i, page) in pages.iter().enumerate() {
            prop_assert!(!page.is_empty());
            if i + 1 < pages.len() {
                prop_assert_eq!(page.len(), capacity);
            } else {
                prop_assert!(page.len() <= capacity);
            }
        }
    }
}

// ===== Property 3: Bounded Counter =====

proptest! {
    #[test]
    fn increment_wraps_after_bound_steps(
        (bound, start) in (1usize..50).prop_flat_map(|b| (Just(b), 0..b)),
    ) {
        let mut counter = BoundedCounter::new(bound).unwrap();
        for _ in 0..start {
            counter.increment(bound);
        }
        prop_assert_eq!(counter.value(), start);

        for _ in 0..bound {
            counter.increment(bound);
        }
        prop_assert_eq!(counter.value(), start);
    }

    #[test]
    fn decrement_undoes_increment(bound in 1usize..50, steps in 0usize..100) {
        let mut counter = BoundedCounter::new(bound).unwrap();
        for _ in 0..steps {
            counter.increment(bound);
        }
        let before = counter;

        counter.increment(bound);
        counter.decrement(bound);

        prop_assert_eq!(counter, before);
        prop_assert!(counter.value() < bound);
    }

    #[test]
    fn decrement_from_zero_lands_on_last(bound in 1usize..50) {
        let mut counter = BoundedCounter::new(bound).unwrap();
        counter.decrement(bound);
        prop_assert_eq!(counter.value(), bound - 1);
    }
}

// ===== Property 4: Search Idempotence =====

proptest! {
    #[test]
    fn repeating_query_is_idempotent(
        lines in history_lines(),
        query in "[a-c ]{0,3}",
        rows in 4u16..12,
    ) {
        let mut state = BrowserState::new(
            HistoryStore::from_lines(&lines),
            DisplayGeometry::new(rows, 80),
        );

        update(&mut state, query.clone());
        let once = state.clone();
        update(&mut state, query);

        prop_assert_eq!(state, once);
    }
}

// ===== Property 5: Filter Correctness =====

proptest! {
    #[test]
    fn filter_returns_exactly_matching_entries(
        lines in history_lines(),
        query in "[a-c ]{1,2}",
    ) {
        let store = HistoryStore::from_lines(&lines);
        let query = SearchQuery::new(query).unwrap();

        let results = filter(store.entries(), &query);

        let expected: Vec<HistoryEntry> = store
            .entries()
            .iter()
            .filter(|e| e.as_str().contains(query.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(results, expected);
    }

    #[test]
    fn empty_query_browses_full_history(lines in history_lines(), rows in 4u16..12) {
        let store = HistoryStore::from_lines(&lines);
        let mut state = BrowserState::new(store.clone(), DisplayGeometry::new(rows, 80));

        state.append_char('a');
        state.backspace();

        prop_assert!(!state.search_mode());
        let shown: Vec<HistoryEntry> = state.active_view().pages().flatten().cloned().collect();
        prop_assert_eq!(shown, store.entries().to_vec());
    }
}

// ===== Examples =====

#[test]
fn filter_is_case_sensitive() {
    let all = entries(&["Print", "print(x)"]);
    let results = filter(&all, &SearchQuery::new("print").unwrap());
    assert_eq!(results, entries(&["print(x)"]));
}

#[test]
fn paginate_rejects_zero_capacity() {
    assert!(paginate(&entries(&["a"]), 0).is_err());
}
