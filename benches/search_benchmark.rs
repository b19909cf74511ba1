//! Search and pagination benchmarks over a large history.
//!
//! Every keystroke re-filters and re-paginates the whole history, so both
//! must stay well below a frame for histories in the hundreds of thousands.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use histr::source::HistoryStore;
use histr::state::{filter, paginate_with, update, BrowserState, DisplayGeometry, SearchQuery};

const NUM_ENTRIES: usize = 200_000;

/// Generate a history of distinct, realistic-looking interpreter lines.
fn generate_large_history() -> HistoryStore {
    let templates = [
        "import module_",
        "print(value_",
        "df = pd.read_csv('data_",
        "for i in range(",
        "result = compute(x, y, ",
    ];
    HistoryStore::from_lines(
        (0..NUM_ENTRIES).map(|i| format!("{}{})", templates[i % templates.len()], i)),
    )
}

fn benchmark_search(c: &mut Criterion) {
    let store = generate_large_history();
    println!("Benchmark history: {} unique entries", store.len());

    c.bench_function("filter_common_term", |b| {
        let query = SearchQuery::new("print").expect("valid query");
        b.iter(|| filter(black_box(store.entries()), black_box(&query)))
    });

    c.bench_function("filter_rare_term", |b| {
        let query = SearchQuery::new("module_199999").expect("valid query");
        b.iter(|| filter(black_box(store.entries()), black_box(&query)))
    });

    c.bench_function("filter_no_match", |b| {
        let query = SearchQuery::new("XYZNONEXISTENT").expect("valid query");
        b.iter(|| filter(black_box(store.entries()), black_box(&query)))
    });

    let geometry = DisplayGeometry::new(50, 120);
    c.bench_function("paginate_full_history", |b| {
        b.iter(|| paginate_with(black_box(store.entries()), geometry.page_capacity()))
    });

    c.bench_function("keystroke_update", |b| {
        let mut state = BrowserState::new(store.clone(), geometry);
        b.iter(|| update(black_box(&mut state), "range("))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_search
}

criterion_main!(benches);
