//! Criterion benchmarks for the key table and keystroke composer.
//!
//! Measures the one-off cost of building a [`KeyTable`] and the per-call cost
//! of name lookup and composition, which sit on the path of every
//! synthesized keystroke.
//!
//! Run with:
//! ```bash
//! cargo bench --package synthkey-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use synthkey_core::keymap::{compose, KeyDirection, KeyTable, UsQwertyTranslator};

// ── Representative key names for benchmarking ─────────────────────────────────

/// Mix of plain characters, shifted characters, named keys and misses.
const BENCH_KEYS: &[&str] = &[
    "a", "z", "A", "Z", "1", "!", "@", "?", " ", "\n",
    "enter", "esc", "tab", "shift", "ctrl", "f1", "f12", "pgdn", "command", "notakey",
];

// ── Benchmarks: table construction ────────────────────────────────────────────

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_table");

    group.bench_function("build_us_qwerty", |b| {
        b.iter(|| KeyTable::build(black_box(&UsQwertyTranslator)))
    });

    group.finish();
}

// ── Benchmarks: lookup ────────────────────────────────────────────────────────

fn bench_lookup(c: &mut Criterion) {
    let table = KeyTable::build(&UsQwertyTranslator);
    let mut group = c.benchmark_group("keymap_table");

    group.bench_function("lookup_single", |b| {
        b.iter(|| table.lookup(black_box("enter")))
    });

    group.bench_function("lookup_batch_20", |b| {
        b.iter(|| {
            BENCH_KEYS
                .iter()
                .map(|&k| table.lookup(black_box(k)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

// ── Benchmarks: composition ───────────────────────────────────────────────────

fn bench_compose(c: &mut Criterion) {
    let table = KeyTable::build(&UsQwertyTranslator);
    let mut group = c.benchmark_group("keymap_compose");

    // Best case (no modifiers) and worst case (shift wrap)
    for key in ["a", "A"] {
        group.bench_with_input(BenchmarkId::new("compose_down", key), &key, |b, &k| {
            b.iter(|| compose(&table, black_box(k), KeyDirection::Down))
        });
    }

    group.bench_function("compose_press_batch_20", |b| {
        b.iter(|| {
            BENCH_KEYS
                .iter()
                .flat_map(|&k| {
                    let mut strokes = compose(&table, black_box(k), KeyDirection::Down);
                    strokes.extend(compose(&table, black_box(k), KeyDirection::Up));
                    strokes
                })
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_table_build, bench_lookup, bench_compose);
criterion_main!(benches);
