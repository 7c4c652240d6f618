//! Performance benchmarks for archive projections and entry loading.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Category filtering and excerpting at various archive sizes
//! - Parsing the stored entry list

use care::journal_core::{CareEntry, CareField, JournalEntry};
use care::journal_io::{load_entries, save_entries};
use care::ops::archive::{excerpt, filter_entries, local_date, week_number, FilterCategory};
use care::storage::MemoryStore;
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn make_entries(count: usize) -> Vec<JournalEntry> {
    let start = Utc.with_ymd_and_hms(2020, 1, 5, 20, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            JournalEntry::from_parts(
                format!("bench-{}", i),
                start + Duration::weeks(i as i64),
                CareEntry {
                    compliment: format!("Compliment number {} about patience and care", i),
                    achievement: if i % 3 == 0 {
                        String::new()
                    } else {
                        "Closed out a long-running project ahead of schedule".repeat(2)
                    },
                    reflection: "Small steps every day add up to real progress".to_string(),
                    emotion: "Calm with a touch of excitement about next week".to_string(),
                },
            )
        })
        .collect()
}

/// Benchmark filtering plus the per-entry work of the archive list.
fn bench_archive_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive_list");

    for size in [10usize, 100, 1000] {
        let entries = make_entries(size);
        let category = FilterCategory::Field(CareField::Achievement);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                let visible = filter_entries(black_box(entries), category);
                for entry in visible {
                    if let Some(date) = local_date(entry) {
                        black_box(week_number(date));
                    }
                    black_box(excerpt(entry.achievement()));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark parsing the stored entry list.
fn bench_load_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_entries");

    for size in [10usize, 100, 1000] {
        let mut store = MemoryStore::new();
        save_entries(&mut store, &make_entries(size)).expect("save failed");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| {
                let loaded = load_entries(black_box(store)).expect("entries missing");
                black_box(loaded);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_archive_list, bench_load_entries);
criterion_main!(benches);
