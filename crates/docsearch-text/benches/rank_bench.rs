//! Benchmarks for per-keystroke catalog ranking.
//!
//! Run with: `cargo bench --package docsearch-text --bench rank_bench`
//!
//! Every keystroke re-ranks the whole catalog synchronously, so the budget is
//! "imperceptible input lag": a 10k-item catalog should rank well under 10ms.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docsearch_core::{Item, ItemType};
use docsearch_text::{RegionFinder, rank};
use std::hint::black_box;

// ============================================================================
// Test Data Generation
// ============================================================================

const STEMS: &[&str] = &[
    "Order", "Payment", "Shipment", "Invoice", "Customer", "Account", "Refund", "Stock",
];
const VERBS: &[&str] = &[
    "Placed", "Cancelled", "Created", "Updated", "Timeout", "Aggregate", "Projector", "Process",
];

fn catalog(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let stem = STEMS[i % STEMS.len()];
            let verb = VERBS[(i / STEMS.len()) % VERBS.len()];
            let name = format!("{stem}{verb}{i}");
            Item::new(name, format!("/messages/{i}"), ItemType::Event)
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for size in [100usize, 1_000, 10_000] {
        let items = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        for query in ["o", "order", "pmt", "zzz"] {
            group.bench_with_input(
                BenchmarkId::new(query, size),
                &items,
                |b, items| b.iter(|| black_box(rank(black_box(query), items))),
            );
        }
    }
    group.finish();
}

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_regions");
    group.bench_function("reused_finder", |b| {
        let mut finder = RegionFinder::new("order");
        b.iter(|| black_box(finder.find(black_box("ShipmentCancelledOrderPlaced"))))
    });
    group.bench_function("fresh_finder", |b| {
        b.iter(|| {
            black_box(RegionFinder::new(black_box("order")).find("ShipmentCancelledOrderPlaced"))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_rank, bench_single_match);
criterion_main!(benches);
