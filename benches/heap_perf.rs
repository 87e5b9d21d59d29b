//! Heap construction and removal benchmarks
//!
//! Compares:
//! - O(n) heapify (`from_vec`) against n single inserts
//! - indexed removal by value against `std::collections::BinaryHeap`, which
//!   has to rebuild itself to drop an arbitrary element
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the removal group
//! cargo bench --bench heap_perf -- 'remove_by_value'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_indexed_heap::indexed_binary::IndexedMinHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Deterministic pseudo-random values (64-bit LCG)
fn generate_values(count: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state >> 16
        })
        .collect()
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &log_size in &[10, 14, 17] {
        let values = generate_values(1 << log_size, 12345 + log_size as u64);
        let size_label = format!("2^{}", log_size);

        group.bench_with_input(
            BenchmarkId::new("heapify", &size_label),
            &values,
            |b, vs| b.iter(|| black_box(IndexedMinHeap::from_vec(vs.clone()))),
        );
        group.bench_with_input(
            BenchmarkId::new("repeated_insert", &size_label),
            &values,
            |b, vs| b.iter(|| black_box(vs.iter().copied().collect::<IndexedMinHeap<u64>>())),
        );
    }

    group.finish();
}

fn benchmark_remove_by_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_by_value");
    group.sample_size(20);

    for &log_size in &[10, 13] {
        let values = generate_values(1 << log_size, 777 + log_size as u64);
        let victims: Vec<u64> = values.iter().step_by(7).copied().collect();
        let size_label = format!("2^{}", log_size);

        group.bench_with_input(
            BenchmarkId::new("indexed_binary", &size_label),
            &victims,
            |b, vs| {
                b.iter(|| {
                    let mut heap = IndexedMinHeap::from_vec(values.clone());
                    for v in vs {
                        heap.remove(v);
                    }
                    black_box(heap.len())
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("std_binary_heap_retain", &size_label),
            &victims,
            |b, vs| {
                b.iter(|| {
                    let mut heap: BinaryHeap<Reverse<u64>> =
                        values.iter().copied().map(Reverse).collect();
                    for v in vs {
                        let mut removed = false;
                        heap.retain(|Reverse(x)| {
                            if !removed && x == v {
                                removed = true;
                                false
                            } else {
                                true
                            }
                        });
                    }
                    black_box(heap.len())
                })
            },
        );
    }

    group.finish();
}

fn benchmark_poll_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("poll_drain");

    for &log_size in &[10, 14] {
        let values = generate_values(1 << log_size, 4242 + log_size as u64);
        let size_label = format!("2^{}", log_size);

        group.bench_with_input(
            BenchmarkId::new("indexed_binary", &size_label),
            &values,
            |b, vs| b.iter(|| black_box(IndexedMinHeap::from_vec(vs.clone()).into_sorted_vec())),
        );
        group.bench_with_input(
            BenchmarkId::new("std_binary_heap", &size_label),
            &values,
            |b, vs| {
                b.iter(|| {
                    black_box(
                        vs.iter()
                            .copied()
                            .map(Reverse)
                            .collect::<BinaryHeap<_>>()
                            .into_sorted_vec(),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_remove_by_value,
    benchmark_poll_drain,
);

criterion_main!(benches);
