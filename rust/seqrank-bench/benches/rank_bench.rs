//! Criterion benchmarks for sequence construction and descending ranking.
//!
//! Measures the build+rank workload across sizes, plus the best case
//! (already descending, zero swaps) and the worst case (ascending, a swap
//! on every pair) of the ranking sweep alone.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use seqrank_core::sequence;

fn bench_build_rank(c: &mut Criterion) {
    let sizes = [10, 100, 1000, 10000];
    let mut group = c.benchmark_group("build_rank");

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut seq = sequence::build(black_box(size));
                sequence::rank_descending(&mut seq);
                black_box(seq.len())
            });
        });
    }

    group.finish();
}

fn bench_rank_best_case(c: &mut Criterion) {
    let sizes = [100, 1000, 10000];
    let mut group = c.benchmark_group("rank_descending_input");

    for size in sizes {
        let mut input = sequence::build(size);
        input.reverse();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut seq| {
                    sequence::rank_descending(&mut seq);
                    black_box(seq)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_rank_worst_case(c: &mut Criterion) {
    let sizes = [100, 1000, 10000];
    let mut group = c.benchmark_group("rank_ascending_input");

    for size in sizes {
        let input = sequence::build(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut seq| {
                    sequence::rank_descending(&mut seq);
                    black_box(seq)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_rank,
    bench_rank_best_case,
    bench_rank_worst_case
);
criterion_main!(benches);
