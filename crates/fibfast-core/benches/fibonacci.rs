//! Criterion benchmarks for index and value resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;

use fibfast_core::{find, get, iterator, FibState, LinearSteps};

fn bench_get(c: &mut Criterion) {
    // Powers of two skip the linear phase; 2^d - 1 has the largest residual.
    let ks: Vec<u64> = vec![1_024, 2_047, 16_384, 32_767, 100_000];

    let mut group = c.benchmark_group("get");
    for &k in &ks {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| get(black_box(k)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("linear_only");
    for &k in &ks {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| LinearSteps::new(FibState::origin()).forward(black_box(k)));
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let ks: Vec<u64> = vec![1_000, 10_000, 50_000];

    let mut group = c.benchmark_group("find");
    for &k in &ks {
        let value = BigInt::from(get(k).number);
        group.bench_with_input(BenchmarkId::from_parameter(k), &value, |b, value| {
            b.iter(|| find(black_box(value)));
        });
    }
    group.finish();
}

fn bench_iterator(c: &mut Criterion) {
    c.bench_function("iterator_1k_from_100k", |b| {
        b.iter(|| iterator(Some(black_box(100_000)), Some(1_000)).count());
    });
}

criterion_group!(benches, bench_get, bench_find, bench_iterator);
criterion_main!(benches);
