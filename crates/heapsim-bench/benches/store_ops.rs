//! Criterion micro-benchmarks for vector appends, growth and indexed access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use heapsim_arena::BumpArena;
use heapsim_bench::{arena_for_appends, filled_vector};
use heapsim_store::{ArrayStore, VectorStore};

/// Benchmark: 10K appends from an empty vector, growth included.
fn bench_append_from_empty_10k(c: &mut Criterion) {
    c.bench_function("append_from_empty_10k", |b| {
        b.iter_batched(
            || VectorStore::new(arena_for_appends(10_000).unwrap()),
            |mut store| {
                let v = store.create(0).unwrap();
                for i in 0..10_000 {
                    store.append(v, i).unwrap();
                }
                black_box(store.length(v).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 10K appends into a presized vector, no growth.
fn bench_append_presized_10k(c: &mut Criterion) {
    c.bench_function("append_presized_10k", |b| {
        b.iter_batched(
            || VectorStore::new(BumpArena::with_capacity(12 + 10_000 * 4).unwrap()),
            |mut store| {
                let v = store.create(10_000).unwrap();
                for i in 0..10_000 {
                    store.append(v, i).unwrap();
                }
                black_box(store.length(v).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: sequential reads over a 10K-element vector.
fn bench_vector_get_10k(c: &mut Criterion) {
    let (store, v) = filled_vector(10_000).unwrap();
    c.bench_function("vector_get_10k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..10_000 {
                sum += i64::from(store.get(v, i).unwrap());
            }
            black_box(sum);
        });
    });
}

/// Benchmark: set/get round trip over a 10K-element array.
fn bench_array_set_get_10k(c: &mut Criterion) {
    let mut store = ArrayStore::new(BumpArena::with_capacity(4 + 10_000 * 4).unwrap());
    let a = store.create(10_000, 4).unwrap();
    c.bench_function("array_set_get_10k", |b| {
        b.iter(|| {
            for i in 0..10_000 {
                store.set_int(a, i, i).unwrap();
            }
            black_box(store.get_int(a, 9_999).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_append_from_empty_10k,
    bench_append_presized_10k,
    bench_vector_get_10k,
    bench_array_set_get_10k
);
criterion_main!(benches);
