//! Benchmarks for the lazy-deletion queue.
//!
//! Run with: cargo bench
//!
//! The cancel-heavy workload mirrors the intended use: schedulers where most
//! entries are superseded or removed before they reach the front.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use schedq::LazyQueue;

const N: usize = 10_000;

fn scrambled_score(i: usize) -> f64 {
    ((i * 7 + 13) % N) as f64
}

fn bench_insert_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_drain");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("schedq", |b| {
        b.iter(|| {
            let mut queue: LazyQueue<u64> = LazyQueue::with_capacity(N);
            for i in 0..N {
                queue.insert(i as u64, scrambled_score(i));
            }
            while let Some(item) = queue.pop() {
                black_box(item);
            }
        })
    });

    group.finish();
}

fn bench_cancel_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancel_heavy");
    group.throughput(Throughput::Elements(N as u64));

    // Insert N, cancel three quarters, drain the rest
    group.bench_function("schedq", |b| {
        b.iter(|| {
            let mut queue: LazyQueue<u64> = LazyQueue::with_capacity(N);
            for i in 0..N {
                queue.insert(i as u64, scrambled_score(i));
            }
            for i in 0..N {
                if i % 4 != 0 {
                    let _ = queue.remove(&(i as u64));
                }
            }
            while let Some(item) = queue.pop() {
                black_box(item);
            }
        })
    });

    group.finish();
}

fn bench_upsert_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert_churn");
    group.throughput(Throughput::Elements(N as u64));

    // Re-prioritize a small working set over and over
    group.bench_function("schedq", |b| {
        b.iter(|| {
            let mut queue: LazyQueue<u64> = LazyQueue::with_capacity(N);
            for i in 0..N {
                queue.insert((i % 64) as u64, scrambled_score(i));
            }
            while let Some(item) = queue.pop() {
                black_box(item);
            }
        })
    });

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("schedq", |b| {
        let mut queue: LazyQueue<u64> = LazyQueue::with_capacity(N);
        for i in 0..N {
            queue.insert(i as u64, scrambled_score(i));
        }

        b.iter(|| {
            for i in 0..N {
                black_box(queue.contains(&(i as u64)));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_drain,
    bench_cancel_heavy,
    bench_upsert_churn,
    bench_contains
);
criterion_main!(benches);
