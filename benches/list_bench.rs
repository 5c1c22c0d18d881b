//! Performance benchmarks for the list operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stout_list::StoutList;

/// Deterministic scramble of `0..n`, so benches need no RNG dependency.
fn scrambled(n: usize) -> Vec<usize> {
    (0..n).map(|i| (i * 7919) % n).collect()
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for &node_size in &[4usize, 16, 64] {
        group.bench_function(format!("node_size={}", node_size), |b| {
            b.iter(|| {
                let mut list = StoutList::with_node_size(node_size).unwrap();
                for i in 0..10_000usize {
                    list.push_back(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn bench_mid_insert(c: &mut Criterion) {
    c.bench_function("insert_mid_1000", |b| {
        b.iter(|| {
            let mut list = StoutList::with_node_size(16).unwrap();
            for i in 0..1_000usize {
                list.insert(list.len() / 2, black_box(i)).unwrap();
            }
            list
        });
    });
}

fn bench_sort(c: &mut Criterion) {
    let values = scrambled(10_000);
    c.bench_function("sort_10000", |b| {
        b.iter(|| {
            let mut list = StoutList::with_node_size(16).unwrap();
            list.extend(values.iter().copied());
            list.sort();
            list
        });
    });
}

fn bench_iterate(c: &mut Criterion) {
    let mut list = StoutList::with_node_size(16).unwrap();
    list.extend(0..10_000usize);
    c.bench_function("iterate_10000", |b| {
        b.iter(|| list.iter().sum::<usize>());
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_mid_insert,
    bench_sort,
    bench_iterate
);
criterion_main!(benches);
