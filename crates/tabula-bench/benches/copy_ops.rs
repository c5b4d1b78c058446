//! Criterion micro-benchmarks for List2D copies and conversion.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tabula_bench::square_list;
use tabula_core::{Bounds2D, Index2D};
use tabula_grid::Array2D;

/// Benchmark: Export a 316x316 list with row gaps to a packed Array2D.
fn bench_to_array_100k(c: &mut Criterion) {
    let list = square_list(316, 1000);

    c.bench_function("to_array_2d_100k", |b| {
        b.iter(|| black_box(list.to_array_2d().unwrap()));
    });
}

/// Benchmark: Copy a 100x100 sector into a preallocated Array2D.
fn bench_copy_sector_10k(c: &mut Criterion) {
    let list = square_list(316, 1000);
    let mut target = Array2D::<u64>::new(Bounds2D::new(100, 100)).unwrap();

    c.bench_function("copy_sector_10k", |b| {
        b.iter(|| {
            list.copy_sector_from_to(
                Index2D::new(50, 50),
                Bounds2D::new(100, 100),
                &mut target,
                Index2D::ORIGIN,
            )
            .unwrap();
            black_box(target.as_slice()[0]);
        });
    });
}

/// Benchmark: Row-major iteration sum over ~100K cells.
fn bench_iter_sum_100k(c: &mut Criterion) {
    let list = square_list(316, 1000);

    c.bench_function("iter_sum_100k", |b| {
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });
}

/// Benchmark: Convert ~100K cells to f64.
fn bench_convert_all_100k(c: &mut Criterion) {
    let list = square_list(316, 1000);

    c.bench_function("convert_all_100k", |b| {
        b.iter(|| black_box(list.convert_all(|v: &u64| *v as f64).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_to_array_100k,
    bench_copy_sector_10k,
    bench_iter_sum_100k,
    bench_convert_all_100k
);
criterion_main!(benches);
