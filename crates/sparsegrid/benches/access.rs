//! Benchmarks for cell access and traversal.
//!
//! # Benchmarks
//!
//! - **`write_diagonal`**: Fills `n` cells along a diagonal through cell handles.
//! - **`read_unoccupied`**: Reads `n` cells that were never written.
//! - **`read_occupied`**: Reads back `n` previously written cells.
//! - **`traverse`**: Walks every occupied cell of a matrix holding `n` cells.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench access
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sparsegrid::SparseMatrix;

const SIZES: [i64; 3] = [100, 1_000, 10_000];

fn diagonal(n: i64) -> SparseMatrix<i64> {
    let mut matrix = SparseMatrix::new();
    for i in 0..n {
        matrix.set(i, -i, i + 1);
    }
    matrix
}

fn bench_write(c: &mut Criterion) {
    for n in SIZES {
        c.bench_with_input(BenchmarkId::new("write_diagonal", n), &n, |b, &n| {
            b.iter_batched(
                SparseMatrix::<i64>::new,
                |mut matrix| {
                    for i in 0..n {
                        matrix.row_mut(i).cell(i).set(hint::black_box(i + 1));
                    }
                    matrix
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_read(c: &mut Criterion) {
    for n in SIZES {
        let matrix = diagonal(n);
        c.bench_with_input(BenchmarkId::new("read_unoccupied", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0;
                for i in 0..n {
                    sum += matrix.get(hint::black_box(i), hint::black_box(i + 1));
                }
                sum
            });
        });
        c.bench_with_input(BenchmarkId::new("read_occupied", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0;
                for i in 0..n {
                    sum += matrix.row(hint::black_box(i)).cell(-i).get();
                }
                sum
            });
        });
    }
}

fn bench_traverse(c: &mut Criterion) {
    for n in SIZES {
        let matrix = diagonal(n);
        c.bench_with_input(BenchmarkId::new("traverse", n), &matrix, |b, matrix| {
            b.iter(|| matrix.iter().map(|(_, _, value)| value).sum::<i64>());
        });
    }
}

criterion_group!(benches, bench_write, bench_read, bench_traverse);
criterion_main!(benches);
