use criterion::{criterion_group, criterion_main, Criterion};
use matgeo_math::eigen::{eig_2x2, eig_sym_3x3};
use matgeo_math::linalg::{rank, solve_3x3};
use matgeo_math::quadrature::trapezoid;
use ndarray::Array2;
use std::hint::black_box;

fn bench_solve_3x3(c: &mut Criterion) {
    let m = [[5.0, -1.0, 4.0], [2.0, 3.0, 5.0], [5.0, -2.0, 6.0]];
    let b = [5.0, 2.0, -1.0];

    c.bench_function("solve_3x3", |bch| {
        bch.iter(|| solve_3x3(black_box(&m), black_box(&b)))
    });
}

fn bench_eigen(c: &mut Criterion) {
    let m2 = [[2.0, 3.0], [3.0, 2.0]];
    let m3 = ndarray::array![[6.0, -2.0, 2.0], [-2.0, 3.0, -1.0], [2.0, -1.0, 3.0]];

    let mut group = c.benchmark_group("eigen");
    group.bench_function("eig_2x2", |b| b.iter(|| eig_2x2(black_box(&m2))));
    group.bench_function("eig_sym_3x3_jacobi", |b| {
        b.iter(|| eig_sym_3x3(black_box(&m3)))
    });
    group.finish();
}

fn bench_rank_8x8(c: &mut Criterion) {
    // rank-3 matrix padded with dependent rows
    let base = Array2::from_shape_fn((8, 8), |(i, j)| ((i % 3 + 1) * (j + 1)) as f64);

    c.bench_function("rank_8x8", |b| b.iter(|| rank(black_box(&base))));
}

fn bench_trapezoid_10k(c: &mut Criterion) {
    c.bench_function("trapezoid_sqrt_10k", |b| {
        b.iter(|| trapezoid(|x| (9.0 * x).sqrt(), black_box(2.0), black_box(4.0), 10_000))
    });
}

criterion_group!(
    benches,
    bench_solve_3x3,
    bench_eigen,
    bench_rank_8x8,
    bench_trapezoid_10k
);
criterion_main!(benches);
