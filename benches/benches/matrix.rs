// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use planar_transform::{Matrix, Point, Primitive};

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix/multiply");

    let a = Matrix::rotation(30.0);
    let b = Matrix::translation(5.0, -3.0);
    group.bench_function("3x3", |bench| {
        bench.iter(|| black_box(&a).multiply(black_box(&b)));
    });

    let column = Point::new(4.0, 2.0).to_homogeneous();
    group.bench_function("3x3_by_3x1", |bench| {
        bench.iter(|| black_box(&a).multiply(black_box(&column)));
    });

    let pivot = Point::new(50.0, 50.0);
    group.bench_function("compose_around_pivot", |bench| {
        bench.iter(|| Primitive::Rotation { degrees: 30.0 }.around(black_box(pivot)));
    });

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
