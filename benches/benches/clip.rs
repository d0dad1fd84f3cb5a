// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use planar_clip::{WindowBounds, clip_polygon, clip_segment};
use planar_transform::Point;

const WINDOW: WindowBounds = WindowBounds::new(0.0, 0.0, 100.0, 100.0);

fn bench_clip_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip/segment");

    // Trivial accept, one and two boundary moves, trivial reject, and a
    // corner case that needs moves on both endpoints before rejecting.
    let cases = [
        ("inside", Point::new(10.0, 20.0), Point::new(90.0, 80.0)),
        ("one_end_out", Point::new(-10.0, 50.0), Point::new(50.0, 50.0)),
        ("crossing", Point::new(-50.0, -20.0), Point::new(150.0, 130.0)),
        ("rejected", Point::new(150.0, 150.0), Point::new(200.0, 200.0)),
        ("corner_miss", Point::new(-50.0, 50.0), Point::new(50.0, 200.0)),
    ];
    for (name, p1, p2) in cases {
        group.bench_function(name, |b| {
            b.iter(|| clip_segment(black_box(p1), black_box(p2), black_box(&WINDOW)));
        });
    }

    group.finish();
}

fn bench_clip_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip/polygon");

    // Regular polygons centred on the window's right edge: about half of
    // every polygon lies outside.
    for n in [8usize, 64, 512] {
        let vertices: Vec<Point> = (0..n)
            .map(|i| {
                let t = (i as f64) / (n as f64) * core::f64::consts::TAU;
                Point::new(100.0 + 40.0 * t.cos(), 50.0 + 40.0 * t.sin())
            })
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &vertices, |b, vertices| {
            b.iter(|| clip_polygon(black_box(vertices), &WINDOW).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clip_segment, bench_clip_polygon);
criterion_main!(benches);
