// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use planar_scene::{Session, Target, TransformRequest};
use planar_transform::{Point, Primitive};

/// A default session with `n` lines and `n` triangles on a grid that spills
/// past the window on every side.
fn populated(n: usize) -> Session {
    let mut session = Session::default();
    let scene = session.scene_mut();
    for i in 0..n {
        let x = (i % 32) as f64 * 30.0 - 100.0;
        let y = (i / 32 % 24) as f64 * 30.0 - 100.0;
        scene.add_line(None, Point::new(x, y), Point::new(x + 45.0, y + 20.0));
        scene
            .add_polygon(
                None,
                vec![
                    Point::new(x, y),
                    Point::new(x + 25.0, y),
                    Point::new(x, y + 25.0),
                ],
            )
            .unwrap();
    }
    session
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/render");

    for n in [16usize, 256, 2_048] {
        let mut session = populated(n);
        group.throughput(Throughput::Elements(2 * n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(session.render()));
        });
    }

    group.finish();
}

fn bench_window_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/window_transform");

    for n in [256usize, 2_048] {
        group.throughput(Throughput::Elements(2 * n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || populated(n),
                |mut session| {
                    session
                        .apply(TransformRequest::new(
                            Primitive::Rotation { degrees: 15.0 },
                            Target::Window,
                        ))
                        .unwrap();
                    black_box(session);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_window_transform);
criterion_main!(benches);
