// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for transforming the window.
//!
//! Moving, scaling or rotating the window never changes the window's own
//! corners; the inverse transform is applied to every other object instead.

use planar_clip::WindowBounds;
use planar_scene::{Scene, Target, TransformRequest};
use planar_transform::{Point, Primitive, compose_around_pivot};

fn assert_near(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

fn populated() -> Scene {
    let mut scene = Scene::new(WindowBounds::new(0.0, 0.0, 100.0, 100.0));
    scene.add_point(None, Point::new(80.0, 20.0));
    scene.add_line(None, Point::new(10.0, 10.0), Point::new(90.0, 60.0));
    scene
        .add_polygon(
            None,
            vec![
                Point::new(0.0, 0.0),
                Point::new(6.0, 0.0),
                Point::new(0.0, 6.0),
            ],
        )
        .unwrap();
    scene
}

fn vertices(scene: &Scene) -> Vec<Vec<Point>> {
    scene
        .ids()
        .map(|id| scene.get(id.into()).unwrap().shape().vertices().to_vec())
        .collect()
}

#[test]
fn window_scale_applies_inverse_scale_about_window_centroid() {
    let mut scene = populated();
    let window_before = scene.window().clone();
    let before = vertices(&scene);

    scene
        .apply(TransformRequest::new(
            Primitive::Scale { sx: 2.0, sy: 2.0 },
            Target::Window,
        ))
        .unwrap();

    let expected = compose_around_pivot(
        Primitive::Scale { sx: 0.5, sy: 0.5 },
        Point::new(50.0, 50.0),
    );
    for (old, new) in before.iter().zip(vertices(&scene)) {
        for (&p, q) in old.iter().zip(new) {
            assert_near(q, &expected * p);
        }
    }
    assert_eq!(scene.window(), &window_before);
}

#[test]
fn window_scale_only_in_x() {
    let mut scene = populated();
    scene
        .apply(TransformRequest::new(
            Primitive::Scale { sx: 2.0, sy: 1.0 },
            Target::Window,
        ))
        .unwrap();
    let first = scene.ids().next().unwrap();
    // (80, 20) about (50, 50): x halves its offset, y is untouched.
    assert_near(scene.centroid(first.into()).unwrap(), Point::new(65.0, 20.0));
}

#[test]
fn window_rotation_rotates_the_world_backwards() {
    let mut scene = populated();
    let first = scene.ids().next().unwrap();
    scene
        .apply(TransformRequest::new(
            Primitive::Rotation { degrees: 90.0 },
            Target::Window,
        ))
        .unwrap();
    // (80, 20) is (30, -30) from the centre; a -90° turn takes it to (-30, -30).
    assert_near(scene.centroid(first.into()).unwrap(), Point::new(20.0, 20.0));
    assert_eq!(
        scene.window_bounds(),
        WindowBounds::new(0.0, 0.0, 100.0, 100.0)
    );
}

#[test]
fn window_rotation_honours_explicit_pivot() {
    let mut scene = populated();
    let first = scene.ids().next().unwrap();
    scene
        .apply(
            TransformRequest::new(Primitive::Rotation { degrees: 180.0 }, Target::Window)
                .with_pivot(Point::new(80.0, 0.0)),
        )
        .unwrap();
    assert_near(scene.centroid(first.into()).unwrap(), Point::new(80.0, -20.0));
}

#[test]
fn window_then_object_transforms_compose() {
    let mut scene = populated();
    let first = scene.ids().next().unwrap();

    scene
        .apply(TransformRequest::new(
            Primitive::Translation { dx: 10.0, dy: 0.0 },
            Target::Window,
        ))
        .unwrap();
    scene
        .apply(TransformRequest::new(
            Primitive::Translation { dx: 10.0, dy: 0.0 },
            first,
        ))
        .unwrap();

    // Moving the window right and the point right cancel out for the point.
    assert_eq!(scene.centroid(first.into()), Some(Point::new(80.0, 20.0)));
}
