// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment, point and polygon-edge clipping.

use kurbo::Line;
use planar_transform::Point;

use crate::{RegionCode, WindowBounds};

/// Upper bound on boundary moves in [`clip_segment`].
///
/// Four moves suffice with exact arithmetic (two per endpoint); the slack
/// absorbs rounding that lands a moved endpoint a hair outside a neighbouring
/// edge.
const MAX_CLIP_STEPS: usize = 8;

/// A straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Segment {
    /// Creates a segment.
    #[inline]
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl From<Segment> for Line {
    fn from(s: Segment) -> Self {
        Self::new(s.start, s.end)
    }
}

/// Clips the segment `p1`–`p2` against `bounds` (Cohen-Sutherland).
///
/// Returns the visible part, or `None` when nothing of the segment is inside
/// the window. The inputs are not modified.
///
/// While either endpoint is outside, the endpoint to move is `p1` if its code
/// is non-zero, otherwise `p2`. It is moved onto exactly one boundary, chosen
/// by testing its code in the order TOP, BOTTOM, RIGHT, LEFT; the intersection
/// is always parameterized from the current `p1` towards the current `p2`.
/// Both endpoints sharing an outside half-plane rejects the segment, as does
/// a NaN or infinite coordinate on either endpoint.
///
/// ```
/// use planar_clip::{WindowBounds, clip_segment};
/// use planar_transform::Point;
///
/// let window = WindowBounds::new(0.0, 0.0, 100.0, 100.0);
/// let clipped = clip_segment(Point::new(-10.0, 50.0), Point::new(50.0, 50.0), &window).unwrap();
/// assert_eq!(clipped.start, Point::new(0.0, 50.0));
/// assert_eq!(clipped.end, Point::new(50.0, 50.0));
/// ```
#[must_use]
pub fn clip_segment(p1: Point, p2: Point, bounds: &WindowBounds) -> Option<Segment> {
    if !is_finite(p1) || !is_finite(p2) {
        log::trace!("clip_segment rejected non-finite input: {p1:?} {p2:?}");
        return None;
    }
    let (mut p1, mut p2) = (p1, p2);
    let mut code1 = RegionCode::of(p1, bounds);
    let mut code2 = RegionCode::of(p2, bounds);

    for _ in 0..=MAX_CLIP_STEPS {
        if code1.is_inside() && code2.is_inside() {
            return Some(Segment::new(p1, p2));
        }
        if code1.intersects(code2) {
            return None;
        }

        let move_p1 = !code1.is_inside();
        let code_out = if move_p1 { code1 } else { code2 };
        let moved = intersect_boundary(p1, p2, code_out, bounds);
        if move_p1 {
            p1 = moved;
            code1 = RegionCode::of(p1, bounds);
        } else {
            p2 = moved;
            code2 = RegionCode::of(p2, bounds);
        }
    }

    log::trace!("clip_segment gave up after {MAX_CLIP_STEPS} steps: {p1:?} {p2:?}");
    None
}

/// Intersection of the line `p1`–`p2` with the single boundary selected by
/// `code_out`.
fn intersect_boundary(p1: Point, p2: Point, code_out: RegionCode, bounds: &WindowBounds) -> Point {
    if code_out.contains(RegionCode::TOP) {
        let x = p1.x + (p2.x - p1.x) * (bounds.ymax - p1.y) / (p2.y - p1.y);
        Point::new(x, bounds.ymax)
    } else if code_out.contains(RegionCode::BOTTOM) {
        let x = p1.x + (p2.x - p1.x) * (bounds.ymin - p1.y) / (p2.y - p1.y);
        Point::new(x, bounds.ymin)
    } else if code_out.contains(RegionCode::RIGHT) {
        let y = p1.y + (p2.y - p1.y) * (bounds.xmax - p1.x) / (p2.x - p1.x);
        Point::new(bounds.xmax, y)
    } else {
        let y = p1.y + (p2.y - p1.y) * (bounds.xmin - p1.x) / (p2.x - p1.x);
        Point::new(bounds.xmin, y)
    }
}

/// Returns `true` if `p` lies inside `bounds` or on its border.
///
/// A point with a NaN or infinite coordinate is never inside.
#[must_use]
pub fn clip_point(p: Point, bounds: &WindowBounds) -> bool {
    is_finite(p) && RegionCode::of(p, bounds).is_inside()
}

// `RegionCode::of` classifies NaN as inside.
fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Edges of a vertex loop, in vertex order.
///
/// Two vertices give a single edge; three or more close back to the first
/// vertex. Fewer than two give nothing.
pub fn polygon_edges(vertices: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = vertices.len();
    let count = match n {
        0 | 1 => 0,
        2 => 1,
        _ => n,
    };
    (0..count).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % n]))
}

/// Clips every edge of a vertex loop independently.
///
/// Only accepted pieces are yielded. Edges are not reconnected, so a polygon
/// crossing the window comes out as separate visible pieces rather than a
/// closed clipped polygon.
pub fn clip_polygon<'a>(
    vertices: &'a [Point],
    bounds: &'a WindowBounds,
) -> impl Iterator<Item = Segment> + 'a {
    polygon_edges(vertices).filter_map(move |edge| clip_segment(edge.start, edge.end, bounds))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const WINDOW: WindowBounds = WindowBounds::new(0.0, 0.0, 100.0, 100.0);

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    fn clip(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Segment> {
        clip_segment(Point::new(x1, y1), Point::new(x2, y2), &WINDOW)
    }

    #[test]
    fn fully_inside_is_accepted_unchanged() {
        let s = clip(10.0, 20.0, 90.0, 80.0).unwrap();
        assert_eq!(s, Segment::new(Point::new(10.0, 20.0), Point::new(90.0, 80.0)));
    }

    #[test]
    fn left_crossing_moves_only_the_outside_endpoint() {
        let s = clip(-10.0, 50.0, 50.0, 50.0).unwrap();
        assert_eq!(s.start, Point::new(0.0, 50.0));
        assert_eq!(s.end, Point::new(50.0, 50.0));
    }

    #[test]
    fn shared_outside_region_is_rejected() {
        assert_eq!(clip(150.0, 150.0, 200.0, 200.0), None);
        assert_eq!(clip(-5.0, 10.0, -1.0, 90.0), None);
    }

    #[test]
    fn segment_through_window_is_clipped_at_both_ends() {
        let s = clip(-50.0, 50.0, 150.0, 50.0).unwrap();
        assert_eq!(s.start, Point::new(0.0, 50.0));
        assert_eq!(s.end, Point::new(100.0, 50.0));

        // Vertical: both TOP/BOTTOM clips, no division by a zero dx.
        let s = clip(50.0, -20.0, 50.0, 120.0).unwrap();
        assert_eq!(s.start, Point::new(50.0, 0.0));
        assert_eq!(s.end, Point::new(50.0, 100.0));
    }

    #[test]
    fn corner_endpoint_clips_top_before_left() {
        // p1 sits in the LEFT|TOP corner; TOP is resolved first, which lands
        // at x = -10, then LEFT brings it to (0, 90).
        let s = clip(-20.0, 110.0, 50.0, 40.0).unwrap();
        assert_near(s.start, Point::new(0.0, 90.0));
        assert_eq!(s.end, Point::new(50.0, 40.0));

        // Here TOP alone already reaches the window corner.
        let s = clip(-10.0, 110.0, 50.0, 50.0).unwrap();
        assert_near(s.start, Point::new(0.0, 100.0));
    }

    #[test]
    fn segment_passing_a_corner_outside_is_rejected_after_clipping() {
        // Codes LEFT and TOP share no bit, but the line misses the window.
        assert_eq!(clip(-50.0, 50.0, 50.0, 200.0), None);
    }

    #[test]
    fn both_corner_endpoints_follow_boundary_priority() {
        // p1 is LEFT|BOTTOM: BOTTOM lands at (-23.3, 0), then LEFT at (0, 17.5).
        // p2 is RIGHT|TOP: TOP lands at (110, 100), then RIGHT at (100, 92.5).
        let s = clip(-50.0, -20.0, 150.0, 130.0).unwrap();
        assert_near(s.start, Point::new(0.0, 17.5));
        assert_near(s.end, Point::new(100.0, 92.5));
    }

    #[test]
    fn non_finite_endpoints_are_rejected() {
        assert_eq!(clip(f64::NAN, 50.0, 50.0, 50.0), None);
        assert_eq!(clip(50.0, 50.0, 50.0, f64::NAN), None);
        assert_eq!(clip(f64::INFINITY, 50.0, 50.0, 50.0), None);
        assert_eq!(clip(10.0, 10.0, 20.0, f64::NEG_INFINITY), None);
        assert!(!clip_point(Point::new(f64::NAN, 50.0), &WINDOW));
        assert!(!clip_point(Point::new(50.0, f64::INFINITY), &WINDOW));
    }

    #[test]
    fn second_endpoint_is_moved_when_first_is_inside() {
        let s = clip(50.0, 50.0, 50.0, 150.0).unwrap();
        assert_eq!(s.start, Point::new(50.0, 50.0));
        assert_eq!(s.end, Point::new(50.0, 100.0));
    }

    #[test]
    fn border_segment_is_kept() {
        let s = clip(0.0, 0.0, 100.0, 0.0).unwrap();
        assert_eq!(s, Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
    }

    #[test]
    fn points_are_kept_inclusively() {
        assert!(clip_point(Point::new(0.0, 0.0), &WINDOW));
        assert!(clip_point(Point::new(100.0, 42.0), &WINDOW));
        assert!(!clip_point(Point::new(100.5, 42.0), &WINDOW));
        assert!(!clip_point(Point::new(50.0, -0.5), &WINDOW));
    }

    #[test]
    fn polygon_edges_close_loops_of_three_or_more() {
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let edges: Vec<_> = polygon_edges(&tri).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Segment::new(tri[2], tri[0]));

        let pair = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(polygon_edges(&pair).count(), 1);
        assert_eq!(polygon_edges(&pair[..1]).count(), 0);
        assert_eq!(polygon_edges(&[]).count(), 0);
    }

    #[test]
    fn polygon_is_clipped_edge_by_edge() {
        // A square straddling the right border: the edge fully outside is
        // dropped and the remaining three are cut back independently.
        let square = [
            Point::new(50.0, 20.0),
            Point::new(150.0, 20.0),
            Point::new(150.0, 80.0),
            Point::new(50.0, 80.0),
        ];
        let pieces: Vec<_> = clip_polygon(&square, &WINDOW).collect();
        assert_eq!(
            pieces,
            [
                Segment::new(Point::new(50.0, 20.0), Point::new(100.0, 20.0)),
                Segment::new(Point::new(100.0, 80.0), Point::new(50.0, 80.0)),
                Segment::new(Point::new(50.0, 80.0), Point::new(50.0, 20.0)),
            ]
        );
    }

    #[test]
    fn segment_converts_to_kurbo_line() {
        let line: Line = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)).into();
        assert_eq!(line, Line::new((1.0, 2.0), (3.0, 4.0)));
    }
}
