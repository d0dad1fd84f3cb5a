// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use planar_transform::Point;

/// Axis-aligned window bounds in world coordinates.
///
/// These four numbers are the only thing the clipper knows about a window.
/// Use [`WindowBounds::from_corners`] to get `xmin <= xmax` and `ymin <= ymax`
/// from arbitrary corners; [`WindowBounds::new`] stores its arguments as given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowBounds {
    /// Left edge.
    pub xmin: f64,
    /// Bottom edge (smallest y).
    pub ymin: f64,
    /// Right edge.
    pub xmax: f64,
    /// Top edge (largest y).
    pub ymax: f64,
}

impl WindowBounds {
    /// Creates bounds from explicit edges.
    #[inline]
    #[must_use]
    pub const fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Creates normalized bounds spanning two opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Smallest bounds containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            Self::new(first.x, first.y, first.x, first.y),
            |b, p| Self::new(b.xmin.min(p.x), b.ymin.min(p.y), b.xmax.max(p.x), b.ymax.max(p.y)),
        ))
    }

    /// `xmax - xmin`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// `ymax - ymin`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// The four corners in the order `(xmin,ymin)`, `(xmax,ymin)`,
    /// `(xmax,ymax)`, `(xmin,ymax)`.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ]
    }
}

impl From<Rect> for WindowBounds {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}

impl From<WindowBounds> for Rect {
    fn from(b: WindowBounds) -> Self {
        Self::new(b.xmin, b.ymin, b.xmax, b.ymax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes() {
        let b = WindowBounds::from_corners(Point::new(10.0, -5.0), Point::new(-2.0, 8.0));
        assert_eq!(b, WindowBounds::new(-2.0, -5.0, 10.0, 8.0));
        assert_eq!(b.width(), 12.0);
        assert_eq!(b.height(), 13.0);
    }

    #[test]
    fn corners_follow_window_vertex_order() {
        let b = WindowBounds::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(
            b.corners(),
            [
                Point::new(0.0, 1.0),
                Point::new(2.0, 1.0),
                Point::new(2.0, 3.0),
                Point::new(0.0, 3.0),
            ]
        );
    }

    #[test]
    fn enclosing_takes_extremes() {
        assert_eq!(WindowBounds::enclosing(&[]), None);
        let pts = [
            Point::new(3.0, 1.0),
            Point::new(-1.0, 4.0),
            Point::new(2.0, -6.0),
        ];
        assert_eq!(
            WindowBounds::enclosing(&pts),
            Some(WindowBounds::new(-1.0, -6.0, 3.0, 4.0))
        );
    }

    #[test]
    fn rect_round_trip_normalizes_reversed_rects() {
        let b = WindowBounds::from(Rect::new(100.0, 50.0, 0.0, 0.0));
        assert_eq!(b, WindowBounds::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(Rect::from(b), Rect::new(0.0, 0.0, 100.0, 50.0));
    }
}
