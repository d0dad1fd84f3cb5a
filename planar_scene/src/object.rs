// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphic objects and their shapes.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use planar_clip::WindowBounds;
use planar_transform::{Matrix, Point};

/// The four kinds of graphic object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A single vertex.
    Point,
    /// Two vertices joined by a segment.
    Line,
    /// Two or more vertices; three or more close back to the first.
    Polygon,
    /// The axis-aligned clip window.
    Window,
}

impl ObjectKind {
    /// Human-readable kind name, as shown in list labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Line => "Line",
            Self::Polygon => "Polygon",
            Self::Window => "Window",
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Window => "window",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vertex list does not fit the requested kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeError {
    /// The kind that was requested.
    pub kind: ObjectKind,
    /// Number of vertices supplied.
    pub found: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = match self.kind {
            ObjectKind::Point => "exactly 1",
            ObjectKind::Line => "exactly 2",
            ObjectKind::Polygon => "at least 2",
            ObjectKind::Window => "exactly 4",
        };
        write!(
            f,
            "a {} needs {expected} vertices, got {}",
            self.kind.noun(),
            self.found
        )
    }
}

impl core::error::Error for ShapeError {}

/// An open or closed vertex loop with at least two vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] for fewer than two vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self, ShapeError> {
        if vertices.len() < 2 {
            return Err(ShapeError {
                kind: ObjectKind::Polygon,
                found: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// The vertices in connection order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

/// The clip window as four axis-aligned corners.
///
/// Corners are always `(xmin,ymin)`, `(xmax,ymin)`, `(xmax,ymax)`,
/// `(xmin,ymax)` with `xmin <= xmax` and `ymin <= ymax`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowRegion {
    corners: [Point; 4],
}

impl WindowRegion {
    /// Creates a window from bounds, normalizing reversed edges.
    #[must_use]
    pub fn from_bounds(bounds: WindowBounds) -> Self {
        let normalized = WindowBounds::from_corners(
            Point::new(bounds.xmin, bounds.ymin),
            Point::new(bounds.xmax, bounds.ymax),
        );
        Self {
            corners: normalized.corners(),
        }
    }

    /// Creates a window spanning two opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::from_bounds(WindowBounds::from_corners(a, b))
    }

    /// The window's bounds.
    #[must_use]
    pub fn bounds(&self) -> WindowBounds {
        let [min, _, max, _] = self.corners;
        WindowBounds::new(min.x, min.y, max.x, max.y)
    }

    /// The four corners, counter-clockwise from `(xmin, ymin)`.
    #[must_use]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }
}

/// Geometry of a graphic object, with per-kind vertex counts.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// One vertex.
    Point(Point),
    /// Two vertices.
    Line([Point; 2]),
    /// Two or more vertices.
    Polygon(Polygon),
    /// Four axis-aligned corners.
    Window(WindowRegion),
}

impl Shape {
    /// Builds a shape of `kind` from a collected vertex list.
    ///
    /// A window takes the bounding box of its four vertices, so the corners
    /// may come in any order.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] when the vertex count does not fit `kind`.
    pub fn from_vertices(kind: ObjectKind, vertices: Vec<Point>) -> Result<Self, ShapeError> {
        if kind == ObjectKind::Polygon {
            return Polygon::new(vertices).map(Self::Polygon);
        }
        match (kind, vertices.as_slice()) {
            (ObjectKind::Point, &[p]) => Ok(Self::Point(p)),
            (ObjectKind::Line, &[a, b]) => Ok(Self::Line([a, b])),
            (ObjectKind::Window, &[a, b, c, d]) => {
                Ok(Self::Window(WindowRegion::from_bounds(span(a, &[b, c, d]))))
            }
            _ => Err(ShapeError {
                kind,
                found: vertices.len(),
            }),
        }
    }

    /// The kind of this shape.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Point(_) => ObjectKind::Point,
            Self::Line(_) => ObjectKind::Line,
            Self::Polygon(_) => ObjectKind::Polygon,
            Self::Window(_) => ObjectKind::Window,
        }
    }

    /// All vertices in connection order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        match self {
            Self::Point(p) => core::slice::from_ref(p),
            Self::Line(ends) => ends,
            Self::Polygon(polygon) => polygon.vertices(),
            Self::Window(region) => region.corners(),
        }
    }

    /// Axis-aligned bounding box of the vertices.
    #[must_use]
    pub fn bounds(&self) -> WindowBounds {
        match self {
            Self::Point(p) => span(*p, &[]),
            Self::Line([a, b]) => span(*a, core::slice::from_ref(b)),
            // Polygons hold at least two vertices.
            Self::Polygon(polygon) => span(polygon.vertices[0], &polygon.vertices[1..]),
            Self::Window(region) => region.bounds(),
        }
    }

    /// Unweighted mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Point {
        match self {
            Self::Point(p) => *p,
            _ => Point::mean(self.vertices()),
        }
    }

    /// Replaces every vertex `p` with `matrix · p`.
    ///
    /// A window is re-normalized to the bounding box of its transformed
    /// corners, so a rotated window grows instead of turning.
    ///
    /// # Panics
    ///
    /// Panics if `matrix` is not 3×3.
    pub fn apply_transform(&mut self, matrix: &Matrix) {
        match self {
            Self::Point(p) => *p = matrix * *p,
            Self::Line(ends) => ends.iter_mut().for_each(|p| *p = matrix * *p),
            Self::Polygon(polygon) => polygon
                .vertices
                .iter_mut()
                .for_each(|p| *p = matrix * *p),
            Self::Window(region) => {
                let moved = region.corners.map(|p| matrix * p);
                if let Some(bounds) = WindowBounds::enclosing(&moved) {
                    *region = WindowRegion::from_bounds(bounds);
                }
            }
        }
    }
}

fn span(first: Point, rest: &[Point]) -> WindowBounds {
    rest.iter().fold(
        WindowBounds::new(first.x, first.y, first.x, first.y),
        |b, p| {
            WindowBounds::new(
                b.xmin.min(p.x),
                b.ymin.min(p.y),
                b.xmax.max(p.x),
                b.ymax.max(p.y),
            )
        },
    )
}

/// A named, individually hideable piece of scene geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicObject {
    name: String,
    shape: Shape,
    visible: bool,
}

impl GraphicObject {
    /// Creates a visible object.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            visible: true,
        }
    }

    /// Display name. Names need not be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the object.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The object's geometry.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Shorthand for `self.shape().kind()`.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.shape.kind()
    }

    /// Whether the object takes part in rendering.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the object.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// See [`Shape::centroid`].
    #[must_use]
    pub fn centroid(&self) -> Point {
        self.shape.centroid()
    }

    /// See [`Shape::apply_transform`].
    pub fn apply_transform(&mut self, matrix: &Matrix) {
        self.shape.apply_transform(matrix);
    }
}
