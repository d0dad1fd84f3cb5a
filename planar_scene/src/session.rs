// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor session and frame rendering.

use alloc::vec::Vec;

use kurbo::{Line, Size};
use planar_clip::{WindowBounds, clip_point, clip_polygon, clip_segment, polygon_edges};
use planar_transform::{Matrix, Point};
use planar_view2d::CoordinateTransformer;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::{Scene, SceneError, Shape, Target, TransformRequest};

/// Initial geometry of a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Size of the drawing surface in device pixels.
    pub canvas: Size,
    /// Inset of the initial window and viewport from every canvas edge.
    pub padding: f64,
}

impl SessionConfig {
    /// The inset rectangle `(padding, padding, width - padding, height - padding)`.
    #[must_use]
    pub fn inset_bounds(&self) -> WindowBounds {
        WindowBounds::new(
            self.padding,
            self.padding,
            self.canvas.width - self.padding,
            self.canvas.height - self.padding,
        )
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(800.0, 600.0),
            padding: 50.0,
        }
    }
}

/// Drawable output of one visible entry.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderGeometry {
    /// A single point in viewport coordinates.
    Point(kurbo::Point),
    /// Independent segments in viewport coordinates.
    Segments(SmallVec<[Line; 4]>),
}

/// One visible entry of a [`Frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    /// Which entry produced this item.
    pub target: Target,
    /// What to draw.
    pub geometry: RenderGeometry,
}

/// Everything to draw for one frame, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Items in display order. Entries with nothing visible are omitted.
    pub items: Vec<RenderItem>,
}

impl Frame {
    /// Total number of segments across all items.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match &item.geometry {
                RenderGeometry::Segments(segments) => segments.len(),
                RenderGeometry::Point(_) => 0,
            })
            .sum()
    }

    /// Number of point items.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.geometry, RenderGeometry::Point(_)))
            .count()
    }

    /// The item produced by `target`, if it drew anything.
    #[must_use]
    pub fn item(&self, target: Target) -> Option<&RenderItem> {
        self.items.iter().find(|item| item.target == target)
    }
}

/// A scene together with its window-to-viewport mapping.
#[derive(Clone, Debug)]
pub struct Session {
    scene: Scene,
    transformer: CoordinateTransformer,
}

impl Session {
    /// Creates a session whose window and viewport both start as the
    /// configuration's inset rectangle.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let bounds = config.inset_bounds();
        let mut transformer = CoordinateTransformer::new();
        transformer.set_window(bounds.xmin, bounds.ymin, bounds.xmax, bounds.ymax);
        transformer.set_viewport(
            to_pixel(bounds.xmin),
            to_pixel(bounds.ymin),
            to_pixel(bounds.xmax),
            to_pixel(bounds.ymax),
        );
        Self {
            scene: Scene::new(bounds),
            transformer,
        }
    }

    /// The display list.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the display list.
    #[must_use]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The window-to-viewport mapping.
    #[must_use]
    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    /// Sets the window bounds in both the scene and the mapping.
    pub fn set_window_bounds(&mut self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) {
        self.scene.set_window_bounds(xmin, ymin, xmax, ymax);
        self.sync_window();
    }

    /// Sets the viewport in device pixels.
    pub fn set_viewport(&mut self, xmin: i32, ymin: i32, xmax: i32, ymax: i32) {
        log::debug!("viewport set to ({xmin}, {ymin}, {xmax}, {ymax})");
        self.transformer.set_viewport(xmin, ymin, xmax, ymax);
    }

    /// See [`Scene::apply`].
    ///
    /// # Errors
    ///
    /// Forwards the errors of [`Scene::apply`].
    pub fn apply(&mut self, request: TransformRequest) -> Result<(), SceneError> {
        self.scene.apply(request)
    }

    fn sync_window(&mut self) {
        let b = self.scene.window_bounds();
        let current = self.transformer.window();
        if (current.x0, current.y0, current.x1, current.y1) != (b.xmin, b.ymin, b.xmax, b.ymax) {
            self.transformer.set_window(b.xmin, b.ymin, b.xmax, b.ymax);
        }
    }

    /// Clips and maps every visible entry.
    ///
    /// - The window draws its outline, mapped but not clipped.
    /// - A point draws only if it lies inside the window or on its border.
    /// - A line draws its clipped part.
    /// - A polygon draws each clipped edge separately.
    pub fn render(&mut self) -> Frame {
        self.sync_window();
        let bounds = self.scene.window_bounds();
        let composite = self.transformer.transform();

        let items: Vec<_> = self
            .scene
            .iter()
            .filter(|(_, object)| object.is_visible())
            .filter_map(|(target, object)| {
                let geometry = match object.shape() {
                    Shape::Window(region) => Some(RenderGeometry::Segments(
                        polygon_edges(region.corners())
                            .map(|s| map_line(composite, s.start, s.end))
                            .collect(),
                    )),
                    Shape::Point(p) => clip_point(*p, &bounds)
                        .then(|| RenderGeometry::Point(map_point(composite, *p))),
                    Shape::Line([a, b]) => clip_segment(*a, *b, &bounds).map(|s| {
                        RenderGeometry::Segments(SmallVec::from_elem(
                            map_line(composite, s.start, s.end),
                            1,
                        ))
                    }),
                    Shape::Polygon(polygon) => {
                        let segments: SmallVec<[Line; 4]> =
                            clip_polygon(polygon.vertices(), &bounds)
                                .map(|s| map_line(composite, s.start, s.end))
                                .collect();
                        (!segments.is_empty()).then_some(RenderGeometry::Segments(segments))
                    }
                };
                if geometry.is_none() {
                    log::trace!("{target:?} is clipped away");
                }
                geometry.map(|geometry| RenderItem { target, geometry })
            })
            .collect();

        let frame = Frame { items };
        log::trace!(
            "rendered {} items: {} segments, {} points",
            frame.items.len(),
            frame.segment_count(),
            frame.point_count()
        );
        frame
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn map_point(composite: &Matrix, p: Point) -> kurbo::Point {
    (composite * p).into()
}

fn map_line(composite: &Matrix, start: Point, end: Point) -> Line {
    Line::new(map_point(composite, start), map_point(composite, end))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "canvas coordinates are far inside the i32 range"
)]
fn to_pixel(v: f64) -> i32 {
    v.round() as i32
}
