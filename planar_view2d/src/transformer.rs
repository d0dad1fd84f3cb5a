// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use planar_transform::{Matrix, Point};

/// Viewport bounds in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewportBounds {
    /// Left edge.
    pub xmin: i32,
    /// Edge that world `ymin` maps to.
    pub ymin: i32,
    /// Right edge.
    pub xmax: i32,
    /// Edge that world `ymax` maps to.
    pub ymax: i32,
}

impl ViewportBounds {
    /// Creates viewport bounds from explicit edges.
    #[must_use]
    pub const fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The bounds as a device-space [`Rect`].
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.xmin),
            f64::from(self.ymin),
            f64::from(self.xmax),
            f64::from(self.ymax),
        )
    }
}

/// Maps world-window coordinates onto a device viewport.
///
/// `CoordinateTransformer` holds the current world window and device viewport
/// and caches the composite matrix
///
/// ```text
/// T2 · S · T1
/// T1 = Translation(-w_xmin, -w_ymin)          window origin to (0, 0)
/// S  = Scale(v_width / w_width, v_height / w_height)
/// T2 = Translation(v_xmin, v_ymin)            onto the viewport origin
/// ```
///
/// The cache is rebuilt synchronously by every setter, so
/// [`CoordinateTransformer::transform`] never computes anything.
///
/// A window or viewport with zero width or height is not rejected: the scale
/// factors become infinite or NaN and flow into the composite. Callers that
/// care can check [`Matrix::is_finite`].
#[derive(Clone, Debug)]
pub struct CoordinateTransformer {
    window: Rect,
    viewport: ViewportBounds,
    composite: Matrix,
}

impl CoordinateTransformer {
    /// Creates a transformer with window and viewport both `(0, 0, 100, 100)`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bounds(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ViewportBounds::new(0, 0, 100, 100),
        )
    }

    /// Creates a transformer for the given window and viewport.
    ///
    /// `window` is read as `(x0, y0, x1, y1) = (xmin, ymin, xmax, ymax)`
    /// without normalization.
    #[must_use]
    pub fn with_bounds(window: Rect, viewport: ViewportBounds) -> Self {
        let mut t = Self {
            window,
            viewport,
            composite: Matrix::identity(),
        };
        t.rebuild_transform();
        t
    }

    /// Replaces the world window and recomputes the composite.
    pub fn set_window(&mut self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) {
        self.window = Rect::new(xmin, ymin, xmax, ymax);
        self.rebuild_transform();
    }

    /// Replaces the device viewport and recomputes the composite.
    pub fn set_viewport(&mut self, xmin: i32, ymin: i32, xmax: i32, ymax: i32) {
        self.viewport = ViewportBounds::new(xmin, ymin, xmax, ymax);
        self.rebuild_transform();
    }

    /// Current world window as `(xmin, ymin, xmax, ymax)`.
    #[must_use]
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Current device viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportBounds {
        self.viewport
    }

    /// The cached window-to-viewport matrix.
    #[must_use]
    pub fn transform(&self) -> &Matrix {
        &self.composite
    }

    /// Maps a world point into the viewport.
    #[must_use]
    pub fn world_to_view_point(&self, p: Point) -> Point {
        &self.composite * p
    }

    /// Current `(sx, sy)` scale factors from world units to pixels.
    #[must_use]
    pub fn scale_factors(&self) -> (f64, f64) {
        let v = self.viewport;
        let sx = (f64::from(v.xmax) - f64::from(v.xmin)) / (self.window.x1 - self.window.x0);
        let sy = (f64::from(v.ymax) - f64::from(v.ymin)) / (self.window.y1 - self.window.y0);
        (sx, sy)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CoordinateTransformerDebugInfo {
        let (sx, sy) = self.scale_factors();
        CoordinateTransformerDebugInfo {
            window: self.window,
            viewport: self.viewport,
            sx,
            sy,
            is_finite: self.composite.is_finite(),
        }
    }

    fn rebuild_transform(&mut self) {
        let (sx, sy) = self.scale_factors();
        let to_origin = Matrix::translation(-self.window.x0, -self.window.y0);
        let scale = Matrix::scale(sx, sy);
        let to_viewport =
            Matrix::translation(f64::from(self.viewport.xmin), f64::from(self.viewport.ymin));
        self.composite = &(&to_viewport * &scale) * &to_origin;
        if !self.composite.is_finite() {
            log::debug!(
                "degenerate window {:?} or viewport {:?}: composite is not finite",
                self.window,
                self.viewport
            );
        }
    }
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`CoordinateTransformer`].
#[derive(Clone, Copy, Debug)]
pub struct CoordinateTransformerDebugInfo {
    /// World window as `(xmin, ymin, xmax, ymax)`.
    pub window: Rect,
    /// Device viewport.
    pub viewport: ViewportBounds,
    /// Horizontal world-to-pixel factor.
    pub sx: f64,
    /// Vertical world-to-pixel factor.
    pub sy: f64,
    /// Whether every entry of the composite is finite.
    pub is_finite: bool,
}
