// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

use crate::{DimensionMismatch, Matrix};

/// A world- or device-space point.
///
/// `Point` is a plain `x`/`y` pair. It converts to the 3×1 homogeneous column
/// `(x, y, 1)` only at the boundary with [`Matrix`], so the homogeneous term is
/// always exactly `1.0` and never observable to callers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the homogeneous column vector `(x, y, 1)` as a 3×1 matrix.
    #[must_use]
    pub fn to_homogeneous(self) -> Matrix {
        Matrix::from_rows([[self.x], [self.y], [1.0]])
    }

    /// Reads a point back out of a 3×1 homogeneous column.
    ///
    /// Rows 0 and 1 become `x` and `y`; row 2 is not divided through, matching
    /// the affine matrices produced by this crate. Returns `None` for any other
    /// shape.
    #[must_use]
    pub fn from_homogeneous(column: &Matrix) -> Option<Self> {
        (column.shape() == (3, 1)).then(|| Self::new(column.get(0, 0), column.get(1, 0)))
    }

    /// Applies `matrix` to this point as `matrix · (x, y, 1)ᵀ`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `matrix` is not 3×3.
    pub fn try_transform(self, matrix: &Matrix) -> Result<Self, DimensionMismatch> {
        let column = matrix.multiply(&self.to_homogeneous())?;
        // Only a 3×3 matrix yields a homogeneous 3×1 column.
        Self::from_homogeneous(&column).ok_or(DimensionMismatch {
            lhs: matrix.shape(),
            rhs: (3, 1),
        })
    }

    /// Unweighted mean of `points`.
    ///
    /// An empty slice yields [`Point::ORIGIN`]; this is a guard for degenerate
    /// input, not a meaningful centroid.
    #[must_use]
    pub fn mean(points: &[Self]) -> Self {
        if points.is_empty() {
            return Self::ORIGIN;
        }
        let (sum_x, sum_y) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = points.len() as f64;
        Self::new(sum_x / n, sum_y / n)
    }
}

impl Mul<Point> for &Matrix {
    type Output = Point;

    /// # Panics
    ///
    /// Panics if the matrix is not 3×3; see [`Point::try_transform`].
    #[track_caller]
    fn mul(self, rhs: Point) -> Point {
        match rhs.try_transform(self) {
            Ok(p) => p,
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}
