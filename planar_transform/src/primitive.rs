// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Matrix, Point};

/// One of the three affine primitives an editor can request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// Move by `(dx, dy)`.
    Translation {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
    },
    /// Scale each axis by its factor.
    Scale {
        /// Horizontal factor.
        sx: f64,
        /// Vertical factor.
        sy: f64,
    },
    /// Rotate by an angle in degrees.
    Rotation {
        /// Angle in degrees; see [`Matrix::rotation`] for the sign convention.
        degrees: f64,
    },
}

impl Primitive {
    /// The matrix of this primitive about the origin.
    #[must_use]
    pub fn matrix(self) -> Matrix {
        match self {
            Self::Translation { dx, dy } => Matrix::translation(dx, dy),
            Self::Scale { sx, sy } => Matrix::scale(sx, sy),
            Self::Rotation { degrees } => Matrix::rotation(degrees),
        }
    }

    /// The primitive that undoes this one.
    ///
    /// A scale with a zero factor has no inverse; the result then carries
    /// infinite factors. Check [`Primitive::is_invertible`] first when that
    /// matters.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Translation { dx, dy } => Self::Translation { dx: -dx, dy: -dy },
            Self::Scale { sx, sy } => Self::Scale {
                sx: 1.0 / sx,
                sy: 1.0 / sy,
            },
            Self::Rotation { degrees } => Self::Rotation { degrees: -degrees },
        }
    }

    /// Returns `false` only for a scale with a zero factor.
    #[must_use]
    pub fn is_invertible(self) -> bool {
        match self {
            Self::Scale { sx, sy } => sx != 0.0 && sy != 0.0,
            Self::Translation { .. } | Self::Rotation { .. } => true,
        }
    }

    /// Shorthand for [`compose_around_pivot`].
    #[must_use]
    pub fn around(self, pivot: Point) -> Matrix {
        compose_around_pivot(self, pivot)
    }
}

/// Composes `primitive` so that it acts about `pivot` instead of the origin.
///
/// The result is `Translation(pivot) · primitive · Translation(-pivot)`: the
/// pivot is moved to the origin, the primitive applied, and the pivot moved
/// back. Scales and rotations therefore leave `pivot` fixed; a translation is
/// unaffected by the conjugation.
///
/// ```
/// use planar_transform::{Point, Primitive, compose_around_pivot};
///
/// let pivot = Point::new(10.0, 10.0);
/// let m = compose_around_pivot(Primitive::Scale { sx: 3.0, sy: 3.0 }, pivot);
/// assert_eq!(&m * pivot, pivot);
/// assert_eq!(&m * Point::new(11.0, 10.0), Point::new(13.0, 10.0));
/// ```
#[must_use]
pub fn compose_around_pivot(primitive: Primitive, pivot: Point) -> Matrix {
    let to_origin = Matrix::translation(-pivot.x, -pivot.y);
    let back = Matrix::translation(pivot.x, pivot.y);
    &(&back * &primitive.matrix()) * &to_origin
}
