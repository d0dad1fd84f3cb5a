// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense row-major matrices and the named 3×3 transform constructors.

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;
use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Affine;

/// Error returned when two matrices do not have compatible shapes for
/// multiplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Shape of the left-hand operand as `(rows, cols)`.
    pub lhs: (usize, usize),
    /// Shape of the right-hand operand as `(rows, cols)`.
    pub rhs: (usize, usize),
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot multiply a {}x{} matrix by a {}x{} matrix",
            self.lhs.0, self.lhs.1, self.rhs.0, self.rhs.1
        )
    }
}

impl core::error::Error for DimensionMismatch {}

/// A dense `rows × cols` matrix of `f64`, stored row-major.
///
/// The default construction is the 3×3 identity, which is the shape used by
/// every transform in this crate. Points are multiplied as 3×1 homogeneous
/// column vectors, see [`Point::to_homogeneous`](crate::Point::to_homogeneous).
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// The 3×3 identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// A `rows × cols` matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from an array of rows.
    #[must_use]
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.offset(row, col)]
    }

    /// Overwrites the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    /// Multiplies `self · rhs`.
    ///
    /// Entry `(i, j)` of the result is `Σ_k self[i][k] · rhs[k][j]`, using plain
    /// double-precision arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] when `self.cols() != rhs.rows()`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, DimensionMismatch> {
        if self.cols != rhs.rows {
            return Err(DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * rhs.get(k, j);
                }
                out.set(i, j, sum);
            }
        }
        Ok(out)
    }

    /// Translation by `(dx, dy)`: identity with `M[0][2] = dx`, `M[1][2] = dy`.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        let mut m = Self::identity();
        m.set(0, 2, dx);
        m.set(1, 2, dy);
        m
    }

    /// Axis scale by `(sx, sy)` about the origin.
    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        let mut m = Self::identity();
        m.set(0, 0, sx);
        m.set(1, 1, sy);
        m
    }

    /// Rotation about the origin by `degrees`.
    ///
    /// The matrix is `[[cos θ, -sin θ], [sin θ, cos θ]]`. With a y-down device
    /// space a positive angle turns counter-clockwise on screen.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        let radians = degrees * PI / 180.0;
        let (sin, cos) = (radians.sin(), radians.cos());
        let mut m = Self::identity();
        m.set(0, 0, cos);
        m.set(0, 1, -sin);
        m.set(1, 0, sin);
        m.set(1, 1, cos);
        m
    }

    /// Converts a 3×3 matrix with an affine bottom row into a [`kurbo::Affine`].
    ///
    /// Returns `None` for any other shape, or when the bottom row is not
    /// `[0, 0, 1]`.
    #[must_use]
    pub fn to_affine(&self) -> Option<Affine> {
        if self.shape() != (3, 3)
            || self.get(2, 0) != 0.0
            || self.get(2, 1) != 0.0
            || self.get(2, 2) != 1.0
        {
            return None;
        }
        Some(Affine::new([
            self.get(0, 0),
            self.get(1, 0),
            self.get(0, 1),
            self.get(1, 1),
            self.get(0, 2),
            self.get(1, 2),
        ]))
    }

    /// Builds the 3×3 homogeneous matrix of a [`kurbo::Affine`].
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self::from_rows([[a, c, e], [b, d, f], [0.0, 0.0, 1.0]])
    }

    /// Returns `true` if every entry is finite.
    ///
    /// A composite built from degenerate (zero-extent) bounds is not.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for a {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics on a [`DimensionMismatch`]; use [`Matrix::multiply`] to handle it.
    #[track_caller]
    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.multiply(rhs) {
            Ok(m) => m,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Mul for Matrix {
    type Output = Self;

    #[track_caller]
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}
