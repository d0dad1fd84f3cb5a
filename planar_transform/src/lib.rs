// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Transform: homogeneous matrices for a window/viewport pipeline.
//!
//! This crate provides the numeric layer of Planar:
//! - [`Matrix`], a small dense row-major matrix with checked multiplication
//!   and named 3×3 constructors for translation, scale and rotation.
//! - [`Point`], an `x`/`y` value that converts to and from the homogeneous
//!   column `(x, y, 1)` at the matrix boundary.
//! - [`Primitive`] and [`compose_around_pivot`], which turn an editor's
//!   "scale by 2 about this point" style request into a single matrix.
//!
//! Matrices compose right to left: in `a * b` the transform `b` is applied
//! first.
//!
//! ## Minimal example
//!
//! ```rust
//! use planar_transform::{Matrix, Point, Primitive};
//!
//! let p = Point::new(2.0, 3.0);
//!
//! // Move, then scale about the origin.
//! let m = Matrix::scale(2.0, 2.0) * Matrix::translation(1.0, 1.0);
//! assert_eq!(&m * p, Point::new(6.0, 8.0));
//!
//! // Rotate a quarter turn about (2, 2).
//! let r = Primitive::Rotation { degrees: 90.0 }.around(Point::new(2.0, 2.0));
//! let q = &r * p;
//! assert!((q.x - 1.0).abs() < 1e-12 && (q.y - 2.0).abs() < 1e-12);
//! ```
//!
//! Shapes are checked: [`Matrix::multiply`] reports a [`DimensionMismatch`]
//! instead of producing garbage, while the `*` operators panic, since every
//! matrix built by this crate is 3×3.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod matrix;
mod point;
mod primitive;

pub use matrix::{DimensionMismatch, Matrix};
pub use point::Point;
pub use primitive::{Primitive, compose_around_pivot};
