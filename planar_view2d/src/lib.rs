// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar View 2D: window-to-viewport mapping.
//!
//! A *window* is a rectangle in world coordinates (`f64`); a *viewport* is a
//! rectangle in device pixels (`i32`). [`CoordinateTransformer`] holds both
//! and caches the 3×3 matrix that takes the window onto the viewport, with
//! `(xmin, ymin)` landing on `(v_xmin, v_ymin)` and `(xmax, ymax)` on
//! `(v_xmax, v_ymax)`.
//!
//! No y-axis flip is applied. World `ymax` maps to viewport `ymax`, so a
//! renderer whose device y grows downwards sees the world upside down unless
//! it passes a viewport with `ymin > ymax`.
//!
//! ## Minimal example
//!
//! ```rust
//! use planar_transform::Point;
//! use planar_view2d::CoordinateTransformer;
//!
//! let mut t = CoordinateTransformer::new();
//! t.set_window(0.0, 0.0, 100.0, 100.0);
//! t.set_viewport(0, 0, 50, 50);
//!
//! assert_eq!(t.world_to_view_point(Point::new(100.0, 100.0)), Point::new(50.0, 50.0));
//! assert_eq!(t.transform() * Point::new(0.0, 0.0), Point::new(0.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod transformer;

pub use transformer::{CoordinateTransformer, CoordinateTransformerDebugInfo, ViewportBounds};
