// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Clip: Cohen-Sutherland clipping against a world window.
//!
//! Everything here is a pure function of its inputs: clipping returns new
//! endpoints and never mutates caller geometry, so the same object can be
//! clipped against several windows, or speculatively for a preview, without
//! aliasing concerns.
//!
//! - [`WindowBounds`]: the axis-aligned rectangle clipped against.
//! - [`RegionCode`]: the 4-bit outcode of a point.
//! - [`clip_segment`]: Cohen-Sutherland for one segment.
//! - [`clip_polygon`]: edge-wise clipping of a vertex loop. Edges are
//!   clipped independently and are **not** reconnected into a closed polygon.
//! - [`clip_point`]: inclusive containment test for single points.
//!
//! ## Minimal example
//!
//! ```rust
//! use planar_clip::{RegionCode, WindowBounds, clip_polygon, clip_segment};
//! use planar_transform::Point;
//!
//! let window = WindowBounds::new(0.0, 0.0, 100.0, 100.0);
//!
//! let code = RegionCode::of(Point::new(-5.0, 120.0), &window);
//! assert_eq!(code, RegionCode::LEFT | RegionCode::TOP);
//!
//! // Entirely above and to the right: rejected without any intersection math.
//! assert!(clip_segment(Point::new(150.0, 150.0), Point::new(200.0, 200.0), &window).is_none());
//!
//! // A triangle poking out of the left edge keeps two clipped edges and
//! // loses the one that lies outside.
//! let tri = [Point::new(-20.0, 10.0), Point::new(50.0, 10.0), Point::new(-20.0, 90.0)];
//! assert_eq!(clip_polygon(&tri, &window).count(), 2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod bounds;
mod region;
mod segment;

pub use bounds::WindowBounds;
pub use region::RegionCode;
pub use segment::{Segment, clip_point, clip_polygon, clip_segment, polygon_edges};
