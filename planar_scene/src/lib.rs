// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Scene: graphic objects, the display list and frame rendering.
//!
//! This crate ties the numeric crates together into an editor core:
//! - [`GraphicObject`]: a named, hideable [`Shape`] (point, line, polygon or
//!   the clip window) that can be transformed in place.
//! - [`Scene`]: the display list. The clip window sits in its own slot and is
//!   addressed as [`Target::Window`]; ordinary objects get stable
//!   [`ObjectId`] handles.
//! - [`TransformRequest`]: translate, scale or rotate a target about a pivot.
//!   Transforming the window applies the inverse to everything else.
//! - [`Session`]: a scene plus its window-to-viewport mapping, producing a
//!   clipped, mapped [`Frame`] per redraw.
//!
//! It does **not** draw. A UI layer collects clicks into vertex lists, calls
//! into [`Scene`] and hands each [`Frame`] to its own renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use planar_scene::{RenderGeometry, Session, Target, TransformRequest};
//! use planar_transform::{Point, Primitive};
//!
//! let mut session = Session::default();
//! let line = session
//!     .scene_mut()
//!     .add_line(None, Point::new(0.0, 300.0), Point::new(400.0, 300.0));
//!
//! // Zoom the window in by 2: everything else shrinks towards its centre.
//! session
//!     .apply(TransformRequest::new(Primitive::Scale { sx: 2.0, sy: 2.0 }, Target::Window))
//!     .unwrap();
//!
//! let frame = session.render();
//! let item = frame.item(line.into()).unwrap();
//! assert!(matches!(item.geometry, RenderGeometry::Segments(ref s) if s.len() == 1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod object;
mod scene;
mod session;

pub use object::{GraphicObject, ObjectKind, Polygon, Shape, ShapeError, WindowRegion};
pub use scene::{ListEntry, ObjectId, Scene, SceneError, Target, TransformRequest};
pub use session::{Frame, RenderGeometry, RenderItem, Session, SessionConfig};
