// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display list and transform requests.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use planar_clip::WindowBounds;
use planar_transform::{Matrix, Point, Primitive};

use crate::{GraphicObject, ObjectKind, Polygon, Shape, ShapeError, WindowRegion};

/// Handle to an object in a [`Scene`].
///
/// Handles are issued in increasing order and never reused, so a handle to a
/// removed object stays invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Raw handle value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// What a request or query refers to: the window or one ordinary object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The scene's clip window.
    Window,
    /// An ordinary object.
    Object(ObjectId),
}

impl From<ObjectId> for Target {
    fn from(id: ObjectId) -> Self {
        Self::Object(id)
    }
}

/// Errors from [`Scene`] operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneError {
    /// The handle does not name a live object.
    UnknownObject(ObjectId),
    /// A window scale with a zero factor cannot be undone on the rest of the
    /// scene.
    NonInvertibleScale {
        /// Requested horizontal factor.
        sx: f64,
        /// Requested vertical factor.
        sy: f64,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject(id) => write!(f, "no object with handle {}", id.0),
            Self::NonInvertibleScale { sx, sy } => {
                write!(f, "cannot scale the window by ({sx}, {sy}): factor is zero")
            }
        }
    }
}

impl core::error::Error for SceneError {}

/// A transform to apply to one target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformRequest {
    /// The primitive as the user asked for it.
    pub primitive: Primitive,
    /// Where to apply it.
    pub target: Target,
    /// Fixed point for scale and rotation; the target's centroid when `None`.
    pub pivot: Option<Point>,
}

impl TransformRequest {
    /// A request about the target's own centroid.
    #[must_use]
    pub fn new(primitive: Primitive, target: impl Into<Target>) -> Self {
        Self {
            primitive,
            target: target.into(),
            pivot: None,
        }
    }

    /// Uses an explicit pivot.
    #[must_use]
    pub fn with_pivot(mut self, pivot: Point) -> Self {
        self.pivot = Some(pivot);
        self
    }
}

/// One row of the object list surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    /// The entry's target.
    pub target: Target,
    /// `"Name (Kind)"`.
    pub label: String,
    /// Check state.
    pub visible: bool,
}

/// The display list: a protected clip window followed by ordinary objects.
///
/// The window lives in its own slot, so [`Scene::remove`] cannot reach it and
/// it always comes first in [`Scene::iter`].
#[derive(Clone, Debug)]
pub struct Scene {
    window: GraphicObject,
    objects: Vec<(ObjectId, GraphicObject)>,
    next_id: u32,
}

impl Scene {
    /// Creates a scene whose window covers `bounds`.
    #[must_use]
    pub fn new(bounds: WindowBounds) -> Self {
        Self {
            window: GraphicObject::new("Window", Shape::Window(WindowRegion::from_bounds(bounds))),
            objects: Vec::new(),
            next_id: 0,
        }
    }

    /// The window object.
    #[must_use]
    pub fn window(&self) -> &GraphicObject {
        &self.window
    }

    /// Current window bounds, the sole input to clipping.
    #[must_use]
    pub fn window_bounds(&self) -> WindowBounds {
        self.window.shape().bounds()
    }

    /// Replaces the window bounds, normalizing reversed edges.
    pub fn set_window_bounds(&mut self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) {
        let region = WindowRegion::from_bounds(WindowBounds::new(xmin, ymin, xmax, ymax));
        log::debug!("window bounds set to {:?}", region.bounds());
        let visible = self.window.is_visible();
        self.window = GraphicObject::new(self.window.name(), Shape::Window(region));
        self.window.set_visible(visible);
    }

    /// Adds an object at the end of the display list.
    ///
    /// Ids come from a `u32` counter, which is ample for an editing session;
    /// after 2^32 insertions the counter wraps and ids repeat.
    pub fn insert(&mut self, object: GraphicObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        log::debug!("insert {:?} {:?} ({})", id, object.name(), object.kind());
        self.objects.push((id, object));
        id
    }

    /// Adds a point. Without a name it is called `"Point N"`.
    pub fn add_point(&mut self, name: Option<&str>, p: Point) -> ObjectId {
        let name = self.name_or_default(name, ObjectKind::Point);
        self.insert(GraphicObject::new(name, Shape::Point(p)))
    }

    /// Adds a line. Without a name it is called `"Line N"`.
    pub fn add_line(&mut self, name: Option<&str>, start: Point, end: Point) -> ObjectId {
        let name = self.name_or_default(name, ObjectKind::Line);
        self.insert(GraphicObject::new(name, Shape::Line([start, end])))
    }

    /// Adds a polygon. Without a name it is called `"Polygon N"`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] for fewer than two vertices; nothing is added.
    pub fn add_polygon(
        &mut self,
        name: Option<&str>,
        vertices: Vec<Point>,
    ) -> Result<ObjectId, ShapeError> {
        let polygon = Polygon::new(vertices)?;
        let name = self.name_or_default(name, ObjectKind::Polygon);
        Ok(self.insert(GraphicObject::new(name, Shape::Polygon(polygon))))
    }

    // N counts the display list including the window, plus one.
    fn name_or_default(&self, name: Option<&str>, kind: ObjectKind) -> String {
        match name {
            Some(name) if !name.is_empty() => name.into(),
            _ => format!("{kind} {}", self.objects.len() + 2),
        }
    }

    /// Removes an object and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownObject`] for a stale handle.
    pub fn remove(&mut self, id: ObjectId) -> Result<GraphicObject, SceneError> {
        let index = self.index_of(id).ok_or(SceneError::UnknownObject(id))?;
        let (_, object) = self.objects.remove(index);
        log::debug!("remove {:?} {:?}", id, object.name());
        Ok(object)
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        // Handles are issued in order and removal keeps order, so the list is
        // sorted by id.
        self.objects.binary_search_by_key(&id, |(i, _)| *i).ok()
    }

    /// Looks up the window or an object.
    #[must_use]
    pub fn get(&self, target: Target) -> Option<&GraphicObject> {
        match target {
            Target::Window => Some(&self.window),
            Target::Object(id) => self.index_of(id).map(|i| &self.objects[i].1),
        }
    }

    /// Mutable access to an ordinary object.
    ///
    /// The window is not reachable this way; use
    /// [`Scene::set_window_bounds`] and [`Scene::set_visible`].
    #[must_use]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GraphicObject> {
        let index = self.index_of(id)?;
        Some(&mut self.objects[index].1)
    }

    /// Shows or hides the window or an object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownObject`] for a stale handle.
    pub fn set_visible(&mut self, target: Target, visible: bool) -> Result<(), SceneError> {
        let object = match target {
            Target::Window => &mut self.window,
            Target::Object(id) => self.get_mut(id).ok_or(SceneError::UnknownObject(id))?,
        };
        object.set_visible(visible);
        Ok(())
    }

    /// Visibility of the window or an object; `None` for a stale handle.
    #[must_use]
    pub fn is_visible(&self, target: Target) -> Option<bool> {
        self.get(target).map(GraphicObject::is_visible)
    }

    /// Centroid of the window or an object; `None` for a stale handle.
    #[must_use]
    pub fn centroid(&self, target: Target) -> Option<Point> {
        self.get(target).map(GraphicObject::centroid)
    }

    /// Number of ordinary objects. The window is not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene holds nothing but the window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Handles of the ordinary objects in display order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.iter().map(|(id, _)| *id)
    }

    /// Everything in display order, window first.
    pub fn iter(&self) -> impl Iterator<Item = (Target, &GraphicObject)> + '_ {
        core::iter::once((Target::Window, &self.window)).chain(
            self.objects
                .iter()
                .map(|(id, object)| (Target::Object(*id), object)),
        )
    }

    /// Rows for the object list surface, window first.
    pub fn entries(&self) -> impl Iterator<Item = ListEntry> + '_ {
        self.iter().map(|(target, object)| ListEntry {
            target,
            label: format!("{} ({})", object.name(), object.kind()),
            visible: object.is_visible(),
        })
    }

    /// Applies a transform request.
    ///
    /// For an ordinary object, a translation is applied as-is while scale and
    /// rotation are composed about the pivot (the object's centroid unless the
    /// request names one).
    ///
    /// For [`Target::Window`] the window itself never moves. Instead the
    /// inverse primitive is composed about the pivot (the window's centroid
    /// unless named) and applied to every other object, hidden ones included.
    ///
    /// # Errors
    ///
    /// - [`SceneError::UnknownObject`] for a stale handle.
    /// - [`SceneError::NonInvertibleScale`] for a zero-factor window scale.
    pub fn apply(&mut self, request: TransformRequest) -> Result<(), SceneError> {
        log::debug!("apply {request:?}");
        match request.target {
            Target::Object(id) => {
                let object = self.get_mut(id).ok_or(SceneError::UnknownObject(id))?;
                let pivot = request.pivot.unwrap_or_else(|| object.centroid());
                object.apply_transform(&request_matrix(request.primitive, pivot));
            }
            Target::Window => {
                if let Primitive::Scale { sx, sy } = request.primitive
                    && !request.primitive.is_invertible()
                {
                    return Err(SceneError::NonInvertibleScale { sx, sy });
                }
                let pivot = request.pivot.unwrap_or_else(|| self.window.centroid());
                let matrix = request_matrix(request.primitive.inverse(), pivot);
                for (_, object) in &mut self.objects {
                    object.apply_transform(&matrix);
                }
            }
        }
        Ok(())
    }
}

fn request_matrix(primitive: Primitive, pivot: Point) -> Matrix {
    match primitive {
        Primitive::Translation { .. } => primitive.matrix(),
        Primitive::Scale { .. } | Primitive::Rotation { .. } => primitive.around(pivot),
    }
}
