// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use planar_transform::Point;

use crate::WindowBounds;

bitflags::bitflags! {
    /// Cohen-Sutherland region code (outcode) of a point against a window.
    ///
    /// At most one of `LEFT`/`RIGHT` and one of `BOTTOM`/`TOP` is ever set, so
    /// corner regions carry exactly two bits. The empty code is
    /// [`RegionCode::INSIDE`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionCode: u8 {
        /// `x < xmin`.
        const LEFT   = 0b0001;
        /// `x > xmax`.
        const RIGHT  = 0b0010;
        /// `y < ymin`.
        const BOTTOM = 0b0100;
        /// `y > ymax`.
        const TOP    = 0b1000;
    }
}

impl RegionCode {
    /// No bits set: the point lies inside the window or on its border.
    pub const INSIDE: Self = Self::empty();

    /// Classifies `p` against `bounds`.
    #[must_use]
    pub fn of(p: Point, bounds: &WindowBounds) -> Self {
        let mut code = Self::INSIDE;

        if p.x < bounds.xmin {
            code |= Self::LEFT;
        } else if p.x > bounds.xmax {
            code |= Self::RIGHT;
        }

        if p.y < bounds.ymin {
            code |= Self::BOTTOM;
        } else if p.y > bounds.ymax {
            code |= Self::TOP;
        }

        code
    }

    /// Returns `true` for [`RegionCode::INSIDE`].
    #[inline]
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self::INSIDE
    }
}
