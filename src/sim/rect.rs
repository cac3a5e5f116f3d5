//! Axis-aligned rectangle geometry for the paddle, ball and blocks
//!
//! Every entity has a fixed prototype shape. Its world placement is the
//! prototype position plus a per-entity offset.

use glam::Vec2;

/// A fixed-size rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// World-space edges of this shape moved by `offset`
    #[inline]
    pub fn bounds_at(&self, offset: Vec2) -> Bounds {
        let left = offset.x + self.x;
        let bottom = offset.y + self.y;
        Bounds {
            left,
            right: left + self.width,
            bottom,
            top: bottom + self.height,
        }
    }

    /// Corners in triangle-strip order: bottom-left, top-left, bottom-right, top-right
    pub fn strip_corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x, self.y + self.height),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        ]
    }
}

/// World-space edges of a placed rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    /// Vertical extents overlap, touching edges included
    #[inline]
    pub fn overlaps_vertically(&self, other: &Bounds) -> bool {
        self.bottom <= other.top && self.top >= other.bottom
    }

    /// Horizontal extents overlap, touching edges included
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Bounds) -> bool {
        self.right >= other.left && self.left <= other.right
    }

    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.overlaps_vertically(other) && self.overlaps_horizontally(other)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}
