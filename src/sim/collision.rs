//! Axis-aligned bounding box collision
//!
//! Every sprite is an unrotated rectangle for collision purposes; the bird's
//! tilt is visual only.

use glam::Vec2;

/// Axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True if the boxes share an area of non-zero width and height.
    ///
    /// Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        ranges_overlap(self.min.x, self.max().x, other.min.x, other.max().x)
            && ranges_overlap(self.min.y, self.max().y, other.min.y, other.max().y)
    }
}

/// Open-interval overlap test for `[a0, a1)` and `[b0, b1)`
#[inline]
fn ranges_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> bool {
    a0 < b1 && b0 < a1
}
