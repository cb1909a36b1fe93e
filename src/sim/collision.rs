//! Axis-aligned rectangle tests
//!
//! Everything in the scene is an AABB, so collision detection is two
//! interval-overlap checks. Touching edges do not count as overlap.

use glam::Vec2;

/// Axis-aligned rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap (shared edges are not an overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// True when both top-left corners are within `gap` of each other on
    /// BOTH axes at once
    ///
    /// Being close on a single axis is fine; only diagonal proximity is
    /// rejected by the layout generator.
    pub fn too_close(&self, other: &Rect, gap: f32) -> bool {
        (self.pos.x - other.pos.x).abs() < gap && (self.pos.y - other.pos.y).abs() < gap
    }
}
