//! Read-only rectangle bounds consumed by `Line::intersect_rect`.
//!
//! Corners are visited (left, top) → (right, top) → (right, bottom) → (left, bottom).

use crate::vec2::Vector2;

/// Anything that can report four edge coordinates.
pub trait RectBounds {
    fn left(&self) -> f64;
    fn top(&self) -> f64;
    fn right(&self) -> f64;
    fn bottom(&self) -> f64;

    /// Corners in edge-traversal order.
    fn corners(&self) -> [Vector2; 4] {
        [
            Vector2::new(self.left(), self.top()),
            Vector2::new(self.right(), self.top()),
            Vector2::new(self.right(), self.bottom()),
            Vector2::new(self.left(), self.bottom()),
        ]
    }
}

/// Plain axis-aligned bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds2 {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds2 {
    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds from an origin corner and a size (`x, y, w, h`).
    #[inline]
    pub fn from_origin_size(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

impl RectBounds for Bounds2 {
    fn left(&self) -> f64 {
        self.left
    }
    fn top(&self) -> f64 {
        self.top
    }
    fn right(&self) -> f64 {
        self.right
    }
    fn bottom(&self) -> f64 {
        self.bottom
    }
}
