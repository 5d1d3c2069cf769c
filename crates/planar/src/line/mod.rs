//! Infinite 2D line: a point plus a direction.
//!
//! Purpose
//! - Intersections against lines, finite segments and rectangles.
//! - Projection and distance queries parameterized by `t`, where
//!   `point_at(t) = start_pos + direction * t`.
//! - Conversion to finite segments for a rendering sink.
//!
//! Degenerate-case policy
//! - Parallel (and coincident) lines report no intersection (`None`).
//! - `direction` is never normalized implicitly. A zero direction is rejected by
//!   `try_new`, but the metric queries (`length_to`, `distance_to_point`,
//!   `projection_of_point`) do not check it and divide by zero.
//!
//! Code cross-refs: `cfg::COLLINEAR_EPS`, `rect::RectBounds`, `draw::SegmentSink`

use crate::angle::principal_atan2;
use crate::cfg::{DrawCfg, COLLINEAR_EPS};
use crate::draw::SegmentSink;
use crate::error::{GeomError, Result};
use crate::rect::RectBounds;
use crate::vec2::Vector2;

/// Infinite line through `start_pos` along `direction` (not required to be unit length).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub direction: Vector2,
    pub start_pos: Vector2,
}

impl Line {
    #[inline]
    pub fn new(direction: Vector2, start_pos: Vector2) -> Self {
        Self {
            direction,
            start_pos,
        }
    }

    /// Like [`Line::new`], but rejects a zero direction.
    pub fn try_new(direction: Vector2, start_pos: Vector2) -> Result<Self> {
        if direction == Vector2::ZERO {
            return Err(GeomError::DegenerateGeometry {
                what: "line direction is the zero vector",
            });
        }
        Ok(Self::new(direction, start_pos))
    }

    /// Line through `a` and `b`, with `point_at(0) = a` and `point_at(1) = b`.
    pub fn through(a: Vector2, b: Vector2) -> Result<Self> {
        Self::try_new(b - a, a)
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2 {
        self.start_pos + self.direction * t
    }

    /// True if `point` lies on the line, within `COLLINEAR_EPS` on the cross product.
    pub fn detect_collision(&self, point: Vector2) -> bool {
        let difference = point - self.start_pos;
        self.direction.cross(difference).abs() < COLLINEAR_EPS
    }

    /// Unique intersection point, or `None` for parallel and coincident lines.
    pub fn intersect_line(&self, other: &Line) -> Option<Vector2> {
        let det = self.direction.cross(other.direction);
        if det.abs() < COLLINEAR_EPS {
            tracing::trace!(det, "intersect_line: parallel");
            return None;
        }
        let t = (other.start_pos - self.start_pos).cross(other.direction) / det;
        Some(self.point_at(t))
    }

    /// Intersection with the closed segment `[segment_start, segment_end]`.
    ///
    /// Only the segment parameter is constrained to `[0, 1]`; the line is infinite.
    pub fn intersect_segment(
        &self,
        segment_start: Vector2,
        segment_end: Vector2,
    ) -> Option<Vector2> {
        let seg_dir = segment_end - segment_start;
        let denom = self.direction.cross(seg_dir);
        if denom.abs() < COLLINEAR_EPS {
            tracing::trace!(denom, "intersect_segment: parallel");
            return None;
        }
        let offset = segment_start - self.start_pos;
        let t = offset.cross(seg_dir) / denom;
        let u = offset.cross(self.direction) / denom;
        if (0.0..=1.0).contains(&u) {
            Some(self.point_at(t))
        } else {
            None
        }
    }

    /// Distinct intersection points with the four rectangle edges, in edge order.
    ///
    /// Points where the line passes through a corner show up once, since
    /// duplicates are dropped by exact equality.
    pub fn intersect_rect<R: RectBounds + ?Sized>(&self, rect: &R) -> Vec<Vector2> {
        let corners = rect.corners();
        let mut points: Vec<Vector2> = Vec::with_capacity(4);
        for i in 0..corners.len() {
            let a = corners[i];
            let b = corners[(i + 1) % corners.len()];
            if let Some(p) = self.intersect_segment(a, b) {
                if !points.contains(&p) {
                    points.push(p);
                }
            }
        }
        points
    }

    /// Signed parameter `t` of the orthogonal projection of `point`.
    #[inline]
    pub fn length_to(&self, point: Vector2) -> f64 {
        self.projection_parameter(point)
    }

    /// Same value as [`Line::length_to`].
    #[inline]
    pub fn projection_of_point(&self, point: Vector2) -> f64 {
        self.projection_parameter(point)
    }

    #[inline]
    fn projection_parameter(&self, point: Vector2) -> f64 {
        (point - self.start_pos).dot(self.direction) / self.direction.length_squared()
    }

    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        self.point_at(self.length_to(point))
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_to_point(&self, point: Vector2) -> f64 {
        (point - self.start_pos).cross(self.direction).abs() / self.direction.magnitude()
    }

    /// Signed angle from this line's direction to `other`'s, via `atan2(cross, dot)`,
    /// in `(-π, π]`.
    pub fn angle_with(&self, other: &Line) -> f64 {
        let dot = self.direction.dot(other.direction);
        let det = self.direction.cross(other.direction);
        principal_atan2(det, dot)
    }

    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.direction.cross(other.direction).abs() < COLLINEAR_EPS
    }

    /// Make `direction` unit length in place (a zero direction stays zero).
    pub fn normalize_direction(&mut self) -> &mut Self {
        self.direction.normalize();
        self
    }

    pub fn reversed(&self) -> Line {
        Line::new(-self.direction, self.start_pos)
    }

    /// Segment from `start_pos` running `length` units along the direction.
    pub fn to_segment_length(&self, length: f64) -> (Vector2, Vector2) {
        (
            self.start_pos,
            self.start_pos + self.direction.get_normalized() * length,
        )
    }

    /// Segment between parameters `t1` and `t2`.
    pub fn to_segment_between(&self, t1: f64, t2: f64) -> (Vector2, Vector2) {
        (self.point_at(t1), self.point_at(t2))
    }

    /// Hand a `length`-long segment starting at `start_pos` to `sink`.
    pub fn draw<S: SegmentSink + ?Sized>(
        &self,
        sink: &mut S,
        color: &S::Color,
        length: f64,
        width: u32,
    ) {
        let (start, end) = self.to_segment_length(length);
        sink.draw_line(color, start, end, width);
    }

    /// [`Line::draw`] with length and width taken from `cfg`.
    pub fn draw_with<S: SegmentSink + ?Sized>(
        &self,
        sink: &mut S,
        color: &S::Color,
        cfg: DrawCfg,
    ) {
        self.draw(sink, color, cfg.length, cfg.width);
    }

    /// Hand the segment between `t1` and `t2` to `sink`.
    pub fn draw_segment<S: SegmentSink + ?Sized>(
        &self,
        sink: &mut S,
        color: &S::Color,
        t1: f64,
        t2: f64,
        width: u32,
    ) {
        let (start, end) = self.to_segment_between(t1, t2);
        sink.draw_line(color, start, end, width);
    }
}

#[cfg(test)]
mod tests;
