//! Angle utilities (radians unless the name says `deg`).
//!
//! Conventions
//! - Normalized angles live in `(-π, π]`.
//! - Differences are shortest-path and signed: `angle_diff(a, b)` is how far to
//!   turn from `a` to reach `b`.
//! - Signed vector angles use `atan2(cross, dot)`; compare `Vector2::angle_to`,
//!   which is unsigned.

use std::f64::consts::{PI, TAU};

use nalgebra::Rotation2;

use crate::vec2::Vector2;

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Map any angle into `(-π, π]`. Values already in range are returned unchanged.
pub fn normalize_angle(rad: f64) -> f64 {
    if rad > -PI && rad <= PI {
        return rad;
    }
    // rem_euclid lands in [0, τ]; the upper end only through rounding.
    let r = rad.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

/// Shortest signed difference `b - a`, wrapped into `(-π, π]`.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    normalize_angle(b - a)
}

/// Interpolate from `a` toward `b` along the shortest arc; `t = 1` lands on `b` (normalized).
#[inline]
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    normalize_angle(a + angle_diff(a, b) * t)
}

/// Turn `current` toward `target` by at most `|max_delta|` along the shortest arc.
///
/// Snaps to `normalize_angle(target)` once the remaining difference fits in the step.
pub fn rotate_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    let step = max_delta.abs();
    let diff = angle_diff(current, target);
    if diff.abs() <= step {
        return normalize_angle(target);
    }
    normalize_angle(current + step * diff.signum())
}

/// `atan2(y, x)` with the `-π` it returns for `y = -0.0` (or a tiny negative `y`)
/// and `x < 0` folded onto `π`.
#[inline]
pub(crate) fn principal_atan2(y: f64, x: f64) -> f64 {
    normalize_angle(y.atan2(x))
}

/// Heading of `vec` relative to the +x axis, in `(-π, π]`.
#[inline]
pub fn angle_from_vector(vec: Vector2) -> f64 {
    principal_atan2(vec.y, vec.x)
}

/// Vector of the given `length` pointing along `angle`.
#[inline]
pub fn vector_from_angle(angle: f64, length: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin()) * length
}

/// Unit vector pointing along `angle`; `vector_from_angle(angle, 1.0)`.
#[inline]
pub fn direction_from_angle(angle: f64) -> Vector2 {
    vector_from_angle(angle, 1.0)
}

/// Signed angle from `v1` to `v2` (counterclockwise positive), in `(-π, π]`.
#[inline]
pub fn angle_between_vectors(v1: Vector2, v2: Vector2) -> f64 {
    principal_atan2(v1.cross(v2), v1.dot(v2))
}

/// Rotate `vec` counterclockwise by `angle`; the input is not modified.
pub fn rotate_vector(vec: Vector2, angle: f64) -> Vector2 {
    let rot = Rotation2::new(angle);
    (rot * nalgebra::Vector2::<f64>::from(vec)).into()
}
