//! 2D vector value type with arithmetic and geometric queries.
//!
//! Purpose
//! - Plain `Copy` value (`x`, `y` as `f64`), compared component-wise and exactly.
//! - Operators cover the infallible operand combinations at compile time
//!   (see `ops`); the `try_*` methods take an [`Operand`] and reject kinds the
//!   operation has no meaning for.
//!
//! Degenerate-case policy
//! - Arithmetic by zero is not special-cased: `v / 0.0` follows IEEE rules.
//! - Normalization is forgiving: a zero-magnitude vector normalizes to zero.
//! - `angle_to` returns `0.0` when either side has zero magnitude.

mod ops;

pub use ops::Operand;

use std::fmt;

use crate::error::{GeomError, OperandKind, Result};

/// A 2D vector (or point) with `f64` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Euclidean norm, always `>= 0`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Alias of [`Vector2::magnitude`].
    #[inline]
    pub fn length(&self) -> f64 {
        self.magnitude()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or the zero vector if `self` is zero.
    pub fn get_normalized(&self) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            tracing::trace!("get_normalized: zero-magnitude vector");
            return Vector2::ZERO;
        }
        Vector2::new(self.x / magnitude, self.y / magnitude)
    }

    /// In-place normalization; same zero policy as [`Vector2::get_normalized`].
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.get_normalized();
        self
    }

    #[inline]
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product `x1*y2 - y1*x2`.
    #[inline]
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn distance_to(&self, other: Vector2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Unsigned angle to `other` in `[0, π]`.
    ///
    /// Returns exactly `0.0` if either vector has zero magnitude.
    pub fn angle_to(&self, other: Vector2) -> f64 {
        let mag_self = self.magnitude();
        let mag_other = other.magnitude();
        if mag_self == 0.0 || mag_other == 0.0 {
            tracing::trace!("angle_to: zero-magnitude operand");
            return 0.0;
        }
        let cos_theta = (self.dot(other) / (mag_self * mag_other)).clamp(-1.0, 1.0);
        cos_theta.acos()
    }

    /// Component-wise power with a float exponent.
    #[inline]
    pub fn powf(&self, exp: f64) -> Vector2 {
        Vector2::new(self.x.powf(exp), self.y.powf(exp))
    }

    /// Component-wise power with an integer exponent.
    #[inline]
    pub fn powi(&self, exp: i32) -> Vector2 {
        Vector2::new(self.x.powi(exp), self.y.powi(exp))
    }

    /// [`Vector2::distance_to`] for a vector or pair operand.
    pub fn try_distance_to(&self, other: impl Into<Operand>) -> Result<f64> {
        let (x, y) = other.into().components("distance_to")?;
        Ok(self.distance_to(Vector2::new(x, y)))
    }

    /// [`Vector2::angle_to`] for a vector or pair operand.
    pub fn try_angle_to(&self, other: impl Into<Operand>) -> Result<f64> {
        let (x, y) = other.into().components("angle_to")?;
        Ok(self.angle_to(Vector2::new(x, y)))
    }

    /// Exact equality against a vector or pair; any other operand is a mismatch.
    pub fn try_eq(&self, other: impl Into<Operand>) -> Result<bool> {
        let (x, y) = other.into().components("eq")?;
        Ok(self.x == x && self.y == y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    #[inline]
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    #[inline]
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

pub(crate) fn mismatch(op: &'static str, operand: OperandKind) -> GeomError {
    tracing::trace!(op, %operand, "rejected operand");
    GeomError::TypeMismatch { op, operand }
}
