//! Operator overloads and the fallible operand-based entry points.
//!
//! Accepted right-hand sides:
//! - `+`, `-`, `+=`, `-=`, `==`: `Vector2`, `(f64, f64)`, `[f64; 2]`
//! - `*`, `/`, `*=`, `/=`: the above (component-wise) or `f64` (broadcast)

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{mismatch, Vector2};
use crate::error::{OperandKind, Result};

/// Right-hand operand for the `try_*` methods on [`Vector2`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Vector(Vector2),
    Pair(f64, f64),
    Scalar(f64),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Vector(_) => OperandKind::Vector,
            Operand::Pair(..) => OperandKind::Pair,
            Operand::Scalar(_) => OperandKind::Scalar,
        }
    }

    /// Components of a vector or pair operand; scalars are a mismatch for `op`.
    pub(crate) fn components(self, op: &'static str) -> Result<(f64, f64)> {
        match self {
            Operand::Vector(v) => Ok((v.x, v.y)),
            Operand::Pair(x, y) => Ok((x, y)),
            Operand::Scalar(_) => Err(mismatch(op, OperandKind::Scalar)),
        }
    }

    /// Components with scalars broadcast to both axes.
    #[inline]
    pub(crate) fn broadcast(self) -> (f64, f64) {
        match self {
            Operand::Vector(v) => (v.x, v.y),
            Operand::Pair(x, y) => (x, y),
            Operand::Scalar(s) => (s, s),
        }
    }
}

impl From<Vector2> for Operand {
    fn from(v: Vector2) -> Self {
        Operand::Vector(v)
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<[f64; 2]> for Operand {
    fn from([x, y]: [f64; 2]) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl Vector2 {
    pub fn try_add(self, rhs: impl Into<Operand>) -> Result<Vector2> {
        let (x, y) = rhs.into().components("add")?;
        Ok(Vector2::new(self.x + x, self.y + y))
    }

    pub fn try_sub(self, rhs: impl Into<Operand>) -> Result<Vector2> {
        let (x, y) = rhs.into().components("sub")?;
        Ok(Vector2::new(self.x - x, self.y - y))
    }

    /// Scalars broadcast to both axes; never returns `Err`.
    pub fn try_mul(self, rhs: impl Into<Operand>) -> Result<Vector2> {
        let (x, y) = rhs.into().broadcast();
        Ok(Vector2::new(self.x * x, self.y * y))
    }

    /// Division by zero follows IEEE rules (inf/NaN), it is not an error.
    pub fn try_div(self, rhs: impl Into<Operand>) -> Result<Vector2> {
        let (x, y) = rhs.into().broadcast();
        Ok(Vector2::new(self.x / x, self.y / y))
    }

    pub fn try_add_assign(&mut self, rhs: impl Into<Operand>) -> Result<&mut Self> {
        let (x, y) = rhs.into().components("add_assign")?;
        self.x += x;
        self.y += y;
        Ok(self)
    }

    pub fn try_sub_assign(&mut self, rhs: impl Into<Operand>) -> Result<&mut Self> {
        let (x, y) = rhs.into().components("sub_assign")?;
        self.x -= x;
        self.y -= y;
        Ok(self)
    }

    pub fn try_mul_assign(&mut self, rhs: impl Into<Operand>) -> Result<&mut Self> {
        let (x, y) = rhs.into().broadcast();
        self.x *= x;
        self.y *= y;
        Ok(self)
    }

    pub fn try_div_assign(&mut self, rhs: impl Into<Operand>) -> Result<&mut Self> {
        let (x, y) = rhs.into().broadcast();
        self.x /= x;
        self.y /= y;
        Ok(self)
    }
}

/// Pair-like right-hand sides share one component-wise implementation.
trait PairLike: Copy {
    fn pair(self) -> (f64, f64);
}

impl PairLike for Vector2 {
    #[inline]
    fn pair(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl PairLike for (f64, f64) {
    #[inline]
    fn pair(self) -> (f64, f64) {
        self
    }
}

impl PairLike for [f64; 2] {
    #[inline]
    fn pair(self) -> (f64, f64) {
        (self[0], self[1])
    }
}

macro_rules! componentwise {
    ($rhs:ty) => {
        impl Add<$rhs> for Vector2 {
            type Output = Vector2;
            #[inline]
            fn add(self, rhs: $rhs) -> Vector2 {
                let (x, y) = rhs.pair();
                Vector2::new(self.x + x, self.y + y)
            }
        }
        impl Sub<$rhs> for Vector2 {
            type Output = Vector2;
            #[inline]
            fn sub(self, rhs: $rhs) -> Vector2 {
                let (x, y) = rhs.pair();
                Vector2::new(self.x - x, self.y - y)
            }
        }
        impl Mul<$rhs> for Vector2 {
            type Output = Vector2;
            #[inline]
            fn mul(self, rhs: $rhs) -> Vector2 {
                let (x, y) = rhs.pair();
                Vector2::new(self.x * x, self.y * y)
            }
        }
        impl Div<$rhs> for Vector2 {
            type Output = Vector2;
            #[inline]
            fn div(self, rhs: $rhs) -> Vector2 {
                let (x, y) = rhs.pair();
                Vector2::new(self.x / x, self.y / y)
            }
        }
        impl AddAssign<$rhs> for Vector2 {
            #[inline]
            fn add_assign(&mut self, rhs: $rhs) {
                let (x, y) = rhs.pair();
                self.x += x;
                self.y += y;
            }
        }
        impl SubAssign<$rhs> for Vector2 {
            #[inline]
            fn sub_assign(&mut self, rhs: $rhs) {
                let (x, y) = rhs.pair();
                self.x -= x;
                self.y -= y;
            }
        }
        impl MulAssign<$rhs> for Vector2 {
            #[inline]
            fn mul_assign(&mut self, rhs: $rhs) {
                let (x, y) = rhs.pair();
                self.x *= x;
                self.y *= y;
            }
        }
        impl DivAssign<$rhs> for Vector2 {
            #[inline]
            fn div_assign(&mut self, rhs: $rhs) {
                let (x, y) = rhs.pair();
                self.x /= x;
                self.y /= y;
            }
        }
    };
}

componentwise!(Vector2);
componentwise!((f64, f64));
componentwise!([f64; 2]);

impl PartialEq<(f64, f64)> for Vector2 {
    #[inline]
    fn eq(&self, other: &(f64, f64)) -> bool {
        self.x == other.0 && self.y == other.1
    }
}

impl PartialEq<[f64; 2]> for Vector2 {
    #[inline]
    fn eq(&self, other: &[f64; 2]) -> bool {
        self.x == other[0] && self.y == other[1]
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(rhs.x * self, rhs.y * self)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl MulAssign<f64> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Vector2 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}
