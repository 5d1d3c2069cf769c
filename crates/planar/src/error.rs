//! Error types for geometry operations.

use std::fmt;
use thiserror::Error;

/// Result type alias using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;

/// Shape of an operand handed to a fallible vector operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    Vector,
    Pair,
    Scalar,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperandKind::Vector => "vector",
            OperandKind::Pair => "pair",
            OperandKind::Scalar => "scalar",
        };
        f.write_str(s)
    }
}

/// Errors raised by the geometry core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// The operation has no meaning for this operand kind (e.g. adding a scalar).
    #[error("type mismatch: `{op}` does not accept a {operand} operand")]
    TypeMismatch {
        /// Operation name.
        op: &'static str,
        /// Kind of the rejected operand.
        operand: OperandKind,
    },

    /// A zero-length direction where a usable one is required.
    #[error("degenerate geometry: {what}")]
    DegenerateGeometry {
        /// What was degenerate.
        what: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = GeomError::TypeMismatch {
            op: "add",
            operand: OperandKind::Scalar,
        };
        assert_eq!(
            e.to_string(),
            "type mismatch: `add` does not accept a scalar operand"
        );
        let d = GeomError::DegenerateGeometry {
            what: "line direction is the zero vector",
        };
        assert!(d.to_string().contains("zero vector"));
    }
}
