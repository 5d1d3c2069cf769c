//! 2D geometry primitives: vectors, infinite lines, and angle utilities.
//!
//! Layout
//! - `vec2`: `Vector2` value type, operators, and the `Operand` union for the
//!   fallible `try_*` entry points.
//! - `line`: `Line` with intersection, projection, and distance queries.
//! - `angle`: free functions over radians and `Vector2`.
//! - `rect`, `draw`: read-only seams to a host's rectangles and renderer.
//!
//! Everything is a plain value with no shared state; no operation performs I/O.

pub mod angle;
pub mod cfg;
pub mod draw;
pub mod error;
pub mod line;
pub mod rect;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{DrawCfg, COLLINEAR_EPS};
pub use error::{GeomError, OperandKind, Result};
pub use line::Line;
pub use rect::{Bounds2, RectBounds};
pub use vec2::{Operand, Vector2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{
        angle_between_vectors, angle_diff, angle_from_vector, deg_to_rad, lerp_angle,
        normalize_angle, rad_to_deg, rotate_towards, rotate_vector, vector_from_angle,
    };
    pub use crate::draw::{RecordingSink, SegmentSink};
    pub use crate::{Bounds2, GeomError, Line, Operand, RectBounds, Vector2};
}
