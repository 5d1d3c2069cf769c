//! Tolerance and drawing defaults.
//!
//! Policy
//! - Tolerances are fixed constants, not user-configurable. Tests pin exact
//!   behavior at the boundary, so changing one is a behavior change.
//! - Drawing defaults live in `DrawCfg` because callers do tune them.

/// Threshold on `|a × b|` below which two directions count as parallel, and
/// below which a point counts as lying on a line.
pub const COLLINEAR_EPS: f64 = 1e-8;

/// Defaults for turning an infinite line into something drawable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCfg {
    /// Length of the segment emitted by `Line::draw`, measured from `start_pos`.
    pub length: f64,
    /// Stroke width handed to the sink.
    pub width: u32,
}

impl Default for DrawCfg {
    fn default() -> Self {
        Self {
            length: 1000.0,
            width: 1,
        }
    }
}
