//! Rendering seam: the core hands finished segments to a sink and never rasterizes.

use crate::vec2::Vector2;

/// Receives line segments to rasterize. Nothing is returned to the core.
pub trait SegmentSink {
    type Color;

    fn draw_line(&mut self, color: &Self::Color, start: Vector2, end: Vector2, width: u32);
}

/// One segment as handed to a sink.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke<C> {
    pub color: C,
    pub start: Vector2,
    pub end: Vector2,
    pub width: u32,
}

/// Sink that keeps every segment in memory, in draw order.
#[derive(Clone, Debug)]
pub struct RecordingSink<C> {
    pub strokes: Vec<Stroke<C>>,
}

impl<C> Default for RecordingSink<C> {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }
}

impl<C: Clone> SegmentSink for RecordingSink<C> {
    type Color = C;

    fn draw_line(&mut self, color: &C, start: Vector2, end: Vector2, width: u32) {
        self.strokes.push(Stroke {
            color: color.clone(),
            start,
            end,
            width,
        });
    }
}
