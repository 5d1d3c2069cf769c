//! SVG implementation of the core's `SegmentSink`.
//!
//! Strokes are collected in draw order and turned into a document on demand.

use std::path::Path;

use anyhow::{Context, Result};
use planar::draw::SegmentSink;
use planar::{Bounds2, Vector2};
use svg::node::element::{Line as SvgLine, Rectangle};
use svg::Document;

/// Collects segments and writes them as `<line>` elements inside `bounds`.
#[derive(Debug)]
pub struct SvgSink {
    bounds: Bounds2,
    background: Option<String>,
    lines: Vec<SvgLine>,
}

impl SvgSink {
    pub fn new(bounds: Bounds2) -> Self {
        Self {
            bounds,
            background: None,
            lines: Vec::new(),
        }
    }

    pub fn with_background(mut self, fill: impl Into<String>) -> Self {
        self.background = Some(fill.into());
        self
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn document(&self) -> Document {
        let b = &self.bounds;
        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("{} {} {} {}", b.left, b.top, b.width(), b.height()),
            )
            .set("width", b.width())
            .set("height", b.height());
        if let Some(fill) = &self.background {
            doc = doc.add(
                Rectangle::new()
                    .set("x", b.left)
                    .set("y", b.top)
                    .set("width", b.width())
                    .set("height", b.height())
                    .set("fill", fill.as_str()),
            );
        }
        for line in &self.lines {
            doc = doc.add(line.clone());
        }
        doc
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        svg::save(path, &self.document()).with_context(|| format!("writing {}", path.display()))
    }
}

impl SegmentSink for SvgSink {
    type Color = String;

    fn draw_line(&mut self, color: &String, start: Vector2, end: Vector2, width: u32) {
        self.lines.push(
            SvgLine::new()
                .set("x1", start.x)
                .set("y1", start.y)
                .set("x2", end.x)
                .set("y2", end.y)
                .set("stroke", color.as_str())
                .set("stroke-width", width),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar::Line;

    #[test]
    fn lines_become_svg_elements() {
        let mut sink = SvgSink::new(Bounds2::new(0.0, 0.0, 10.0, 10.0));
        let l = Line::new(Vector2::new(1.0, 0.0), Vector2::new(0.0, 5.0));
        l.draw_segment(&mut sink, &"#ff0000".to_string(), 0.0, 10.0, 2);
        assert_eq!(sink.len(), 1);
        let text = sink.document().to_string();
        assert!(text.contains("<line"));
        assert!(text.contains("stroke=\"#ff0000\""));
        assert!(text.contains("stroke-width=\"2\""));
        assert!(text.contains("viewBox=\"0 0 10 10\""));
    }
}
