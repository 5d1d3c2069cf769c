//! JSON scene files for the `render` command.
//!
//! Each entry either carries an explicit parameter span `[t1, t2]` or is
//! clipped to the scene bounds via `Line::intersect_rect`.

use std::path::Path;

use anyhow::{Context, Result};
use planar::{Bounds2, Line};
use serde::{Deserialize, Serialize};

use crate::svg_sink::SvgSink;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    pub bounds: Bounds2,
    #[serde(default)]
    pub background: Option<String>,
    pub lines: Vec<SceneLine>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneLine {
    pub line: Line,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default)]
    pub span: Option<[f64; 2]>,
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_width() -> u32 {
    planar::DrawCfg::default().width
}

/// What happened while rendering a scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    pub drawn: usize,
    pub skipped: usize,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Draw every line into `sink`; lines that miss the bounds are skipped.
    pub fn render_into(&self, sink: &mut SvgSink) -> RenderStats {
        let mut stats = RenderStats::default();
        for (idx, entry) in self.lines.iter().enumerate() {
            if let Some([t1, t2]) = entry.span {
                entry.line.draw_segment(sink, &entry.color, t1, t2, entry.width);
                stats.drawn += 1;
                continue;
            }
            let hits = entry.line.intersect_rect(&self.bounds);
            match (hits.first(), hits.last()) {
                (Some(&a), Some(&b)) if hits.len() >= 2 => {
                    let t1 = entry.line.projection_of_point(a);
                    let t2 = entry.line.projection_of_point(b);
                    entry.line.draw_segment(sink, &entry.color, t1, t2, entry.width);
                    stats.drawn += 1;
                }
                _ => {
                    tracing::debug!(idx, hits = hits.len(), "line misses scene bounds");
                    stats.skipped += 1;
                }
            }
        }
        stats
    }

    pub fn sink(&self) -> SvgSink {
        let sink = SvgSink::new(self.bounds);
        match &self.background {
            Some(fill) => sink.with_background(fill.clone()),
            None => sink,
        }
    }
}
