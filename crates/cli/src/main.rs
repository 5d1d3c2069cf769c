mod provenance;
mod scene;
mod svg_sink;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::angle::{deg_to_rad, rad_to_deg, rotate_towards};
use planar::{Line, Vector2};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::provenance::{current_git_rev, write_sidecar, Sidecar};
use crate::scene::Scene;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Query and render 2D lines, vectors and headings")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect two lines given as DX,DY,PX,PY
    Intersect {
        #[arg(long, value_parser = parse_line, allow_hyphen_values = true)]
        a: Line,
        #[arg(long, value_parser = parse_line, allow_hyphen_values = true)]
        b: Line,
    },
    /// Project a point X,Y onto a line DX,DY,PX,PY
    Project {
        #[arg(long, value_parser = parse_line, allow_hyphen_values = true)]
        line: Line,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Vector2,
    },
    /// Step a heading toward a target with a bounded turn per step
    Heading {
        #[arg(long, allow_hyphen_values = true)]
        from: f64,
        #[arg(long, allow_hyphen_values = true)]
        to: f64,
        #[arg(long)]
        max_step: f64,
        /// Read and report all angles in degrees
        #[arg(long)]
        degrees: bool,
        #[arg(long, default_value_t = 10_000)]
        max_steps: usize,
    },
    /// Render a JSON scene to SVG and write a provenance sidecar
    Render {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Intersect { a, b } => intersect(&a, &b),
        Action::Project { line, point } => project(&line, point),
        Action::Heading {
            from,
            to,
            max_step,
            degrees,
            max_steps,
        } => heading(from, to, max_step, max_steps, degrees)?,
        Action::Render { scene, out } => render(scene, out)?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn parse_floats<const N: usize>(s: &str) -> std::result::Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {}", parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid number {part:?}: {e}"))?;
    }
    Ok(out)
}

fn parse_line(s: &str) -> std::result::Result<Line, String> {
    let [dx, dy, px, py] = parse_floats::<4>(s)?;
    Line::try_new(Vector2::new(dx, dy), Vector2::new(px, py)).map_err(|e| e.to_string())
}

fn parse_point(s: &str) -> std::result::Result<Vector2, String> {
    parse_floats::<2>(s).map(Vector2::from)
}

fn intersect(a: &Line, b: &Line) -> Value {
    let point = a.intersect_line(b);
    tracing::info!(parallel = point.is_none(), "intersect");
    json!({
        "point": point,
        "parallel": a.is_parallel_to(b),
        "angle": a.angle_with(b),
    })
}

fn project(line: &Line, point: Vector2) -> Value {
    tracing::info!(x = point.x, y = point.y, "project");
    json!({
        "t": line.projection_of_point(point),
        "closest": line.closest_point(point),
        "distance": line.distance_to_point(point),
        "on_line": line.detect_collision(point),
    })
}

/// Stepping runs in radians; with `degrees` the inputs and the reported
/// `target`/`steps` are in degrees.
fn heading(
    from: f64,
    to: f64,
    max_step: f64,
    max_steps: usize,
    degrees: bool,
) -> Result<Value> {
    if !(max_step.is_finite() && max_step != 0.0) {
        bail!("--max-step must be finite and non-zero, got {max_step}");
    }
    let (from, to, max_step) = if degrees {
        (deg_to_rad(from), deg_to_rad(to), deg_to_rad(max_step))
    } else {
        (from, to, max_step)
    };
    let target = planar::angle::normalize_angle(to);
    let mut current = from;
    let mut steps = vec![current];
    while current != target {
        if steps.len() > max_steps {
            bail!("target not reached within {max_steps} steps");
        }
        current = rotate_towards(current, to, max_step);
        steps.push(current);
    }
    tracing::info!(steps = steps.len() - 1, degrees, "heading");
    if degrees {
        let steps: Vec<f64> = steps.into_iter().map(rad_to_deg).collect();
        return Ok(json!({ "unit": "deg", "target": rad_to_deg(target), "steps": steps }));
    }
    Ok(json!({ "unit": "rad", "target": target, "steps": steps }))
}

fn render(scene_path: PathBuf, out: PathBuf) -> Result<Value> {
    let scene = Scene::load(&scene_path)?;
    let mut sink = scene.sink();
    let stats = scene.render_into(&mut sink);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    sink.save(&out)?;
    tracing::info!(drawn = stats.drawn, skipped = stats.skipped, out = %out.display(), "render");
    let sidecar = Sidecar::new("render", json!({ "scene": scene_path.to_string_lossy() }))
        .with_summary(serde_json::to_value(stats)?);
    let prov = write_sidecar(&out, sidecar)?;
    Ok(json!({
        "drawn": stats.drawn,
        "skipped": stats.skipped,
        "outputs": [out.to_string_lossy(), prov.to_string_lossy()],
    }))
}

fn report() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "planar_version": planar::VERSION,
        "collinear_eps": planar::COLLINEAR_EPS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_lines_and_points() {
        let l = parse_line("1, 0, -2, 3").unwrap();
        assert_eq!(l.direction, Vector2::new(1.0, 0.0));
        assert_eq!(l.start_pos, Vector2::new(-2.0, 3.0));
        assert_eq!(parse_point("3,4").unwrap(), Vector2::new(3.0, 4.0));
        assert!(parse_line("1,0,0").is_err());
        assert!(parse_line("0,0,1,1").unwrap_err().contains("degenerate"));
        assert!(parse_point("x,1").is_err());
    }

    #[test]
    fn intersect_reports_point_or_null() {
        let a = parse_line("1,0,0,0").unwrap();
        let b = parse_line("0,1,5,0").unwrap();
        let v = intersect(&a, &b);
        assert_eq!(v["point"]["x"], 5.0);
        assert_eq!(v["point"]["y"], 0.0);
        let p = intersect(&a, &parse_line("2,0,0,1").unwrap());
        assert!(p["point"].is_null());
        assert_eq!(p["parallel"], true);
    }

    #[test]
    fn project_reports_distance() {
        let v = project(&parse_line("1,0,0,0").unwrap(), Vector2::new(3.0, 4.0));
        assert_eq!(v["t"], 3.0);
        assert_eq!(v["distance"], 4.0);
        assert_eq!(v["on_line"], false);
    }

    #[test]
    fn heading_steps_until_snapped() {
        let v = heading(0.0, 0.25, 0.1, 100, false).unwrap();
        let steps: Vec<f64> = serde_json::from_value(v["steps"].clone()).unwrap();
        assert_eq!(steps, vec![0.0, 0.1, 0.2, 0.25]);
        assert_eq!(v["unit"], "rad");
        assert!(heading(0.0, 1.0, 0.0, 100, false).is_err());
        assert!(heading(0.0, 3.0, 0.001, 10, false).is_err());
    }

    #[test]
    fn heading_in_degrees_reports_degrees() {
        let v = heading(0.0, 25.0, 10.0, 100, true).unwrap();
        assert_eq!(v["unit"], "deg");
        let target = v["target"].as_f64().unwrap();
        assert!((target - 25.0).abs() < 1e-9);
        let steps: Vec<f64> = serde_json::from_value(v["steps"].clone()).unwrap();
        assert_eq!(steps.len(), 4);
        for (got, want) in steps.iter().zip([0.0, 10.0, 20.0, 25.0]) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
        assert!(heading(0.0, 10.0, 0.0, 100, true).is_err());
    }

    #[test]
    fn render_writes_svg_and_sidecar() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("scene.json");
        std::fs::write(
            &scene_path,
            serde_json::to_vec(&json!({
                "bounds": {"left": 0.0, "top": 0.0, "right": 20.0, "bottom": 20.0},
                "background": "white",
                "lines": [
                    {
                        "line": {"direction": {"x": 1.0, "y": 1.0}, "start_pos": {"x": 0.0, "y": 0.0}},
                        "color": "blue"
                    }
                ]
            }))
            .unwrap(),
        )
        .unwrap();
        let out = dir.path().join("nested").join("scene.svg");
        let v = render(scene_path, out.clone()).unwrap();
        assert_eq!(v["drawn"], 1);
        let svg_text = std::fs::read_to_string(&out).unwrap();
        assert!(svg_text.contains("stroke=\"blue\""));
        assert!(dir.path().join("nested").join("scene.provenance.json").exists());
    }
}
