mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geomops::cfg::RectSearchCfg;
use geomops::polygon::{find_largest_inscribed_rectangle_with, Polygon, Rectangle};
use geomops::rotation::{
    frame_from_two_vectors, frame_to_euler_zxz, frame_to_euler_zyz, frame_to_quaternion,
    quat_to_wxyz, quaternion_to_axis_angle, EulerAngles,
};
use geomops::units::parse_dimensioned_value;
use geomops::Vec3;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "geomops")]
#[command(about = "Geometry and orientation utilities; every command prints JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Parse a dimensioned value such as 2mm, 180deg or 1m_per_h
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Express the result in this unit instead of SI base units
        #[arg(long)]
        to: Option<String>,
    },
    /// Build a frame from two directions and print every orientation form
    Frame {
        /// Local x-axis direction, as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        axis: Vec3<f64>,
        /// Direction that must lie in the local xy-plane, as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        towards: Vec3<f64>,
    },
    /// Largest rectangle inscribed in a polygon
    Rect {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        x: Vec<f64>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        y: Vec<f64>,
        #[arg(long, default_value_t = RectSearchCfg::default().angle_divisions)]
        angles: usize,
        #[arg(long, default_value_t = RectSearchCfg::default().grid_divisions)]
        grid: usize,
        /// Also write the result (plus a provenance sidecar) to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Parse { text, to } => serde_json::to_value(parse(&text, to.as_deref())?)?,
        Action::Frame { axis, towards } => serde_json::to_value(frame(axis, towards)?)?,
        Action::Rect {
            x,
            y,
            angles,
            grid,
            out,
        } => {
            let cfg = RectSearchCfg {
                angle_divisions: angles,
                grid_divisions: grid,
            };
            serde_json::to_value(rect(&x, &y, &cfg, out)?)?
        }
        Action::Report => provenance::build_block(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn parse_vec3(s: &str) -> Result<Vec3<f64>, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        &[x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected 3 comma-separated numbers, got {}", parts.len())),
    }
}

#[derive(Debug, Serialize)]
struct ParseOut {
    text: String,
    unit: String,
    value: f64,
}

fn parse(text: &str, to: Option<&str>) -> Result<ParseOut> {
    tracing::info!(text, to = ?to, "parse");
    let value =
        parse_dimensioned_value(text, to).with_context(|| format!("parsing {text:?}"))?;
    Ok(ParseOut {
        text: text.to_string(),
        unit: to.unwrap_or("SI").to_string(),
        value,
    })
}

#[derive(Debug, Serialize)]
struct EulerOut {
    radians: [f64; 3],
    degrees: [f64; 3],
}

impl From<EulerAngles> for EulerOut {
    fn from(e: EulerAngles) -> Self {
        Self {
            radians: [e.phi, e.theta, e.psi],
            degrees: e.to_degrees(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FrameOut {
    x_axis: [f64; 3],
    y_axis: [f64; 3],
    z_axis: [f64; 3],
    euler_zxz: EulerOut,
    euler_zyz: EulerOut,
    quaternion_wxyz: [f64; 4],
    axis: [f64; 3],
    angle_deg: f64,
}

fn frame(axis: Vec3<f64>, towards: Vec3<f64>) -> Result<FrameOut> {
    tracing::info!(axis = ?axis.as_slice(), towards = ?towards.as_slice(), "frame");
    let f = frame_from_two_vectors(axis, towards);
    if !f.is_orthonormal(1e-9) {
        bail!("--axis and --towards must be non-zero and not parallel");
    }
    let q = frame_to_quaternion(&f);
    let aa = quaternion_to_axis_angle(&q);
    Ok(FrameOut {
        x_axis: f.x.into(),
        y_axis: f.y.into(),
        z_axis: f.z.into(),
        euler_zxz: frame_to_euler_zxz(&f).into(),
        euler_zyz: frame_to_euler_zyz(&f).into(),
        quaternion_wxyz: quat_to_wxyz(&q),
        axis: aa.axis.into(),
        angle_deg: aa.angle.to_degrees(),
    })
}

#[derive(Debug, Serialize)]
struct RectOut {
    corners: Vec<[f64; 2]>,
    area: f64,
    angle_deg: f64,
}

impl From<Rectangle> for RectOut {
    fn from(r: Rectangle) -> Self {
        Self {
            corners: r.corners.iter().map(|&c| c.into()).collect(),
            area: r.area,
            angle_deg: r.angle.to_degrees(),
        }
    }
}

fn rect(x: &[f64], y: &[f64], cfg: &RectSearchCfg, out: Option<PathBuf>) -> Result<Option<RectOut>> {
    tracing::info!(
        vertices = x.len(),
        angles = cfg.angle_divisions,
        grid = cfg.grid_divisions,
        "rect"
    );
    let poly = Polygon::from_xy(x, y)?;
    let res: Option<RectOut> = find_largest_inscribed_rectangle_with(&poly, cfg).map(Into::into);
    if let Some(path) = out {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&path, serde_json::to_vec_pretty(&res)?)
            .with_context(|| format!("writing {}", path.display()))?;
        let params = serde_json::json!({
            "x": x,
            "y": y,
            "angle_divisions": cfg.angle_divisions,
            "grid_divisions": cfg.grid_divisions,
        });
        let sidecar = provenance::write_sidecar(&path, provenance::Payload::new("rect", params))?;
        tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote");
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn vec3_arguments() {
        assert_eq!(parse_vec3("1, -2,3.5").unwrap(), Vec3::new(1.0, -2.0, 3.5));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,a,2").is_err());
    }

    #[test]
    fn parse_reports_target_unit() {
        let out = parse("2mm", Some("mm")).unwrap();
        assert_eq!(out.value, 2.0);
        assert_eq!(out.unit, "mm");
        assert!(parse("2parsec", None).is_err());
    }

    #[test]
    fn frame_rejects_parallel_directions() {
        assert!(frame(Vec3::x(), Vec3::x() * 2.0).is_err());
        let out = frame(Vec3::x(), Vec3::y()).unwrap();
        assert_eq!(out.quaternion_wxyz, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(out.angle_deg, 0.0);
    }

    #[test]
    fn rect_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.json");
        let cfg = RectSearchCfg::default();
        let res = rect(
            &[0.0, 2.0, 2.0, 0.0],
            &[0.0, 0.0, 2.0, 2.0],
            &cfg,
            Some(path.clone()),
        )
        .unwrap()
        .unwrap();
        assert!((res.area - 4.0).abs() < 1e-9);
        assert!(path.exists());
        assert!(dir.path().join("square.provenance.json").exists());
        assert!(rect(&[0.0, 1.0], &[0.0], &cfg, None).is_err());
    }
}
