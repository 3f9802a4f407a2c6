//! Largest inscribed rectangle.
//!
//! Search
//! - Sample `angle_divisions` orientations in `[0, π/2)` (a rectangle is
//!   symmetric under quarter turns, so this covers every orientation).
//! - For each, rotate the polygon into the rectangle's frame and solve the
//!   axis-aligned problem on a grid made of the polygon's own vertex
//!   coordinates plus `grid_divisions` uniform lines per axis.
//! - A grid cell is usable when its center is strictly inside and no polygon
//!   edge passes through its open interior. The best block of usable cells is
//!   found by enumerating column spans and scanning row runs.
//! - Rotate the winner back and keep the global best by area.
//!
//! The result is exact when the optimum's sides lie on grid lines (e.g. for
//! axis-aligned rectilinear polygons at angle 0) and a grid approximation
//! from inside otherwise. Ties keep the first orientation found.

use nalgebra::{Rotation2, Vector2};
use tracing::debug;

use super::contain::point_in_polygon;
use super::types::{Containment, Polygon, Rectangle};
use crate::cfg::RectSearchCfg;

/// Relative margin a later candidate must beat to replace the current best.
const TIE_EPS: f64 = 1e-9;

/// Largest rectangle inside `poly` over `angle_divisions` sampled orientations.
///
/// `None` if no grid cell fits (zero-area or degenerate polygons).
pub fn find_largest_inscribed_rectangle(
    poly: &Polygon,
    angle_divisions: usize,
) -> Option<Rectangle> {
    let cfg = RectSearchCfg {
        angle_divisions,
        ..RectSearchCfg::default()
    };
    find_largest_inscribed_rectangle_with(poly, &cfg)
}

pub fn find_largest_inscribed_rectangle_with(
    poly: &Polygon,
    cfg: &RectSearchCfg,
) -> Option<Rectangle> {
    let divisions = cfg.angle_divisions.max(1);
    let mut best: Option<Rectangle> = None;
    for k in 0..divisions {
        let angle = std::f64::consts::FRAC_PI_2 * k as f64 / divisions as f64;
        let to_local = Rotation2::new(-angle);
        let local =
            Polygon::from_points_unchecked(poly.vertices().iter().map(|&p| to_local * p).collect());
        let Some((lo, hi)) = largest_axis_aligned(&local, cfg.grid_divisions) else {
            continue;
        };
        let area = (hi.x - lo.x) * (hi.y - lo.y);
        debug!(angle, area, "inscribed rectangle candidate");
        if best
            .as_ref()
            .is_none_or(|b| area > b.area * (1.0 + TIE_EPS))
        {
            let back = Rotation2::new(angle);
            let corners = [
                lo,
                Vector2::new(hi.x, lo.y),
                hi,
                Vector2::new(lo.x, hi.y),
            ]
            .map(|c| back * c);
            best = Some(Rectangle {
                corners,
                area,
                angle,
            });
        }
    }
    if let Some(b) = &best {
        debug!(angle = b.angle, area = b.area, "inscribed rectangle");
    }
    best
}

/// Sorted, deduplicated grid coordinates on `[lo, hi]`.
fn grid_lines(mut vals: Vec<f64>, lo: f64, hi: f64, divisions: usize) -> Vec<f64> {
    let n = divisions.max(1);
    vals.extend((0..=n).map(|i| lo + (hi - lo) * i as f64 / n as f64));
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let tol = 1e-12 * (hi - lo).abs().max(1.0);
    vals.dedup_by(|a, b| (*a - *b).abs() < tol);
    vals
}

/// Best axis-aligned rectangle `(min, max)` inside `poly`.
fn largest_axis_aligned(
    poly: &Polygon,
    grid_divisions: usize,
) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let (lo, hi) = poly.bounds();
    if !(hi.x > lo.x && hi.y > lo.y) {
        return None;
    }
    let xs = grid_lines(poly.xs(), lo.x, hi.x, grid_divisions);
    let ys = grid_lines(poly.ys(), lo.y, hi.y, grid_divisions);
    let cols = xs.len() - 1;
    let rows = ys.len() - 1;

    // usable[r][c] for the cell [xs[c], xs[c+1]] x [ys[r], ys[r+1]]
    let usable: Vec<Vec<bool>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    cell_inside(
                        poly,
                        Vector2::new(xs[c], ys[r]),
                        Vector2::new(xs[c + 1], ys[r + 1]),
                    )
                })
                .collect()
        })
        .collect();

    let mut best: Option<(Vector2<f64>, Vector2<f64>)> = None;
    let mut best_area = 0.0;
    let mut ok = vec![true; rows];
    for c0 in 0..cols {
        ok.iter_mut().for_each(|v| *v = true);
        for c1 in c0..cols {
            let mut any = false;
            for r in 0..rows {
                ok[r] &= usable[r][c1];
                any |= ok[r];
            }
            if !any {
                break;
            }
            let width = xs[c1 + 1] - xs[c0];
            let mut start: Option<usize> = None;
            for r in 0..=rows {
                if r < rows && ok[r] {
                    start.get_or_insert(r);
                    continue;
                }
                if let Some(r0) = start.take() {
                    let area = width * (ys[r] - ys[r0]);
                    if area > best_area {
                        best_area = area;
                        best = Some((Vector2::new(xs[c0], ys[r0]), Vector2::new(xs[c1 + 1], ys[r])));
                    }
                }
            }
        }
    }
    best
}

fn cell_inside(poly: &Polygon, lo: Vector2<f64>, hi: Vector2<f64>) -> bool {
    let center = (lo + hi) * 0.5;
    if point_in_polygon(center, poly) != Containment::Inside {
        return false;
    }
    let tol = 1e-9 * (hi - lo).amax();
    !poly
        .edges()
        .any(|(a, b)| crosses_open_box(a, b, lo, hi, tol))
}

/// Liang-Barsky clip of `[a, b]` to the box; true if the clipped chord runs
/// through the open interior rather than along the boundary.
fn crosses_open_box(
    a: Vector2<f64>,
    b: Vector2<f64>,
    lo: Vector2<f64>,
    hi: Vector2<f64>,
    tol: f64,
) -> bool {
    let d = b - a;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, a.x - lo.x),
        (d.x, hi.x - a.x),
        (-d.y, a.y - lo.y),
        (d.y, hi.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return false;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return false;
            }
            t1 = t1.min(r);
        }
    }
    if t1 <= t0 {
        return false;
    }
    let mid = a + d * (0.5 * (t0 + t1));
    mid.x > lo.x + tol && mid.x < hi.x - tol && mid.y > lo.y + tol && mid.y < hi.y - tol
}
