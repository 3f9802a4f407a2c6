//! Point and segment containment against a polygon.

use nalgebra::Vector2;

use super::segment::{is_between_points, segments_cross_properly};
use super::types::{Containment, Polygon};
use crate::cfg::BOUNDARY_EPS;

/// Ray-casting containment with a boundary band of `cfg::BOUNDARY_EPS`.
#[inline]
pub fn point_in_polygon(p: Vector2<f64>, poly: &Polygon) -> Containment {
    point_in_polygon_tol(p, poly, BOUNDARY_EPS)
}

/// Same as [`point_in_polygon`] with an explicit boundary distance.
pub fn point_in_polygon_tol(p: Vector2<f64>, poly: &Polygon, tol: f64) -> Containment {
    if poly.edges().any(|(a, b)| is_between_points(p, a, b, tol)) {
        return Containment::OnBoundary;
    }
    let mut inside = false;
    for (a, b) in poly.edges() {
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Inside or on the boundary.
#[inline]
pub fn is_point_in_polygon(p: Vector2<f64>, poly: &Polygon) -> bool {
    point_in_polygon(p, poly).is_in()
}

/// True if `[a, b]` crosses the boundary of `poly` into its interior.
///
/// That is: the segment properly crosses an edge, one endpoint is strictly
/// inside while the other is strictly outside, or the segment runs through the
/// interior between two boundary contacts (e.g. entering and leaving through
/// vertices). Touching the boundary, grazing a vertex, running along an edge,
/// or a chord whose only contacts are its own endpoints is not intersecting.
pub fn segment_intersects_polygon(a: Vector2<f64>, b: Vector2<f64>, poly: &Polygon) -> bool {
    let split = matches!(
        (point_in_polygon(a, poly), point_in_polygon(b, poly)),
        (Containment::Inside, Containment::Outside) | (Containment::Outside, Containment::Inside)
    );
    split
        || poly
            .edges()
            .any(|(p, q)| segments_cross_properly(a, b, p, q))
        || enters_through_contacts(a, b, poly)
}

/// Minimum parameter gap along the segment between two distinct contacts.
const CONTACT_EPS: f64 = 1e-9;

/// Boundary contacts of `[a, b]` (vertices on the segment, endpoints on the
/// boundary), sorted along the segment; true if the stretch between two
/// consecutive contacts lies inside. At least one contact must be interior
/// to the segment.
fn enters_through_contacts(a: Vector2<f64>, b: Vector2<f64>, poly: &Polygon) -> bool {
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return false;
    }
    let mut ts: Vec<f64> = poly
        .vertices()
        .iter()
        .filter(|&&v| is_between_points(v, a, b, BOUNDARY_EPS))
        .map(|&v| (v - a).dot(&d) / len2)
        .collect();
    for (p, t) in [(a, 0.0), (b, 1.0)] {
        if point_in_polygon(p, poly) == Containment::OnBoundary {
            ts.push(t);
        }
    }
    if !ts
        .iter()
        .any(|&t| t > CONTACT_EPS && t < 1.0 - CONTACT_EPS)
    {
        return false;
    }
    ts.sort_by(f64::total_cmp);
    ts.windows(2).any(|w| {
        w[1] - w[0] > CONTACT_EPS
            && point_in_polygon(a + d * (0.5 * (w[0] + w[1])), poly) == Containment::Inside
    })
}
