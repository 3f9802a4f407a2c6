//! Line and segment predicates.
//!
//! Distance and projection helpers are generic over the dimension; the
//! orientation-based intersection test is 2D.

use nalgebra::{SVector, Vector2, Vector3};

use crate::cfg::COLLINEAR_EPS;
use crate::vector::parallel_coeff;

/// Parallel or antiparallel (zero vectors count as collinear).
#[inline]
pub fn are_collinear(v1: Vector3<f64>, v2: Vector3<f64>) -> bool {
    are_collinear_tol(v1, v2, COLLINEAR_EPS)
}

pub fn are_collinear_tol(v1: Vector3<f64>, v2: Vector3<f64>, tol: f64) -> bool {
    v1.cross(&v2).norm() < tol
}

/// `1 - |cos(angle)| < tol`.
pub fn is_parallel<const D: usize>(v1: SVector<f64, D>, v2: SVector<f64, D>, tol: f64) -> bool {
    1.0 - parallel_coeff(v1, v2).abs() < tol
}

/// `|v1·v2| < tol |v1| |v2|`.
pub fn is_perpendicular<const D: usize>(
    v1: SVector<f64, D>,
    v2: SVector<f64, D>,
    tol: f64,
) -> bool {
    v1.dot(&v2).abs() < tol * v1.norm() * v2.norm()
}

/// Projection parameter of `p` on the line `a + t (b - a)`; `None` if `a == b`.
#[inline]
fn projection_param<const D: usize>(
    p: SVector<f64, D>,
    a: SVector<f64, D>,
    b: SVector<f64, D>,
) -> Option<f64> {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        None
    } else {
        Some((p - a).dot(&ab) / len2)
    }
}

/// Vector from the foot of the perpendicular on line `ab` to `p`.
///
/// For `a == b` this is `p - a`.
pub fn distance_vector<const D: usize>(
    p: SVector<f64, D>,
    a: SVector<f64, D>,
    b: SVector<f64, D>,
) -> SVector<f64, D> {
    match projection_param(p, a, b) {
        Some(t) => (p - a) - (b - a) * t,
        None => p - a,
    }
}

/// Distance from `p` to the infinite line through `a` and `b` (not clamped).
#[inline]
pub fn point_segment_distance<const D: usize>(
    p: SVector<f64, D>,
    a: SVector<f64, D>,
    b: SVector<f64, D>,
) -> f64 {
    distance_vector(p, a, b).norm()
}

/// Whether the orthogonal projection of `p` falls within `[a, b]`.
///
/// A degenerate segment (`a == b`) contains every projection.
pub fn is_point_projection_in_segment<const D: usize>(
    p: SVector<f64, D>,
    a: SVector<f64, D>,
    b: SVector<f64, D>,
) -> bool {
    projection_param(p, a, b).map_or(true, |t| (0.0..=1.0).contains(&t))
}

/// `p` lies on the closed segment `[a, b]` within `tol`.
pub fn is_between_points<const D: usize>(
    p: SVector<f64, D>,
    a: SVector<f64, D>,
    b: SVector<f64, D>,
    tol: f64,
) -> bool {
    point_segment_distance(p, a, b) < tol && is_point_projection_in_segment(p, a, b)
}

/// Sign of the turn `a → b → c`: `1` left, `-1` right, `0` collinear.
pub(crate) fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> i8 {
    let ab = b - a;
    let ac = c - a;
    let z = ab.x * ac.y - ab.y * ac.x;
    if z.abs() <= COLLINEAR_EPS * ab.norm() * ac.norm() {
        0
    } else if z > 0.0 {
        1
    } else {
        -1
    }
}

#[inline]
fn within_box(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    let lo = a.inf(&b);
    let hi = a.sup(&b);
    p.x >= lo.x - COLLINEAR_EPS
        && p.x <= hi.x + COLLINEAR_EPS
        && p.y >= lo.y - COLLINEAR_EPS
        && p.y <= hi.y + COLLINEAR_EPS
}

/// Orientation test for segments `[a1, a2]` and `[b1, b2]`.
///
/// Touching at an endpoint counts as intersecting. Collinear segments that
/// overlap or touch only count when `include_collinear` is set.
pub fn segments_intersect(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    include_collinear: bool,
) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 == 0 && o2 == 0 && o3 == 0 && o4 == 0 {
        return include_collinear
            && (within_box(b1, a1, a2)
                || within_box(b2, a1, a2)
                || within_box(a1, b1, b2)
                || within_box(a2, b1, b2));
    }
    o1 != o2 && o3 != o4
}

/// Interiors cross at a single point; touching does not count.
pub(crate) fn segments_cross_properly(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
) -> bool {
    orientation(a1, a2, b1) * orientation(a1, a2, b2) < 0
        && orientation(b1, b2, a1) * orientation(b1, b2, a2) < 0
}
