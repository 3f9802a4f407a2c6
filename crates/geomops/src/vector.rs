//! Vector and point primitives.
//!
//! - Fixed-dimension helpers are generic over `SVector<f64, D>` so the same
//!   code serves 2D and 3D points.
//! - `dot` and `distance` also exist in a permissive slice form that accepts
//!   any equal length and returns `None` on a length mismatch.
//!
//! Degenerate policy: normalizing a zero vector returns it unchanged and the
//! angle involving a zero vector is `0`. Neither case panics or yields NaN.

use nalgebra::{SVector, Vector3};

use crate::cfg::{AREA_EPS, COLLINEAR_EPS};

/// Cross product of two 3-vectors.
#[inline]
pub fn cross(a: Vector3<f64>, b: Vector3<f64>) -> Vector3<f64> {
    a.cross(&b)
}

/// Dot product of two equal-length sequences; `None` if the lengths differ.
pub fn dot(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean distance between two equal-length points; `None` if the lengths differ.
pub fn distance(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt(),
    )
}

#[inline]
pub fn scale<const D: usize>(c: f64, v: SVector<f64, D>) -> SVector<f64, D> {
    v * c
}

#[inline]
pub fn add<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>) -> SVector<f64, D> {
    a + b
}

#[inline]
pub fn subtract<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>) -> SVector<f64, D> {
    a - b
}

#[inline]
pub fn norm<const D: usize>(v: SVector<f64, D>) -> f64 {
    v.norm()
}

/// `v / |v|`, or `v` itself when `|v| == 0`.
#[inline]
pub fn normalize<const D: usize>(v: SVector<f64, D>) -> SVector<f64, D> {
    let n = v.norm();
    if n == 0.0 {
        v
    } else {
        v / n
    }
}

/// Vector pointing from `p1` to `p2`.
#[inline]
pub fn vector_between<const D: usize>(p1: SVector<f64, D>, p2: SVector<f64, D>) -> SVector<f64, D> {
    p2 - p1
}

#[inline]
pub fn midpoint<const D: usize>(p1: SVector<f64, D>, p2: SVector<f64, D>) -> SVector<f64, D> {
    (p1 + p2) * 0.5
}

/// Unsigned angle in `[0, π]`; `0` if either vector is zero.
pub fn angle_between<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(&b) / denom).clamp(-1.0, 1.0).acos()
}

/// Cosine of the angle between the two directions (`1` parallel, `-1` antiparallel).
pub fn parallel_coeff<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>) -> f64 {
    normalize(a).dot(&normalize(b))
}

/// Area of the triangle `p1 p2 p3`; exactly `0` for (numerically) collinear points.
pub fn triangle_area(p1: Vector3<f64>, p2: Vector3<f64>, p3: Vector3<f64>) -> f64 {
    let area = 0.5 * (p2 - p1).cross(&(p3 - p1)).norm();
    if area < AREA_EPS {
        0.0
    } else {
        area
    }
}

/// True if `|x|` is below the collinearity tolerance.
#[inline]
pub fn is_small(x: f64) -> bool {
    x.abs() < COLLINEAR_EPS
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Radians to degrees, rounded up at `digits` decimals.
pub fn degrees_over_rounded(rad: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (rad.to_degrees() * p).ceil() / p
}

/// Degrees to radians, rounded up at `digits` decimals.
pub fn radians_over_rounded(deg: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (deg.to_radians() * p).ceil() / p
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Vector2};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn cross_and_dot_basics() {
        let c = cross(vector![1.0, 0.0, 0.0], vector![0.0, 1.0, 0.0]);
        assert_eq!(c, vector![0.0, 0.0, 1.0]);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Some(32.0));
        assert_eq!(dot(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]), Some(70.0));
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[5.0, 6.0]), None);
    }

    #[test]
    fn distance_permissive() {
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]), Some(5.0));
        assert_eq!(distance(&[1.0, 1.0, 1.0], &[1.0, 1.0, 3.0]), Some(2.0));
        assert!(distance(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn normalize_zero_is_identity() {
        let z = Vector3::<f64>::zeros();
        assert_eq!(normalize(z), z);
        assert_eq!(norm(z), 0.0);
        let n = normalize(vector![3.0, 0.0, 4.0]);
        assert!((n.norm() - 1.0).abs() < 1e-15);
        assert!((n.z - 0.8).abs() < 1e-15);
    }

    #[test]
    fn elementwise_helpers() {
        let a = vector![1.0, 2.0, 3.0];
        let b = vector![4.0, 5.0, 6.0];
        assert_eq!(add(a, b), vector![5.0, 7.0, 9.0]);
        assert_eq!(subtract(b, a), vector![3.0, 3.0, 3.0]);
        assert_eq!(vector_between(a, b), vector![3.0, 3.0, 3.0]);
        assert_eq!(scale(2.0, a), vector![2.0, 4.0, 6.0]);
        assert_eq!(midpoint(a, b), vector![2.5, 3.5, 4.5]);
        let m2 = midpoint(Vector2::new(0.0, 0.0), Vector2::new(2.0, -2.0));
        assert_eq!(m2, Vector2::new(1.0, -1.0));
    }

    #[test]
    fn angle_between_clamps_and_handles_zero() {
        let a = vector![1.0, 0.0, 0.0];
        assert!((angle_between(a, vector![0.0, 2.0, 0.0]) - FRAC_PI_2).abs() < 1e-15);
        assert!((angle_between(a, -a) - PI).abs() < 1e-15);
        // dot/(|a||b|) can overshoot 1 for nearly equal vectors
        let b = vector![1.0 + 1e-16, 1e-17, 0.0];
        assert!(!angle_between(a, b).is_nan());
        assert_eq!(angle_between(a, Vector3::zeros()), 0.0);
    }

    #[test]
    fn triangle_area_collinear_is_zero() {
        let area = triangle_area(
            vector![0.0, 0.0, 0.0],
            vector![10.0, 10.0, 10.0],
            vector![20.0, 20.0, 20.0],
        );
        assert_eq!(area, 0.0);
        let right = triangle_area(
            vector![0.0, 0.0, 0.0],
            vector![2.0, 0.0, 0.0],
            vector![0.0, 3.0, 0.0],
        );
        assert!((right - 3.0).abs() < 1e-15);
    }

    #[test]
    fn parallel_coeff_signs() {
        let a = vector![1.0, 1.0, 0.0];
        assert!((parallel_coeff(a, a * 3.0) - 1.0).abs() < 1e-15);
        assert!((parallel_coeff(a, -a) + 1.0).abs() < 1e-15);
        assert!(parallel_coeff(a, vector![1.0, -1.0, 0.0]).abs() < 1e-15);
    }

    #[test]
    fn angle_unit_rounding() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-15);
        assert!((rad_to_deg(FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert_eq!(degrees_over_rounded(0.5, 1), 28.7);
        assert_eq!(degrees_over_rounded(1.0, 2), 57.3);
        assert_eq!(radians_over_rounded(180.0, 4), 3.1416);
        assert!(is_small(1e-12));
        assert!(!is_small(1e-6));
    }
}
