//! Signed angles between vectors.
//!
//! Both variants return values in `(-π, π]`. With `right_handed` the angle is
//! positive when `a → b` turns counter-clockwise seen from the tip of the
//! normal; `right_handed = false` measures the opposite sense, so
//! `angle(a, b, n, true) == angle(b, a, n, false) == angle(b, a, -n, true)`.

use std::f64::consts::PI;

use nalgebra::{Vector2, Vector3};

use crate::vector::normalize;

#[inline]
fn signed(sin_part: f64, cos_part: f64, right_handed: bool) -> f64 {
    let theta = if right_handed {
        sin_part.atan2(cos_part)
    } else {
        (-sin_part).atan2(cos_part)
    };
    // antiparallel inputs: pick π regardless of the sign of zero
    if theta == -PI {
        PI
    } else {
        theta
    }
}

/// Signed angle from `a` to `b` about `normal`.
pub fn angle_sign_3d(
    a: Vector3<f64>,
    b: Vector3<f64>,
    normal: Vector3<f64>,
    right_handed: bool,
) -> f64 {
    let n = normalize(normal);
    signed(a.cross(&b).dot(&n), a.dot(&b), right_handed)
}

/// Signed angle from `a` to `b` about the implicit `+z` axis.
pub fn angle_sign_2d(a: Vector2<f64>, b: Vector2<f64>, right_handed: bool) -> f64 {
    signed(a.x * b.y - a.y * b.x, a.dot(&b), right_handed)
}
