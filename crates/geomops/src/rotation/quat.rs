//! Quaternion algebra, axis-angle and frame conversions.

use nalgebra::{Quaternion, Rotation3, UnitQuaternion, Vector3};

use super::frame::Frame;
use crate::cfg::AXIS_EPS;
use crate::vector::normalize;

pub type Quat = Quaternion<f64>;

/// Rotation axis (unit) and angle in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle {
    pub axis: Vector3<f64>,
    pub angle: f64,
}

/// Scalar-first `[w, x, y, z]` to a quaternion.
#[inline]
pub fn quat_from_wxyz(q: [f64; 4]) -> Quat {
    Quaternion::new(q[0], q[1], q[2], q[3])
}

/// Quaternion to scalar-first `[w, x, y, z]`.
#[inline]
pub fn quat_to_wxyz(q: &Quat) -> [f64; 4] {
    [q.w, q.i, q.j, q.k]
}

/// Unit-normalized copy; a zero quaternion becomes the identity.
pub(crate) fn unit(q: &Quat) -> Quat {
    let n = q.norm();
    if n == 0.0 {
        Quat::identity()
    } else {
        q / n
    }
}

/// Hamilton product `q1 q2` (apply `q2` first, then `q1`).
#[inline]
pub fn quaternion_product(q1: &Quat, q2: &Quat) -> Quat {
    q1 * q2
}

#[inline]
pub fn quaternion_conjugate(q: &Quat) -> Quat {
    q.conjugate()
}

/// `w = cos(angle/2)`, `(x, y, z) = sin(angle/2) * normalize(axis)`.
///
/// A zero axis yields the identity.
pub fn axis_angle_to_quaternion(axis: Vector3<f64>, angle: f64) -> Quat {
    if axis.norm() == 0.0 {
        return Quat::identity();
    }
    let (s, c) = (0.5 * angle).sin_cos();
    Quaternion::from_parts(c, normalize(axis) * s)
}

/// Shortest rotation equivalent to `q`: `angle ∈ [0, π]`.
///
/// When the rotation is (numerically) the identity the axis is undefined and
/// `+x` is returned with angle `0`.
pub fn quaternion_to_axis_angle(q: &Quat) -> AxisAngle {
    let mut q = unit(q);
    if q.w < 0.0 {
        q = -q;
    }
    let v = q.imag();
    let s = v.norm();
    if s < AXIS_EPS {
        return AxisAngle {
            axis: Vector3::x(),
            angle: 0.0,
        };
    }
    AxisAngle {
        axis: v / s,
        angle: 2.0 * s.atan2(q.w.clamp(-1.0, 1.0)),
    }
}

/// Rotation matrix columns of a (normalized) quaternion.
pub fn quaternion_to_frame(q: &Quat) -> Frame {
    let q = unit(q);
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    Frame {
        x: Vector3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + w * z),
            2.0 * (x * z - w * y),
        ),
        y: Vector3::new(
            2.0 * (x * y - w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + w * x),
        ),
        z: Vector3::new(
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
        ),
    }
}

/// Unit quaternion of an orthonormal frame, with `w >= 0`.
pub fn frame_to_quaternion(frame: &Frame) -> Quat {
    let rot = Rotation3::from_matrix_unchecked(frame.to_matrix());
    let q = UnitQuaternion::from_rotation_matrix(&rot).into_inner();
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}

/// `q (0, v) q*`.
pub fn rotate_vector_by_quaternion(v: Vector3<f64>, q: &Quat) -> Vector3<f64> {
    let q = unit(q);
    (q * Quaternion::from_imag(v) * q.conjugate()).imag()
}

/// `q* (0, v) q`, undoing [`rotate_vector_by_quaternion`].
pub fn rotate_vector_by_quaternion_inverse(v: Vector3<f64>, q: &Quat) -> Vector3<f64> {
    let q = unit(q);
    (q.conjugate() * Quaternion::from_imag(v) * q).imag()
}
