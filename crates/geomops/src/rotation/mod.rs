//! Frames and orientation representations.
//!
//! Conventions
//! - A `Frame` holds the local axes expressed in world coordinates; they are
//!   the columns of the rotation matrix `R` mapping local to world.
//! - Euler angles `(phi, theta, psi)` compose as `R = Rz(phi) Ra(theta) Rz(psi)`
//!   with `a = x` (ZXZ) or `a = y` (ZYZ); `theta ∈ [0, π]`, `phi, psi ∈ (-π, π]`.
//! - At gimbal lock (`theta ∈ {0, π}`) the redundancy is folded into `phi`
//!   and `psi` is pinned to `0` (ZXZ) or `π/2` (ZYZ).
//! - Quaternions are nalgebra `Quaternion<f64>` (scalar `w`, vector `i, j, k`);
//!   use `quat_from_wxyz` / `quat_to_wxyz` for scalar-first arrays.
//! - Composition: `rotate(v, q1 * q2) == rotate(rotate(v, q2), q1)`.

mod angle;
mod euler;
mod frame;
mod quat;

pub use angle::{angle_sign_2d, angle_sign_3d};
pub use euler::{
    euler_to_quaternion, euler_zxz_to_quaternion, euler_zyz_to_quaternion, frame_to_euler,
    frame_to_euler_zxz, frame_to_euler_zyz, quaternion_to_euler, quaternion_to_euler_zxz,
    quaternion_to_euler_zyz, EulerAngles, EulerConvention,
};
pub use frame::{
    frame_from_two_vectors, mirror_point, rotate_vector_about_axis, AngleUnit, Axis, Frame, Plane,
};
pub use quat::{
    axis_angle_to_quaternion, frame_to_quaternion, quat_from_wxyz, quat_to_wxyz,
    quaternion_conjugate, quaternion_product, quaternion_to_axis_angle, quaternion_to_frame,
    rotate_vector_by_quaternion, rotate_vector_by_quaternion_inverse, AxisAngle, Quat,
};
