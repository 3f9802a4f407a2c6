//! Frame, Euler and quaternion bindings. Quaternions are `(w, x, y, z)` tuples.

use crate::common::{triple, vec3, Triple, Wxyz};
use geomops::rotation::{self, EulerAngles, Frame};
use pyo3::prelude::*;

fn to_wxyz(q: &rotation::Quat) -> Wxyz {
    let [w, x, y, z] = rotation::quat_to_wxyz(q);
    (w, x, y, z)
}

/// `(x_axis, y_axis, z_axis)` from a primary axis and a direction in the xy-plane.
#[pyfunction]
pub fn frame_from_two_vectors(my_axis: Triple, point_towards: Triple) -> (Triple, Triple, Triple) {
    let f = rotation::frame_from_two_vectors(vec3(my_axis), vec3(point_towards));
    (triple(f.x), triple(f.y), triple(f.z))
}

/// `(phi, theta, psi)` in radians.
#[pyfunction]
pub fn frame_to_euler_zxz(x_axis: Triple, y_axis: Triple, z_axis: Triple) -> Triple {
    let e = rotation::frame_to_euler_zxz(&Frame::new(vec3(x_axis), vec3(y_axis), vec3(z_axis)));
    (e.phi, e.theta, e.psi)
}

#[pyfunction]
pub fn euler_zxz_to_quaternion(phi: f64, theta: f64, psi: f64) -> Wxyz {
    to_wxyz(&rotation::euler_zxz_to_quaternion(EulerAngles::new(phi, theta, psi)))
}

/// `(axis, angle)` with `angle` in `[0, π]`.
#[pyfunction]
pub fn quaternion_to_axis_angle(q: Wxyz) -> (Triple, f64) {
    let aa = rotation::quaternion_to_axis_angle(&rotation::quat_from_wxyz([q.0, q.1, q.2, q.3]));
    (triple(aa.axis), aa.angle)
}

#[pyfunction]
pub fn rotate_vector_by_quaternion(v: Triple, q: Wxyz) -> Triple {
    let q = rotation::quat_from_wxyz([q.0, q.1, q.2, q.3]);
    triple(rotation::rotate_vector_by_quaternion(vec3(v), &q))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frame_from_two_vectors, m)?)?;
    m.add_function(wrap_pyfunction!(frame_to_euler_zxz, m)?)?;
    m.add_function(wrap_pyfunction!(euler_zxz_to_quaternion, m)?)?;
    m.add_function(wrap_pyfunction!(quaternion_to_axis_angle, m)?)?;
    m.add_function(wrap_pyfunction!(rotate_vector_by_quaternion, m)?)?;
    Ok(())
}
