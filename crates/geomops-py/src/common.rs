use nalgebra::Vector3;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub type Triple = (f64, f64, f64);
pub type Wxyz = (f64, f64, f64, f64);

pub fn vec3(t: Triple) -> Vector3<f64> {
    Vector3::new(t.0, t.1, t.2)
}

pub fn triple(v: Vector3<f64>) -> Triple {
    (v.x, v.y, v.z)
}

pub fn value_err<E: std::error::Error>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}
