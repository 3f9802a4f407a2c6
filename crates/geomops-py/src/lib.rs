//! PyO3 bindings for selected `geomops` functions.
//!
//! Notes
//! - Bindings are thin: plain floats, tuples and lists in, the same out.
//! - Every library error surfaces as `ValueError` with the library's message.

use pyo3::prelude::*;

mod common;
mod orient;
mod shapes;

#[pymodule]
fn geomops_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", geomops::VERSION)?;
    shapes::register(m)?;
    orient::register(m)?;
    Ok(())
}
