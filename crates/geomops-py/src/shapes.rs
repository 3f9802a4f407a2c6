//! Unit parsing and polygon bindings.

use crate::common::value_err;
use geomops::polygon::{self, Polygon, Winding};
use nalgebra::Vector2;
use pyo3::prelude::*;

#[pyfunction]
#[pyo3(signature = (text, default_unit = None))]
pub fn parse_dimensioned_value(text: &str, default_unit: Option<&str>) -> PyResult<f64> {
    geomops::units::parse_dimensioned_value(text, default_unit).map_err(value_err)
}

/// `1` inside, `0` on the boundary, `-1` outside.
#[pyfunction]
pub fn point_in_polygon(point: (f64, f64), x: Vec<f64>, y: Vec<f64>) -> PyResult<i8> {
    let poly = Polygon::from_xy(&x, &y).map_err(value_err)?;
    Ok(polygon::point_in_polygon(Vector2::new(point.0, point.1), &poly).as_i8())
}

/// Reversed copies of `x`, `y` when their winding differs from the request.
#[pyfunction]
#[pyo3(signature = (x, y, clockwise = false))]
pub fn orient_polygon(x: Vec<f64>, y: Vec<f64>, clockwise: bool) -> PyResult<(Vec<f64>, Vec<f64>)> {
    polygon::orient_polygon(&x, &y, clockwise).map_err(value_err)
}

/// `"cw"` or `"ccw"`.
#[pyfunction]
pub fn polygon_orientation(x: Vec<f64>, y: Vec<f64>) -> PyResult<&'static str> {
    Ok(match polygon::polygon_orientation(&x, &y).map_err(value_err)? {
        Winding::Clockwise => "cw",
        Winding::CounterClockwise => "ccw",
    })
}

/// `(corners, area, angle)` or `None` when nothing fits.
#[pyfunction]
#[pyo3(signature = (x, y, angle_divisions = 16))]
pub fn find_largest_inscribed_rectangle(
    x: Vec<f64>,
    y: Vec<f64>,
    angle_divisions: usize,
) -> PyResult<Option<(Vec<(f64, f64)>, f64, f64)>> {
    let poly = Polygon::from_xy(&x, &y).map_err(value_err)?;
    Ok(
        polygon::find_largest_inscribed_rectangle(&poly, angle_divisions).map(|r| {
            let corners = r.corners.iter().map(|c| (c.x, c.y)).collect();
            (corners, r.area, r.angle)
        }),
    )
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_dimensioned_value, m)?)?;
    m.add_function(wrap_pyfunction!(point_in_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(orient_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_orientation, m)?)?;
    m.add_function(wrap_pyfunction!(find_largest_inscribed_rectangle, m)?)?;
    Ok(())
}
