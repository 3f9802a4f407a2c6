//! Winding, orientation and centroid.

use nalgebra::SVector;

use super::types::{Polygon, Winding};
use crate::error::GeometryError;

/// Shoelace signed area; positive for counter-clockwise rings.
pub fn signed_area(x: &[f64], y: &[f64]) -> Result<f64, GeometryError> {
    Ok(Polygon::from_xy(x, y)?.signed_area())
}

/// Winding of the ring; a zero-area ring reports counter-clockwise.
pub fn polygon_orientation(x: &[f64], y: &[f64]) -> Result<Winding, GeometryError> {
    Ok(Polygon::from_xy(x, y)?.winding())
}

/// Return `(x, y)` with the requested winding, reversing both when needed.
pub fn orient_polygon(
    x: &[f64],
    y: &[f64],
    clockwise: bool,
) -> Result<(Vec<f64>, Vec<f64>), GeometryError> {
    let want = if clockwise {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    };
    let mut xo = x.to_vec();
    let mut yo = y.to_vec();
    if polygon_orientation(x, y)? != want {
        xo.reverse();
        yo.reverse();
    }
    Ok((xo, yo))
}

/// Arithmetic mean of the vertices (not the area centroid).
pub fn polygon_centroid<const D: usize>(
    points: &[SVector<f64, D>],
) -> Result<SVector<f64, D>, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::shape("centroid of an empty point set"));
    }
    let sum = points
        .iter()
        .fold(SVector::<f64, D>::zeros(), |acc, p| acc + p);
    Ok(sum / points.len() as f64)
}

impl Polygon {
    pub fn signed_area(&self) -> f64 {
        let n = self.len();
        let v = self.vertices();
        0.5 * (0..n)
            .map(|i| {
                let j = (i + 1) % n;
                v[i].x * v[j].y - v[j].x * v[i].y
            })
            .sum::<f64>()
    }

    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}
