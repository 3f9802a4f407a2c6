//! Polygon value types and the containment/winding enums.

use nalgebra::Vector2;

use crate::error::GeometryError;

/// Closed polygon given by its vertex ring (at least two vertices).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pts: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Build from parallel coordinate sequences.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, GeometryError> {
        check_xy(x, y)?;
        Ok(Self {
            pts: x.iter().zip(y).map(|(&px, &py)| Vector2::new(px, py)).collect(),
        })
    }

    pub fn from_points(pts: Vec<Vector2<f64>>) -> Result<Self, GeometryError> {
        if pts.len() < 2 {
            return Err(GeometryError::shape(format!(
                "a polygon needs at least 2 vertices (got {})",
                pts.len()
            )));
        }
        Ok(Self { pts })
    }

    /// Skips validation; callers guarantee `pts.len() >= 2`.
    pub(crate) fn from_points_unchecked(pts: Vec<Vector2<f64>>) -> Self {
        Self { pts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// True if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    /// Edges `(v[i], v[i+1])`, including the closing edge back to `v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }

    pub fn xs(&self) -> Vec<f64> {
        self.pts.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.pts.iter().map(|p| p.y).collect()
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn bounds(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut lo = self.pts[0];
        let mut hi = self.pts[0];
        for p in &self.pts[1..] {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (lo, hi)
    }
}

/// Shape check shared by every `(x, y)` entry point.
pub(crate) fn check_xy(x: &[f64], y: &[f64]) -> Result<(), GeometryError> {
    if x.len() < 2 {
        return Err(GeometryError::shape(format!(
            "'x' must have at least 2 coordinates (got {})",
            x.len()
        )));
    }
    if x.len() != y.len() {
        return Err(GeometryError::shape(format!(
            "'x' and 'y' must have the same length (got {} and {})",
            x.len(),
            y.len()
        )));
    }
    Ok(())
}

/// Where a point lies relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Inside,
    OnBoundary,
    Outside,
}

impl Containment {
    /// Scripting-style code: `1` inside, `0` boundary, `-1` outside.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Inside => 1,
            Self::OnBoundary => 0,
            Self::Outside => -1,
        }
    }

    /// Inside or on the boundary.
    #[inline]
    pub fn is_in(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Rectangle as four corners in counter-clockwise order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub corners: [Vector2<f64>; 4],
    pub area: f64,
    /// Rotation of the first side relative to the x-axis, in `[0, π/2)`.
    pub angle: f64,
}
