//! Orthonormal frames, named axes and axis rotations.

use std::str::FromStr;

use nalgebra::{Matrix3, Vector3};

use crate::error::GeometryError;
use crate::vector::normalize;

/// Right-handed triple of local axes in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: Vector3<f64>,
    pub y: Vector3<f64>,
    pub z: Vector3<f64>,
}

impl Frame {
    pub fn new(x: Vector3<f64>, y: Vector3<f64>, z: Vector3<f64>) -> Self {
        Self { x, y, z }
    }

    pub fn identity() -> Self {
        Self {
            x: Vector3::x(),
            y: Vector3::y(),
            z: Vector3::z(),
        }
    }

    /// Rotation matrix with the axes as columns.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.x, self.y, self.z])
    }

    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        Self {
            x: m.column(0).into_owned(),
            y: m.column(1).into_owned(),
            z: m.column(2).into_owned(),
        }
    }

    /// Unit axes, pairwise perpendicular and `z == x × y`, all within `tol`.
    pub fn is_orthonormal(&self, tol: f64) -> bool {
        let m = self.to_matrix();
        (m.transpose() * m - Matrix3::identity()).amax() < tol
            && (self.x.cross(&self.y) - self.z).amax() < tol
    }
}

/// Frame whose x-axis follows `my_axis` and whose xy-plane contains `point_towards`.
///
/// `x = normalize(my_axis)`, `z = normalize(my_axis × point_towards)`, `y = z × x`,
/// so the result is orthonormal even when the inputs are not perpendicular.
/// Parallel inputs have no defined plane: `z` and `y` come out as zero vectors.
pub fn frame_from_two_vectors(my_axis: Vector3<f64>, point_towards: Vector3<f64>) -> Frame {
    let x = normalize(my_axis);
    let z = normalize(my_axis.cross(&point_towards));
    let y = z.cross(&x);
    Frame { x, y, z }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vector3<f64> {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }
}

impl From<Axis> for Vector3<f64> {
    fn from(axis: Axis) -> Self {
        axis.unit()
    }
}

impl FromStr for Axis {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            "Z" => Ok(Self::Z),
            _ => Err(GeometryError::argument(format!("unknown axis {s:?}"))),
        }
    }
}

/// Coordinate plane, named by the two axes it contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    XY,
    YZ,
    ZX,
}

impl Plane {
    /// Axis perpendicular to the plane (`XY → Z`, `YZ → X`, `ZX → Y`).
    pub fn normal_axis(self) -> Axis {
        match self {
            Self::XY => Axis::Z,
            Self::YZ => Axis::X,
            Self::ZX => Axis::Y,
        }
    }
}

impl FromStr for Plane {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XY" | "YX" => Ok(Self::XY),
            "YZ" | "ZY" => Ok(Self::YZ),
            "ZX" | "XZ" => Ok(Self::ZX),
            _ => Err(GeometryError::argument(format!("unknown plane {s:?}"))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }
}

/// Rodrigues rotation of `v` by `angle` about `axis` (right-hand rule).
///
/// A zero axis leaves `v` unchanged.
pub fn rotate_vector_about_axis(
    v: Vector3<f64>,
    angle: f64,
    axis: impl Into<Vector3<f64>>,
    unit: AngleUnit,
) -> Vector3<f64> {
    let axis = axis.into();
    if axis.norm() == 0.0 {
        return v;
    }
    let k = axis.normalize();
    let (s, c) = unit.to_radians(angle).sin_cos();
    v * c + k.cross(&v) * s + k * (k.dot(&v) * (1.0 - c))
}

/// Reflection of `p` across the plane through `plane_point` with normal `plane_normal`.
///
/// A zero normal leaves `p` unchanged.
pub fn mirror_point(
    p: Vector3<f64>,
    plane_point: Vector3<f64>,
    plane_normal: Vector3<f64>,
) -> Vector3<f64> {
    let n = normalize(plane_normal);
    p - n * (2.0 * (p - plane_point).dot(&n))
}
