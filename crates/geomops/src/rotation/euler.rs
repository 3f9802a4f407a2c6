//! Euler angles (ZXZ and ZYZ) from and to frames and quaternions.
//!
//! Frame extraction reads `theta` from the z-axis with `atan2(sin, cos)` and
//! the outer angles with `atan2` of the matching matrix entries. Quaternion
//! extraction uses the half-angle identities
//! `w = cos(θ/2) cos((φ+ψ)/2)`, `z = cos(θ/2) sin((φ+ψ)/2)` and the vector part
//! `sin(θ/2) · (cos, sin)((φ-ψ)/2)` (ZXZ) or `sin(θ/2) · (-sin, cos)((φ-ψ)/2)` (ZYZ).

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::str::FromStr;

use nalgebra::Quaternion;

use super::frame::Frame;
use super::quat::{unit, Quat};
use crate::cfg::GIMBAL_EPS;
use crate::error::GeometryError;

/// `(phi, theta, psi)` in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerAngles {
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
}

impl EulerAngles {
    pub fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }

    pub fn to_degrees(self) -> [f64; 3] {
        [
            self.phi.to_degrees(),
            self.theta.to_degrees(),
            self.psi.to_degrees(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EulerConvention {
    Zxz,
    Zyz,
}

impl FromStr for EulerConvention {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zxz" => Ok(Self::Zxz),
            "zyz" => Ok(Self::Zyz),
            _ => Err(GeometryError::argument(format!(
                "unknown Euler convention {s:?} (expected zxz or zyz)"
            ))),
        }
    }
}

/// Wrap into `(-π, π]`.
#[inline]
fn wrap(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

pub fn frame_to_euler_zxz(frame: &Frame) -> EulerAngles {
    let (x, y, z) = (frame.x, frame.y, frame.z);
    let s = z.x.hypot(z.y);
    if s < GIMBAL_EPS {
        let theta = if z.z >= 0.0 { 0.0 } else { PI };
        return EulerAngles::new(x.y.atan2(x.x), theta, 0.0);
    }
    EulerAngles::new(z.x.atan2(-z.y), s.atan2(z.z), x.z.atan2(y.z))
}

pub fn frame_to_euler_zyz(frame: &Frame) -> EulerAngles {
    let (x, y, z) = (frame.x, frame.y, frame.z);
    let s = z.x.hypot(z.y);
    if s < GIMBAL_EPS {
        let theta = if z.z >= 0.0 { 0.0 } else { PI };
        return EulerAngles::new((-x.x).atan2(x.y), theta, FRAC_PI_2);
    }
    EulerAngles::new(z.y.atan2(z.x), s.atan2(z.z), y.z.atan2(-x.z))
}

pub fn frame_to_euler(frame: &Frame, convention: EulerConvention) -> EulerAngles {
    match convention {
        EulerConvention::Zxz => frame_to_euler_zxz(frame),
        EulerConvention::Zyz => frame_to_euler_zyz(frame),
    }
}

/// `qz(phi) qx(theta) qz(psi)`.
pub fn euler_zxz_to_quaternion(e: EulerAngles) -> Quat {
    let (st, ct) = (0.5 * e.theta).sin_cos();
    let (ss, cs) = (0.5 * (e.phi + e.psi)).sin_cos();
    let (sd, cd) = (0.5 * (e.phi - e.psi)).sin_cos();
    Quaternion::new(ct * cs, st * cd, st * sd, ct * ss)
}

/// `qz(phi) qy(theta) qz(psi)`.
pub fn euler_zyz_to_quaternion(e: EulerAngles) -> Quat {
    let (st, ct) = (0.5 * e.theta).sin_cos();
    let (ss, cs) = (0.5 * (e.phi + e.psi)).sin_cos();
    let (sd, cd) = (0.5 * (e.phi - e.psi)).sin_cos();
    Quaternion::new(ct * cs, -st * sd, st * cd, ct * ss)
}

pub fn euler_to_quaternion(e: EulerAngles, convention: EulerConvention) -> Quat {
    match convention {
        EulerConvention::Zxz => euler_zxz_to_quaternion(e),
        EulerConvention::Zyz => euler_zyz_to_quaternion(e),
    }
}

pub fn quaternion_to_euler_zxz(q: &Quat) -> EulerAngles {
    let q = unit(q);
    let cos_half = q.w.hypot(q.k);
    let sin_half = q.i.hypot(q.j);
    let sum = q.k.atan2(q.w);
    let diff = q.j.atan2(q.i);
    if sin_half < GIMBAL_EPS {
        return EulerAngles::new(wrap(2.0 * sum), 0.0, 0.0);
    }
    if cos_half < GIMBAL_EPS {
        return EulerAngles::new(wrap(2.0 * diff), PI, 0.0);
    }
    EulerAngles::new(
        wrap(sum + diff),
        2.0 * sin_half.atan2(cos_half),
        wrap(sum - diff),
    )
}

pub fn quaternion_to_euler_zyz(q: &Quat) -> EulerAngles {
    let q = unit(q);
    let cos_half = q.w.hypot(q.k);
    let sin_half = q.i.hypot(q.j);
    let sum = q.k.atan2(q.w);
    let diff = (-q.i).atan2(q.j);
    if sin_half < GIMBAL_EPS {
        return EulerAngles::new(wrap(2.0 * sum - FRAC_PI_2), 0.0, FRAC_PI_2);
    }
    if cos_half < GIMBAL_EPS {
        return EulerAngles::new(wrap(2.0 * diff + FRAC_PI_2), PI, FRAC_PI_2);
    }
    EulerAngles::new(
        wrap(sum + diff),
        2.0 * sin_half.atan2(cos_half),
        wrap(sum - diff),
    )
}

pub fn quaternion_to_euler(q: &Quat, convention: EulerConvention) -> EulerAngles {
    match convention {
        EulerConvention::Zxz => quaternion_to_euler_zxz(q),
        EulerConvention::Zyz => quaternion_to_euler_zyz(q),
    }
}
