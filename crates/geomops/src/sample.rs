//! Seeded random inputs for tests, benches and demos.
//!
//! - `random_unit_quaternion`: uniform over SO(3) (Shoemake's subgroup algorithm).
//! - `random_frame`: the frame of a uniform rotation.
//! - `random_star_polygon`: counter-clockwise ring star-shaped around the origin.
//!
//! Every generator takes the RNG from the caller so a seed fully replays a sample.

use std::f64::consts::TAU;

use nalgebra::{Quaternion, Vector2};
use rand::Rng;

use crate::error::GeometryError;
use crate::polygon::Polygon;
use crate::rotation::{quaternion_to_frame, Frame, Quat};

pub fn random_unit_quaternion<R: Rng + ?Sized>(rng: &mut R) -> Quat {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    let u3: f64 = rng.gen();
    let a = (1.0 - u1).sqrt();
    let b = u1.sqrt();
    Quaternion::new(
        b * (TAU * u3).cos(),
        a * (TAU * u2).sin(),
        a * (TAU * u2).cos(),
        b * (TAU * u3).sin(),
    )
}

pub fn random_frame<R: Rng + ?Sized>(rng: &mut R) -> Frame {
    quaternion_to_frame(&random_unit_quaternion(rng))
}

/// `vertices` points at jittered, increasing polar angles with radii drawn from
/// `[r_min, r_max]`.
pub fn random_star_polygon<R: Rng + ?Sized>(
    rng: &mut R,
    vertices: usize,
    r_min: f64,
    r_max: f64,
) -> Result<Polygon, GeometryError> {
    if vertices < 3 {
        return Err(GeometryError::shape(format!(
            "a star polygon needs at least 3 vertices (got {vertices})"
        )));
    }
    if !(r_min.is_finite() && r_max.is_finite() && 0.0 < r_min && r_min <= r_max) {
        return Err(GeometryError::argument(format!(
            "radii must satisfy 0 < r_min <= r_max (got {r_min}, {r_max})"
        )));
    }
    let step = TAU / vertices as f64;
    let pts = (0..vertices)
        .map(|i| {
            let theta = step * (i as f64 + rng.gen_range(0.1..0.9));
            let r = if r_min < r_max {
                rng.gen_range(r_min..=r_max)
            } else {
                r_min
            };
            Vector2::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    Polygon::from_points(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{point_in_polygon, Containment, Winding};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn quaternions_are_unit_and_replayable() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = random_unit_quaternion(&mut rng);
        assert!((q.norm() - 1.0).abs() < 1e-12);
        let mut again = StdRng::seed_from_u64(7);
        assert_eq!(q, random_unit_quaternion(&mut again));
    }

    #[test]
    fn frames_are_orthonormal() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..32 {
            assert!(random_frame(&mut rng).is_orthonormal(1e-12));
        }
    }

    #[test]
    fn star_polygon_contains_origin_and_winds_ccw() {
        let mut rng = StdRng::seed_from_u64(3);
        let poly = random_star_polygon(&mut rng, 9, 0.5, 2.0).unwrap();
        assert_eq!(poly.len(), 9);
        assert_eq!(poly.winding(), Winding::CounterClockwise);
        assert_eq!(
            point_in_polygon(Vector2::zeros(), &poly),
            Containment::Inside
        );
        assert!(random_star_polygon(&mut rng, 2, 0.5, 2.0).is_err());
        assert!(random_star_polygon(&mut rng, 5, 2.0, 0.5).is_err());
    }
}
