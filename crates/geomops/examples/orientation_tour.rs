//! Walk one orientation through every representation.
//!
//! Usage:
//!   cargo run -p geomops --example orientation_tour
//!   cargo run -p geomops --example orientation_tour -- 2025
//!
//! Draws a random frame (seeded), prints its ZXZ and ZYZ angles in degrees,
//! the quaternion and the axis-angle, then reports the round-trip error.

use geomops::rotation::{
    euler_to_quaternion, frame_to_euler, frame_to_quaternion, quat_to_wxyz,
    quaternion_to_axis_angle, quaternion_to_frame, EulerConvention,
};
use geomops::sample::random_frame;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7u64);
    let mut rng = StdRng::seed_from_u64(seed);
    let frame = random_frame(&mut rng);
    println!("seed {seed}");
    println!("x = {:?}", frame.x.as_slice());
    println!("y = {:?}", frame.y.as_slice());
    println!("z = {:?}", frame.z.as_slice());

    for conv in [EulerConvention::Zxz, EulerConvention::Zyz] {
        let e = frame_to_euler(&frame, conv);
        let back = quaternion_to_frame(&euler_to_quaternion(e, conv));
        let err = (back.to_matrix() - frame.to_matrix()).amax();
        println!("{conv:?} (deg) = {:?}  round-trip err = {err:.2e}", e.to_degrees());
    }

    let q = frame_to_quaternion(&frame);
    let aa = quaternion_to_axis_angle(&q);
    println!("q (wxyz) = {:?}", quat_to_wxyz(&q));
    println!(
        "axis = {:?}  angle = {:.4} deg",
        aa.axis.as_slice(),
        aa.angle.to_degrees()
    );
}
