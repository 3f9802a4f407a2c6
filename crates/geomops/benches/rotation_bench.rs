//! Criterion benchmarks for orientation conversions.
//!
//! - frame -> Euler (ZXZ, ZYZ), Euler -> quaternion, quaternion -> frame.
//! - quaternion vector rotation vs Rodrigues about an axis.
//!
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geomops::rotation::{
    euler_to_quaternion, frame_to_euler, quaternion_to_axis_angle, quaternion_to_frame,
    rotate_vector_about_axis, rotate_vector_by_quaternion, AngleUnit, EulerConvention, Frame,
};
use geomops::sample::{random_frame, random_unit_quaternion};
use nalgebra::Vector3;
use rand::{rngs::StdRng, SeedableRng};

fn frames(n: usize, seed: u64) -> Vec<Frame> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| random_frame(&mut rng)).collect()
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler");
    for conv in [EulerConvention::Zxz, EulerConvention::Zyz] {
        let label = format!("{conv:?}");
        group.bench_with_input(
            BenchmarkId::new("frame_euler_frame", &label),
            &conv,
            |b, &conv| {
                b.iter_batched(
                    || frames(64, 42),
                    |fs| {
                        for f in &fs {
                            let q = euler_to_quaternion(frame_to_euler(f, conv), conv);
                            let _ = quaternion_to_frame(&q);
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();

    let mut group = c.benchmark_group("quat");
    let mut rng = StdRng::seed_from_u64(7);
    let qs: Vec<_> = (0..64).map(|_| random_unit_quaternion(&mut rng)).collect();
    let v = Vector3::new(0.3, -1.2, 0.8);
    group.bench_function("rotate_vector_by_quaternion", |b| {
        b.iter(|| {
            qs.iter()
                .map(|q| rotate_vector_by_quaternion(v, q))
                .fold(Vector3::zeros(), |acc, r| acc + r)
        })
    });
    group.bench_function("rotate_vector_about_axis", |b| {
        b.iter(|| {
            qs.iter()
                .map(|q| rotate_vector_about_axis(v, q.w, q.imag(), AngleUnit::Radians))
                .fold(Vector3::zeros(), |acc, r| acc + r)
        })
    });
    group.bench_function("quaternion_to_axis_angle", |b| {
        b.iter(|| qs.iter().map(|q| quaternion_to_axis_angle(q).angle).sum::<f64>())
    });
    group.finish();
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
