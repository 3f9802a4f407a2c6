//! Criterion benchmarks for polygon queries.
//! Focus sizes: n in {8, 32, 128} vertices of a random star polygon.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geomops::cfg::RectSearchCfg;
use geomops::polygon::{find_largest_inscribed_rectangle_with, point_in_polygon, Polygon};
use geomops::sample::random_star_polygon;
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn star(n: usize, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    random_star_polygon(&mut rng, n, 0.5, 1.5).unwrap()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("point_in_polygon", n), &n, |b, &n| {
            let poly = star(n, 43);
            let mut rng = StdRng::seed_from_u64(1);
            let pts: Vec<Vector2<f64>> = (0..256)
                .map(|_| Vector2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)))
                .collect();
            b.iter(|| {
                pts.iter()
                    .filter(|&&p| point_in_polygon(p, &poly).is_in())
                    .count()
            })
        });

        group.bench_with_input(
            BenchmarkId::new("largest_inscribed_rectangle", n),
            &n,
            |b, &n| {
                let cfg = RectSearchCfg {
                    angle_divisions: 4,
                    grid_divisions: 16,
                };
                b.iter_batched(
                    || star(n, 44),
                    |poly| {
                        let _res = find_largest_inscribed_rectangle_with(&poly, &cfg);
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
