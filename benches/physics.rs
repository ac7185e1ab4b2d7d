//! Benchmarks for tidepool simulation steps.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use tidepool::*;

fn bench_kelp_simulation(c: &mut Criterion) {
    c.bench_function("kelp_20_points_60_steps", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        let pointer = Pointer::new(Vec2::new(5.0f32, -200.0), 60.0);
        b.iter(|| {
            let mut chain = VerletChain::new(
                Vec2::new(0.0, 0.0), 20, 25.0, 2, ChainConfig::default(), &mut rng,
            )
            .unwrap();
            for _ in 0..60 {
                chain.step(1.0 / 60.0, &pointer, &mut NoOpStepObserver);
            }
            chain.display_points()
        });
    });
}

fn bench_flock_simulation(c: &mut Criterion) {
    let bounds = Bounds::new(Vec2::new(0.0f64, 0.0), Vec2::new(1920.0, 1080.0), 75.0).unwrap();
    let pointer = Pointer::new(Vec2::new(960.0, 540.0), 100.0);

    for order in [UpdateOrder::Snapshot, UpdateOrder::Sequential] {
        let name = format!("flock_200_boids_60_steps_{order:?}").to_lowercase();
        c.bench_function(&name, |b| {
            b.iter(|| {
                let mut rng = SmallRng::seed_from_u64(2);
                let mut flock =
                    Flock::new(200, bounds, BoidConfig::default(), &mut rng).with_order(order);
                for _ in 0..60 {
                    flock.step(1.0 / 60.0, &pointer);
                }
                flock.len()
            });
        });
    }
}

criterion_group!(benches, bench_kelp_simulation, bench_flock_simulation);
criterion_main!(benches);
