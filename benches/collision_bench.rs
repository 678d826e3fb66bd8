use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planet_merge::{
    bodies::{Body, RankId},
    core::{ArenaConfig, GameMode, GameWorld, SimulationConfig},
    math::Vector2,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A world holding `count` free bodies of mixed ranks scattered in the container
fn crowded_world(count: usize) -> GameWorld {
    let mut world = GameWorld::with_seed(SimulationConfig::default(), ArenaConfig::default(), GameMode::Ascending, 1)
        .expect("default configuration is valid");
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..count {
        let rank = RankId::new(rng.gen_range(0..6)).unwrap_or(RankId::PLUTO);
        let position = Vector2::new(rng.gen_range(220.0..580.0), rng.gen_range(200.0..780.0));
        let body = Body::new(rank, position, world.rank_table());
        world.add_body(body);
    }

    world
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for count in [10, 30, 50] {
        group.bench_function(format!("{}_bodies", count), |b| {
            b.iter_batched(
                || crowded_world(count),
                |mut world| {
                    world.update();
                    black_box(world.scene().body_count())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
