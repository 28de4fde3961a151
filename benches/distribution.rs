use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dice_prob::{dist, Config, Distribution, Limits, RollContext};
use rand::{rngs::StdRng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("uniform_sum 10d6", |b| {
        b.iter(|| dist::uniform_sum(black_box(10), black_box(6)))
    });

    c.bench_function("uniform_sum 100d20", |b| {
        b.iter(|| dist::uniform_sum(black_box(100), black_box(20)))
    });

    let table = dist::uniform_sum(100, 20).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("sample 100d20", |b| {
        b.iter(|| dist::sample(black_box(&table), &mut rng))
    });

    let mut ctx = RollContext::new(Limits::default(), StdRng::seed_from_u64(7));
    c.bench_function("times 1d20 * 2d10", |b| {
        b.iter(|| {
            let lhs = Distribution::new(20, 1.0, 0.0);
            let rhs = dist::uniform_sum(2, 10).unwrap();
            ctx.times(lhs, rhs)
        })
    });

    let mut ctx = Config {
        seed: Some(7),
        ..Config::default()
    }
    .context();
    c.bench_function("roll expression", |b| {
        b.iter(|| dice_prob::roll_with(black_box("avg(3d6) + prob(7, 2d6) * roll(4d8)"), &mut ctx))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
