//! Criterion benchmarks for the two ACS colonies.
//!
//! Uses points on a circle so every instance has a known optimum and
//! the comparison measures scheduling overhead rather than luck.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_acs::acs::{AcsConfig, ConcurrentSolver, Environment, SequentialSolver, Solver};

fn ring(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|k| {
            let a = k as f64 * std::f64::consts::TAU / n as f64;
            (100.0 * a.cos(), 100.0 * a.sin())
        })
        .collect()
}

fn bench_colony<S: Solver>(c: &mut Criterion, group_name: &str, solver: S) {
    let mut group = c.benchmark_group(group_name);
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let config = AcsConfig::default()
            .with_ant_count(16)
            .with_iterations(20)
            .with_seed(42);
        let env = match Environment::load(&ring(n), config) {
            Ok(env) => env,
            Err(e) => panic!("bench instance: {e}"),
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &env, |b, env| {
            b.iter(|| {
                let mut env = env.clone();
                env.initialize();
                let result = solver.solve(black_box(&mut env));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sequential(c: &mut Criterion) {
    bench_colony(c, "acs_sequential", SequentialSolver);
}

fn bench_concurrent(c: &mut Criterion) {
    bench_colony(c, "acs_concurrent", ConcurrentSolver);
}

criterion_group!(benches, bench_sequential, bench_concurrent);
criterion_main!(benches);
