// benches/profile_bench.rs
use criterion::{criterion_group, criterion_main, Criterion};
use otg_core::solve;

fn rest_to_rest(c: &mut Criterion) {
    c.bench_function("rest_to_rest", |b| {
        b.iter(|| solve(0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0))
    });
}

fn short_pure_jerk(c: &mut Criterion) {
    c.bench_function("short_pure_jerk", |b| {
        b.iter(|| solve(0.0, 0.0, 0.0, 0.001, 0.0, 1.0, 1.0, 1.0))
    });
}

fn over_bound_initial_velocity(c: &mut Criterion) {
    c.bench_function("over_bound_initial_velocity", |b| {
        b.iter(|| solve(0.0, 2.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0))
    });
}

fn nonzero_initial_acceleration(c: &mut Criterion) {
    c.bench_function("nonzero_initial_acceleration", |b| {
        b.iter(|| solve(0.0, 0.0, 0.5, 1.0, 0.0, 1.0, 1.0, 1.0))
    });
}

criterion_group!(
    benches,
    rest_to_rest,
    short_pure_jerk,
    over_bound_initial_velocity,
    nonzero_initial_acceleration
);
criterion_main!(benches);
