use crate::common::{configure_criterion, simulate_db_query, simulate_write, validate_user_age};
use criterion::{criterion_group, BenchmarkId, Criterion};
use failable::absorb::{absorb_value, CapturePolicy};
use failable::{convert, Failable, SimpleFailable};
use std::hint::black_box;

pub fn bench_absorb_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("absorb/value");

    for user_id in [42u64, 100, 101] {
        group.bench_with_input(BenchmarkId::from_parameter(user_id), &user_id, |b, &id| {
            b.iter(|| black_box(Failable::absorb_with(|| simulate_db_query(black_box(id)), convert::message)))
        });
    }
    group.finish();
}

pub fn bench_capture_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("absorb/policy");

    group.bench_function("errors", |b| {
        b.iter(|| black_box(absorb_value(CapturePolicy::Errors, || validate_user_age(black_box(30)), convert::identity)))
    });

    group.bench_function("errors_and_panics", |b| {
        b.iter(|| {
            black_box(absorb_value(
                CapturePolicy::ErrorsAndPanics,
                || validate_user_age(black_box(30)),
                convert::identity,
            ))
        })
    });
    group.finish();
}

pub fn bench_absorb_action(c: &mut Criterion) {
    c.bench_function("absorb/action_batch", |b| {
        b.iter(|| {
            let failures = (0..100u64)
                .map(|id| SimpleFailable::absorb_with(|| simulate_write(id), convert::message))
                .filter(SimpleFailable::is_failure)
                .count();
            black_box(failures)
        })
    });
}

criterion_group! {
    name = absorb_benches;
    config = configure_criterion();
    targets = bench_absorb_paths, bench_capture_policy, bench_absorb_action,
}
