use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, Criterion};
use failable::{Failable, SimpleFailable};
use std::hint::black_box;

pub fn bench_construction(c: &mut Criterion) {
    c.bench_function("core/success", |b| {
        b.iter(|| black_box(Failable::<u64, DomainError>::success(black_box(42))))
    });

    c.bench_function("core/failure", |b| {
        b.iter(|| {
            black_box(Failable::<u64, DomainError>::failure(DomainError::Database(
                "Connection pool exhausted".to_string(),
            )))
        })
    });
}

pub fn bench_mapping(c: &mut Criterion) {
    c.bench_function("core/map_success", |b| {
        b.iter(|| black_box(Failable::<u64, &str>::success(black_box(21)).map_success(|x| x * 2)))
    });

    c.bench_function("core/map_failure_skipped", |b| {
        b.iter(|| black_box(Failable::<u64, &str>::success(black_box(21)).map_failure(str::len)))
    });

    c.bench_function("core/map_failure_checked", |b| {
        b.iter(|| {
            black_box(Failable::<u64, &str>::failure(black_box("bad")).map_failure_checked(|f| f.chars().next()))
        })
    });
}

pub fn bench_conversions(c: &mut Criterion) {
    c.bench_function("core/into_simple_failable", |b| {
        b.iter(|| black_box(Failable::<u64, u16>::failure(black_box(503)).into_simple_failable()))
    });

    c.bench_function("core/simple_from_result", |b| {
        b.iter(|| black_box(SimpleFailable::from(black_box(Err::<(), u16>(404)))))
    });
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets = bench_construction, bench_mapping, bench_conversions,
}
