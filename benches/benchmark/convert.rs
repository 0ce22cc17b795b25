use crate::common::{configure_criterion, DomainError, LayeredError};
use criterion::{criterion_group, Criterion};
use failable::convert::{self, DiagnosticFormat};
use failable::Raised;
use std::hint::black_box;

pub fn bench_message(c: &mut Criterion) {
    c.bench_function("convert/message", |b| {
        b.iter(|| black_box(convert::message(Raised::Error(DomainError::Network("timeout".to_string())))))
    });

    c.bench_function("convert/message_null_result", |b| {
        b.iter(|| black_box(convert::message(Raised::<DomainError>::NullResult)))
    });
}

pub fn bench_diagnostic(c: &mut Criterion) {
    let format = DiagnosticFormat::without_backtrace();

    c.bench_function("convert/diagnostic_causes", |b| {
        b.iter(|| black_box(format.render(&Raised::Error(LayeredError::three_deep()))))
    });

    let forced = DiagnosticFormat::with_forced_backtrace();
    c.bench_function("convert/diagnostic_backtrace", |b| {
        b.iter(|| black_box(forced.render(&Raised::Error(LayeredError::three_deep()))))
    });
}

criterion_group! {
    name = convert_benches;
    config = configure_criterion();
    targets = bench_message, bench_diagnostic,
}
