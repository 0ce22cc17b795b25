use criterion::criterion_main;

mod absorb;
mod common;
mod convert;
mod core;

criterion_main!(core::core_benches, absorb::absorb_benches, convert::convert_benches);
