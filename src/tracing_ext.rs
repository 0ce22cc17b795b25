//! Tracing integration for failable values.
//!
//! The core never logs. These extensions let a caller record a failure as a
//! `tracing` event at the point where it decides the failure is worth
//! reporting, and then keep using the value.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! failable = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::Span;

use crate::types::{Failable, SimpleFailable};

/// Records failures as `WARN` events and passes the value through unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use failable::tracing_ext::FailureTraceExt;
/// use failable::{convert, Failable};
///
/// let config = Failable::absorb_with(
///     || std::fs::read_to_string("config.toml").map(Some),
///     convert::message,
/// )
/// .trace_failure("load_config");
/// ```
pub trait FailureTraceExt: Sized {
    /// Emits a `WARN` event in the current span if `self` is a failure.
    fn trace_failure(self, operation: &str) -> Self {
        self.trace_failure_in(&Span::current(), operation)
    }

    /// Emits a `WARN` event inside `span` if `self` is a failure.
    fn trace_failure_in(self, span: &Span, operation: &str) -> Self;
}

impl<S, F: Display> FailureTraceExt for Failable<S, F> {
    fn trace_failure_in(self, span: &Span, operation: &str) -> Self {
        if let Self::Failure(failure) = &self {
            record(span, operation, failure);
        }
        self
    }
}

impl<F: Display> FailureTraceExt for SimpleFailable<F> {
    fn trace_failure_in(self, span: &Span, operation: &str) -> Self {
        if let Self::Failure(failure) = &self {
            record(span, operation, failure);
        }
        self
    }
}

fn record(span: &Span, operation: &str, failure: &dyn Display) {
    let span_name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    span.in_scope(|| {
        tracing::warn!(operation, span_name, failure = %failure, "operation failed");
    });
}
