//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use failable::prelude::*;
//!
//! let outcome: Failable<u8, String> = Failable::absorb_with(|| "8".parse().map(Some), convert::message);
//! assert!(outcome.is_success());
//! ```

// Core types
pub use crate::types::{Failable, Raised, SimpleFailable};

// Absorption
pub use crate::absorb::CapturePolicy;
pub use crate::convert;

// Traits
pub use crate::convert::Converter;
#[cfg(feature = "tracing")]
pub use crate::tracing_ext::FailureTraceExt;
