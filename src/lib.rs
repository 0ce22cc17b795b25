//! Success/failure values for fallible operations, and absorption of an
//! operation's errors, panics and missing values into those values.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `failable::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Explicit Outcomes
//!
//! ```
//! use failable::Failable;
//!
//! fn status(code: u16) -> Failable<&'static str, u16> {
//!     if code == 200 {
//!         Failable::success("ok")
//!     } else {
//!         Failable::failure(code)
//!     }
//! }
//!
//! assert_eq!(*status(200).get_success(), "ok");
//! assert_eq!(*status(404).get_failure(), 404);
//! ```
//!
//! ## Absorbing an Operation
//!
//! ```
//! use failable::{convert, Failable, SimpleFailable};
//!
//! let count: Failable<u32, String> =
//!     Failable::absorb_with(|| "12".parse::<u32>().map(Some), convert::message);
//! assert_eq!(count.into_option(), Some(12));
//!
//! let panicked: SimpleFailable<String> =
//!     SimpleFailable::absorb_with(|| -> Result<(), std::fmt::Error> { panic!("bang") }, convert::message);
//! assert_eq!(panicked.get_failure(), "bang");
//! ```
//!
//! ## Missing Values
//!
//! ```
//! use failable::Failable;
//!
//! let nothing = Failable::<u32, _>::absorb_with(|| Ok::<_, std::io::Error>(None), |_| "no-value");
//! assert_eq!(nothing.into_failure(), "no-value");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Running fallible operations and normalizing their outcome
pub mod absorb;
/// Converters from raised outcomes to failure values
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Failable, SimpleFailable and the raised-outcome types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use absorb::{absorb_action, absorb_value, CapturePolicy};
pub use convert::Converter;
#[cfg(feature = "std")]
pub use types::PanicPayload;
pub use types::{
    BoxedError, ConstructionError, Failable, Raised, SimpleFailable, StateError,
    NULL_RESULT_MESSAGE,
};
