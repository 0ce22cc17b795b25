//! Absorption: running a fallible operation and normalizing its outcome.
//!
//! An absorbed operation runs exactly once, on the calling thread. Whatever
//! happens is classified and turned into a value:
//!
//! | Operation outcome        | Value form                       | Unit form                      |
//! |--------------------------|----------------------------------|--------------------------------|
//! | `Ok(Some(v))` / `Ok(())` | `Failable::Success(v)`           | `SimpleFailable::Success`      |
//! | `Err(e)`                 | `Failure(converter(Error(e)))`   | `Failure(converter(Error(e)))` |
//! | panic, when admitted     | `Failure(converter(Panic(p)))`   | `Failure(converter(Panic(p)))` |
//! | `Ok(None)`               | `Failure(converter(NullResult))` | n/a                            |
//!
//! The same converter handles every cause, so a single function decides how
//! "did not produce a usable value" is represented.
//!
//! # Panic hook
//!
//! Catching a panic does not bypass the process panic hook, which runs before
//! unwinding starts. With the standard hook every absorbed panic is still
//! reported on stderr. Callers that want absorbed panics to stay silent
//! install their own hook with [`std::panic::set_hook`], or absorb under
//! [`CapturePolicy::Errors`] and keep panics out of the absorbed path.
//!
//! ```
//! use failable::{convert, Failable};
//!
//! std::panic::set_hook(Box::new(|_| {}));
//! let outcome: Failable<u8, String> = Failable::absorb_with(
//!     || -> Result<Option<u8>, String> { panic!("coop door jammed") },
//!     convert::message,
//! );
//! let _ = std::panic::take_hook();
//!
//! assert_eq!(outcome.into_failure(), "coop door jammed");
//! ```
//!
//! # Examples
//!
//! ```
//! use failable::absorb::{absorb_value, CapturePolicy};
//! use failable::{convert, Failable};
//!
//! let outcome: Failable<u32, String> = absorb_value(
//!     CapturePolicy::Errors,
//!     || "12".parse::<u32>().map(Some),
//!     convert::message,
//! );
//! assert_eq!(outcome, Failable::success(12));
//! ```

use crate::types::{Failable, Raised, SimpleFailable};

/// Which raise categories absorption catches.
///
/// Non-exhaustive because `ErrorsAndPanics` only exists with the `std` feature.
///
/// # Examples
///
/// ```
/// use failable::absorb::CapturePolicy;
///
/// assert_eq!(CapturePolicy::default(), CapturePolicy::ErrorsAndPanics);
/// assert!(!CapturePolicy::Errors.captures_panics());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CapturePolicy {
    /// Only errors returned through `Err`. Panics unwind through the
    /// absorption call.
    Errors,
    /// Returned errors and unwinding panics.
    ///
    /// Panics cannot be caught when the binary is built with `panic = "abort"`.
    /// The panic hook still runs for every caught panic; see the
    /// [module docs](crate::absorb#panic-hook).
    #[cfg(feature = "std")]
    ErrorsAndPanics,
}

impl CapturePolicy {
    #[must_use]
    #[inline]
    pub fn captures_panics(self) -> bool {
        match self {
            Self::Errors => false,
            #[cfg(feature = "std")]
            Self::ErrorsAndPanics => true,
        }
    }
}

impl Default for CapturePolicy {
    /// The broadest policy available: `ErrorsAndPanics` with `std`, `Errors`
    /// otherwise.
    #[inline]
    fn default() -> Self {
        #[cfg(feature = "std")]
        {
            Self::ErrorsAndPanics
        }
        #[cfg(not(feature = "std"))]
        {
            Self::Errors
        }
    }
}

/// Runs a value-producing operation and converts its outcome.
///
/// `Ok(Some(v))` is the only success. `Err`, an admitted panic, and `Ok(None)`
/// are all handed to `converter`.
///
/// A panic raised by `converter` itself is not captured.
pub fn absorb_value<S, E, F, A, C>(policy: CapturePolicy, action: A, converter: C) -> Failable<S, F>
where
    A: FnOnce() -> Result<Option<S>, E>,
    C: Fn(Raised<E>) -> F,
{
    match run(policy, action) {
        Ok(Some(value)) => Failable::success(value),
        Ok(None) => Failable::failure(converter(Raised::NullResult)),
        Err(raised) => Failable::failure(converter(raised)),
    }
}

/// Runs an operation that produces nothing and converts a raised outcome.
pub fn absorb_action<E, F, A, C>(policy: CapturePolicy, action: A, converter: C) -> SimpleFailable<F>
where
    A: FnOnce() -> Result<(), E>,
    C: Fn(Raised<E>) -> F,
{
    match run(policy, action) {
        Ok(()) => SimpleFailable::success(),
        Err(raised) => SimpleFailable::failure(converter(raised)),
    }
}

fn run<T, E, A>(policy: CapturePolicy, action: A) -> Result<T, Raised<E>>
where
    A: FnOnce() -> Result<T, E>,
{
    match policy {
        CapturePolicy::Errors => action().map_err(Raised::Error),
        #[cfg(feature = "std")]
        CapturePolicy::ErrorsAndPanics => {
            // State the action mutated before panicking may be left half updated.
            match std::panic::catch_unwind(std::panic::AssertUnwindSafe(action)) {
                Ok(result) => result.map_err(Raised::Error),
                Err(payload) => Err(Raised::Panic(crate::types::PanicPayload::new(payload))),
            }
        },
    }
}
