//! Converters: turning whatever an absorbed operation raised into a failure
//! value.
//!
//! A converter is any `Fn(Raised<E>) -> F`, or any other [`Converter`]. It is
//! handed every non-success outcome of an absorption, including
//! [`Raised::NullResult`], and must return a value for each of them without
//! panicking. Absorption takes the closure form so its parameter types are
//! inferred; a [`DiagnosticFormat`] is passed as `format.converter()`.
//!
//! Stock converters:
//!
//! - [`identity`] keeps the [`Raised`] value as is
//! - [`message`] keeps only the descriptive text
//! - [`diagnostic`] / [`diagnostic_boxed`] render the text, the cause chain and
//!   a backtrace (see [`DiagnosticFormat`])
//!
//! # Examples
//!
//! ```
//! use failable::{convert, Failable};
//!
//! let failed: Failable<u8, String> =
//!     Failable::absorb_with(|| "300".parse::<u8>().map(Some), convert::message);
//! assert_eq!(failed.get_failure(), "number too large to fit in target type");
//!
//! #[derive(Debug, PartialEq)]
//! enum Lookup {
//!     Missing,
//!     Broken(String),
//! }
//!
//! let to_lookup = |raised: failable::Raised<&str>| {
//!     if raised.is_null_result() {
//!         Lookup::Missing
//!     } else {
//!         Lookup::Broken(raised.to_string())
//!     }
//! };
//!
//! let missing = Failable::<u8, _>::absorb_with(|| Ok(None), &to_lookup);
//! assert_eq!(missing.into_failure(), Lookup::Missing);
//!
//! let broken = Failable::<u8, _>::absorb_with(|| Err("disk on fire"), &to_lookup);
//! assert_eq!(broken.into_failure(), Lookup::Broken("disk on fire".into()));
//! ```

use crate::types::alloc_type::String;
use crate::types::{BoxedError, Raised};
use core::fmt::{Display, Write};

mod diagnostic;

pub use diagnostic::{BacktraceMode, DiagnosticFormat};

/// A pure, total function from a [`Raised`] outcome to a failure value.
///
/// Implemented for every `Fn(Raised<E>) -> F`, so closures and fn items are
/// converters as they are, and for [`DiagnosticFormat`]. Converters may be
/// invoked concurrently from independent absorptions and must not keep
/// mutable state.
///
/// # Examples
///
/// ```
/// use failable::convert::{self, Converter, DiagnosticFormat};
/// use failable::Raised;
///
/// fn describe<C: Converter<std::fmt::Error, String>>(converter: &C) -> String {
///     converter.convert(Raised::NullResult)
/// }
///
/// assert_eq!(describe(&convert::message::<std::fmt::Error>), failable::NULL_RESULT_MESSAGE);
/// assert_eq!(describe(&DiagnosticFormat::without_backtrace()), failable::NULL_RESULT_MESSAGE);
/// ```
pub trait Converter<E, F> {
    fn convert(&self, raised: Raised<E>) -> F;
}

impl<E, F, C> Converter<E, F> for C
where
    C: Fn(Raised<E>) -> F,
{
    #[inline]
    fn convert(&self, raised: Raised<E>) -> F {
        self(raised)
    }
}

/// Returns the raised outcome unchanged.
#[inline]
pub fn identity<E>(raised: Raised<E>) -> Raised<E> {
    raised
}

/// Projects the raised outcome onto its descriptive text.
///
/// Errors yield their `Display` output, panics their message, and the null
/// result [`NULL_RESULT_MESSAGE`](crate::NULL_RESULT_MESSAGE). Causes and
/// backtraces are not included.
#[inline]
pub fn message<E: Display>(raised: Raised<E>) -> String {
    let mut text = String::new();
    let _ = write!(text, "{}", raised);
    text
}

/// Renders the descriptive text, the cause chain and a backtrace using
/// [`DiagnosticFormat::default`].
#[inline]
pub fn diagnostic<E>(raised: Raised<E>) -> String
where
    E: core::error::Error + 'static,
{
    DiagnosticFormat::default().render(&raised)
}

/// [`diagnostic`] for type-erased [`BoxedError`]s.
#[inline]
pub fn diagnostic_boxed(raised: Raised<BoxedError>) -> String {
    DiagnosticFormat::default().render_boxed(&raised)
}
