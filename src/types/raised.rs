//! What an absorbed operation raised, as seen by a converter.

use core::fmt::{self, Debug, Display};

#[cfg(feature = "std")]
use std::{any::Any, boxed::Box, string::String};

/// Descriptive text of [`Raised::NullResult`].
pub const NULL_RESULT_MESSAGE: &str = "a null return value was absorbed";

/// The outcome of an absorbed operation that did not produce a usable value.
///
/// A [`Converter`](crate::convert::Converter) receives exactly one of these
/// whenever absorption does not end in success, and must handle every variant,
/// including [`Raised::NullResult`].
///
/// # Examples
///
/// ```
/// use failable::{Failable, Raised};
///
/// let outcome: Failable<u8, Raised<&str>> = Failable::absorb(|| Err("bang"));
/// assert_eq!(outcome.into_failure().into_error(), Some("bang"));
///
/// let empty: Failable<u8, Raised<&str>> = Failable::absorb(|| Ok(None));
/// assert!(empty.get_failure().is_null_result());
/// ```
///
/// Non-exhaustive because `Panic` only exists with the `std` feature; match
/// with a wildcard arm.
#[non_exhaustive]
pub enum Raised<E> {
    /// The operation returned `Err`.
    Error(E),
    /// The operation panicked and the capture policy admitted panics.
    #[cfg(feature = "std")]
    Panic(PanicPayload),
    /// The value-producing operation completed without raising but returned
    /// no value.
    NullResult,
}

impl<E> Raised<E> {
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    #[inline]
    pub fn is_panic(&self) -> bool {
        #[cfg(feature = "std")]
        {
            matches!(self, Self::Panic(_))
        }
        #[cfg(not(feature = "std"))]
        {
            false
        }
    }

    #[must_use]
    #[inline]
    pub fn is_null_result(&self) -> bool {
        matches!(self, Self::NullResult)
    }

    /// Returns the raised error, if the operation returned `Err`.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes `self`, returning the raised error if there was one.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the caught panic, if the operation panicked.
    #[cfg(feature = "std")]
    #[must_use]
    #[inline]
    pub fn panic(&self) -> Option<&PanicPayload> {
        match self {
            Self::Panic(payload) => Some(payload),
            _ => None,
        }
    }

    /// Maps the raised error, leaving panics and the null result untouched.
    #[inline]
    pub fn map_error<G, M>(self, f: M) -> Raised<G>
    where
        M: FnOnce(E) -> G,
    {
        match self {
            Self::Error(error) => Raised::Error(f(error)),
            #[cfg(feature = "std")]
            Self::Panic(payload) => Raised::Panic(payload),
            Self::NullResult => Raised::NullResult,
        }
    }
}

impl<E: Debug> Debug for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            #[cfg(feature = "std")]
            Self::Panic(payload) => f.debug_tuple("Panic").field(payload).finish(),
            Self::NullResult => f.write_str("NullResult"),
        }
    }
}

impl<E: Display> Display for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => Display::fmt(error, f),
            #[cfg(feature = "std")]
            Self::Panic(payload) => f.write_str(payload.message()),
            Self::NullResult => f.write_str(NULL_RESULT_MESSAGE),
        }
    }
}

impl<E> core::error::Error for Raised<E>
where
    E: core::error::Error,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Error(error) => error.source(),
            _ => None,
        }
    }
}

/// A panic caught during absorption.
///
/// Keeps the original payload so the panic can be resumed, along with the
/// message extracted from `&'static str` and `String` payloads.
#[cfg(feature = "std")]
pub struct PanicPayload {
    message: String,
    payload: Box<dyn Any + Send + 'static>,
}

#[cfg(feature = "std")]
impl PanicPayload {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            String::from(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::from("Box<dyn Any>")
        };
        Self { message, payload }
    }

    /// The panic message, or `"Box<dyn Any>"` for non-string payloads.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    #[must_use]
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the panic on the current thread.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

#[cfg(feature = "std")]
impl Debug for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicPayload").field("message", &self.message).finish_non_exhaustive()
    }
}

#[cfg(feature = "std")]
impl Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
