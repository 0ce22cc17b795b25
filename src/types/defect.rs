//! Programming defects raised by misuse of [`Failable`](crate::Failable) and
//! [`SimpleFailable`](crate::SimpleFailable).
//!
//! Defects are never returned as data. They abort the current operation with a
//! panic at the offending call site, carrying the display text of the defect.

use core::fmt::{self, Display};

/// An accessor was called on the arm that is not populated.
///
/// # Examples
///
/// ```should_panic
/// use failable::Failable;
///
/// let value: Failable<i32, &str> = Failable::failure("boom");
/// value.get_success(); // panics: "failable did not succeed"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateError {
    /// A success accessor was called on a failure.
    NotSuccess,
    /// A failure accessor was called on a success.
    NotFailure,
}

impl Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSuccess => f.write_str("failable did not succeed"),
            Self::NotFailure => f.write_str("failable did not fail"),
        }
    }
}

impl core::error::Error for StateError {}

/// A success or failure was constructed from an absent payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructionError {
    /// A success was built from, or mapped to, an absent value.
    MissingSuccess,
    /// A failure was built from, or mapped to, an absent value.
    MissingFailure,
}

impl Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSuccess => f.write_str("success payload is absent"),
            Self::MissingFailure => f.write_str("failure payload is absent"),
        }
    }
}

impl core::error::Error for ConstructionError {}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn state_defect(error: StateError) -> ! {
    panic!("{}", error)
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn construction_defect(error: ConstructionError) -> ! {
    panic!("{}", error)
}

/// Unwraps a payload that must be present, panicking with `error` otherwise.
#[inline]
#[track_caller]
pub(crate) fn require<T>(value: Option<T>, error: ConstructionError) -> T {
    match value {
        Some(value) => value,
        None => construction_defect(error),
    }
}
