use crate::absorb::{absorb_action, CapturePolicy};
use crate::convert::identity;
use crate::types::defect::{require, state_defect, ConstructionError, StateError};
use crate::types::{Failable, Raised};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a fallible operation that produces nothing on success.
///
/// # Examples
///
/// ```
/// use failable::SimpleFailable;
///
/// let done: SimpleFailable<&str> = SimpleFailable::success();
/// assert!(done.is_success());
///
/// let refused: SimpleFailable<&str> = SimpleFailable::failure("coop is locked");
/// assert_eq!(*refused.get_failure(), "coop is locked");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Default)]
pub enum SimpleFailable<F> {
    #[default]
    Success,
    Failure(F),
}

impl<F> SimpleFailable<F> {
    #[inline]
    pub fn success() -> Self {
        Self::Success
    }

    #[inline]
    pub fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    /// Creates a failure from a payload that must be present.
    ///
    /// # Panics
    ///
    /// Panics with [`ConstructionError::MissingFailure`] if `value` is `None`.
    #[inline]
    #[track_caller]
    pub fn failure_checked(value: Option<F>) -> Self {
        Self::Failure(require(value, ConstructionError::MissingFailure))
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with [`StateError::NotFailure`] if this is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_failure(&self) -> &F {
        match self {
            Self::Failure(value) => value,
            Self::Success => state_defect(StateError::NotFailure),
        }
    }

    /// Consumes `self`, returning the failure value.
    ///
    /// # Panics
    ///
    /// Panics with [`StateError::NotFailure`] if this is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_failure(self) -> F {
        match self {
            Self::Failure(value) => value,
            Self::Success => state_defect(StateError::NotFailure),
        }
    }

    /// Returns the failure value, or `None` on success.
    #[must_use]
    #[inline]
    pub fn as_failure(&self) -> Option<&F> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success => None,
        }
    }

    /// Maps the failure value. `f` is not invoked on a success.
    #[inline]
    pub fn map_failure<G, M>(self, f: M) -> SimpleFailable<G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success => SimpleFailable::Success,
            Self::Failure(failure) => SimpleFailable::Failure(f(failure)),
        }
    }

    /// Maps the failure value through a mapper whose result must be present.
    ///
    /// # Panics
    ///
    /// Panics with [`ConstructionError::MissingFailure`] if `f` returns `None`.
    #[inline]
    #[track_caller]
    pub fn map_failure_checked<G, M>(self, f: M) -> SimpleFailable<G>
    where
        M: FnOnce(F) -> Option<G>,
    {
        match self {
            Self::Success => SimpleFailable::Success,
            Self::Failure(failure) => SimpleFailable::failure_checked(f(failure)),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<(), F> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Runs `action`, converting a raised error or caught panic with
    /// `converter`.
    ///
    /// There is no missing-value case: an action returning `Ok(())` always
    /// succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::{convert, SimpleFailable};
    ///
    /// let written = SimpleFailable::absorb_with(
    ///     || std::fs::write("/nonexistent-dir/chickens.txt", b"three hens"),
    ///     convert::message,
    /// );
    /// assert!(written.is_failure());
    /// ```
    #[inline]
    pub fn absorb_with<E, A, C>(action: A, converter: C) -> Self
    where
        A: FnOnce() -> Result<(), E>,
        C: Fn(Raised<E>) -> F,
    {
        absorb_action(CapturePolicy::default(), action, converter)
    }

    /// Runs `action` under an explicit capture policy.
    #[inline]
    pub fn absorb_with_policy<E, A, C>(policy: CapturePolicy, action: A, converter: C) -> Self
    where
        A: FnOnce() -> Result<(), E>,
        C: Fn(Raised<E>) -> F,
    {
        absorb_action(policy, action, converter)
    }
}

impl<E> SimpleFailable<Raised<E>> {
    /// Runs `action`, keeping whatever it raised as the failure value.
    #[inline]
    pub fn absorb<A>(action: A) -> Self
    where
        A: FnOnce() -> Result<(), E>,
    {
        absorb_action(CapturePolicy::default(), action, identity)
    }
}

impl<F> From<Result<(), F>> for SimpleFailable<F> {
    #[inline]
    fn from(result: Result<(), F>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<F> From<SimpleFailable<F>> for Result<(), F> {
    #[inline]
    fn from(simple: SimpleFailable<F>) -> Self {
        simple.into_result()
    }
}

impl<S, F> From<Failable<S, F>> for SimpleFailable<F> {
    #[inline]
    fn from(failable: Failable<S, F>) -> Self {
        failable.into_simple_failable()
    }
}
