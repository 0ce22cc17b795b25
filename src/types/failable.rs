use crate::absorb::{absorb_value, CapturePolicy};
use crate::convert::identity;
use crate::types::defect::{require, state_defect, ConstructionError, StateError};
use crate::types::{Raised, SimpleFailable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a fallible operation: exactly one of a success or a failure.
///
/// `Failable<S, F>` plays the same role as [`Result`], with a stronger notion of
/// success and failure and the ability to [absorb](Failable::absorb) an
/// operation's errors, panics and missing values into a single failure type.
///
/// The failure type `F` may be an error, but any value works: an HTTP status,
/// a `String`, or a domain enum.
///
/// # Type Parameters
///
/// * `S` - The success value type
/// * `F` - The failure value type
///
/// # Examples
///
/// ```
/// use failable::Failable;
///
/// let ok: Failable<&str, u16> = Failable::success("ok");
/// assert!(ok.is_success());
/// assert_eq!(*ok.get_success(), "ok");
///
/// let not_found: Failable<&str, u16> = Failable::failure(404);
/// assert!(not_found.is_failure());
/// assert_eq!(*not_found.get_failure(), 404);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Failable<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> Failable<S, F> {
    /// Creates a success holding `value`.
    #[inline]
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failure holding `value`.
    #[inline]
    pub fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    /// Creates a success from a payload that must be present.
    ///
    /// # Panics
    ///
    /// Panics with [`ConstructionError::MissingSuccess`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::Failable;
    ///
    /// let value: Failable<&str, ()> = Failable::success_checked(Some("ok"));
    /// assert!(value.is_success());
    /// ```
    #[inline]
    #[track_caller]
    pub fn success_checked(value: Option<S>) -> Self {
        Self::Success(require(value, ConstructionError::MissingSuccess))
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
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`StateError::NotSuccess`] if this is a failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_success(&self) -> &S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => state_defect(StateError::NotSuccess),
        }
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
            Self::Success(_) => state_defect(StateError::NotFailure),
        }
    }

    /// Consumes `self`, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`StateError::NotSuccess`] if this is a failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_success(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => state_defect(StateError::NotSuccess),
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
            Self::Success(_) => state_defect(StateError::NotFailure),
        }
    }

    /// Converts from `&Failable<S, F>` to `Failable<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Failable<&S, &F> {
        match self {
            Self::Success(value) => Failable::Success(value),
            Self::Failure(value) => Failable::Failure(value),
        }
    }

    /// Returns the success value, or `None` on failure.
    #[must_use]
    #[inline]
    pub fn to_option(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes `self`, returning the success value or `None` on failure.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Like [`to_option`](Failable::to_option), but hands the failure to
    /// `on_failure` first.
    ///
    /// `on_failure` runs exactly once on a failure and never on a success.
    #[must_use]
    #[inline]
    pub fn to_option_with<H>(&self, on_failure: H) -> Option<&S>
    where
        H: FnOnce(&F),
    {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(failure) => {
                on_failure(failure);
                None
            },
        }
    }

    /// Like [`into_option`](Failable::into_option), but hands the failure to
    /// `on_failure` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::Failable;
    ///
    /// let mut seen = Vec::new();
    /// let value: Failable<i32, &str> = Failable::failure("timeout");
    /// assert_eq!(value.into_option_with(|f| seen.push(f)), None);
    /// assert_eq!(seen, ["timeout"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_option_with<H>(self, on_failure: H) -> Option<S>
    where
        H: FnOnce(F),
    {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(failure) => {
                on_failure(failure);
                None
            },
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// `f` is not invoked on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::Failable;
    ///
    /// let doubled = Failable::<i32, &str>::success(21).map_success(|x| x * 2);
    /// assert_eq!(doubled, Failable::success(42));
    /// ```
    #[inline]
    pub fn map_success<T, M>(self, f: M) -> Failable<T, F>
    where
        M: FnOnce(S) -> T,
    {
        match self {
            Self::Success(value) => Failable::Success(f(value)),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    /// Maps the success value through a mapper whose result must be present.
    ///
    /// # Panics
    ///
    /// Panics with [`ConstructionError::MissingSuccess`] if `f` returns `None`.
    #[inline]
    #[track_caller]
    pub fn map_success_checked<T, M>(self, f: M) -> Failable<T, F>
    where
        M: FnOnce(S) -> Option<T>,
    {
        match self {
            Self::Success(value) => Failable::success_checked(f(value)),
            Self::Failure(failure) => Failable::Failure(failure),
        }
    }

    /// Maps the failure value, leaving a success untouched.
    ///
    /// `f` is not invoked on a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::Failable;
    ///
    /// let failed: Failable<(), String> = Failable::failure("msg".to_string());
    /// let mapped = failed.map_failure(|m| m + " additional text");
    /// assert_eq!(mapped.get_failure(), "msg additional text");
    /// ```
    #[inline]
    pub fn map_failure<G, M>(self, f: M) -> Failable<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Failable::Success(value),
            Self::Failure(failure) => Failable::Failure(f(failure)),
        }
    }

    /// Maps the failure value through a mapper whose result must be present.
    ///
    /// On a success `f` is never called, so a mapper that would return `None`
    /// is harmless there.
    ///
    /// # Panics
    ///
    /// Panics with [`ConstructionError::MissingFailure`] if `f` returns `None`.
    #[inline]
    #[track_caller]
    pub fn map_failure_checked<G, M>(self, f: M) -> Failable<S, G>
    where
        M: FnOnce(F) -> Option<G>,
    {
        match self {
            Self::Success(value) => Failable::Success(value),
            Self::Failure(failure) => Failable::failure_checked(f(failure)),
        }
    }

    /// Discards the success value.
    #[inline]
    pub fn into_simple_failable(self) -> SimpleFailable<F> {
        match self {
            Self::Success(_) => SimpleFailable::success(),
            Self::Failure(failure) => SimpleFailable::failure(failure),
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Runs `action`, converting any raised error, caught panic or missing
    /// value with `converter`.
    ///
    /// Uses [`CapturePolicy::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::{convert, Failable};
    ///
    /// let parsed = Failable::absorb_with(|| "7".parse::<u8>().map(Some), convert::message);
    /// assert_eq!(parsed, Failable::success(7));
    ///
    /// let missing = Failable::<u8, _>::absorb_with(|| Ok::<_, &str>(None), |_| "no-value");
    /// assert_eq!(missing, Failable::failure("no-value"));
    /// ```
    #[inline]
    pub fn absorb_with<E, A, C>(action: A, converter: C) -> Self
    where
        A: FnOnce() -> Result<Option<S>, E>,
        C: Fn(Raised<E>) -> F,
    {
        absorb_value(CapturePolicy::default(), action, converter)
    }

    /// Runs `action` under an explicit capture policy.
    #[inline]
    pub fn absorb_with_policy<E, A, C>(policy: CapturePolicy, action: A, converter: C) -> Self
    where
        A: FnOnce() -> Result<Option<S>, E>,
        C: Fn(Raised<E>) -> F,
    {
        absorb_value(policy, action, converter)
    }
}

impl<S, E> Failable<S, Raised<E>> {
    /// Runs `action`, keeping whatever it raised as the failure value.
    ///
    /// A returned error ends up in [`Raised::Error`] unchanged, a caught panic in
    /// `Raised::Panic`, and `Ok(None)` in [`Raised::NullResult`].
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::Failable;
    ///
    /// let value = Failable::absorb(|| "42".parse::<i32>().map(Some));
    /// assert_eq!(*value.get_success(), 42);
    ///
    /// let failed = Failable::absorb(|| "x".parse::<i32>().map(Some));
    /// assert!(failed.get_failure().is_error());
    /// ```
    #[inline]
    pub fn absorb<A>(action: A) -> Self
    where
        A: FnOnce() -> Result<Option<S>, E>,
    {
        absorb_value(CapturePolicy::default(), action, identity)
    }
}

impl<S, F> From<Result<S, F>> for Failable<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<S, F> From<Failable<S, F>> for Result<S, F> {
    #[inline]
    fn from(failable: Failable<S, F>) -> Self {
        failable.into_result()
    }
}
