use core::fmt::{self, Display};

use crate::types::alloc_type::{Cow, Vec};
use crate::types::error::Error;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value-or-errors result.
///
/// A `SmartResult<T>` is in exactly one of two states for its whole
/// lifetime:
///
/// * **value**: holds one `T`
/// * **errors**: holds one or more [`Error`]s, in insertion order
///
/// An error-state result is never empty. The fallible constructors reject an
/// empty sequence with [`EmptyErrors`], and an empty array does not compile.
///
/// Accessors that ask for errors on a value return a synthesized `Unexpected`
/// sentinel ([`Error::no_errors_sentinel`]) instead of nothing; use
/// [`errors_or_empty`](SmartResult::errors_or_empty) when "no errors" has to
/// be told apart from "one error".
///
/// # Examples
///
/// ```
/// use smart_result::{Error, ErrorCategory, SmartResult};
///
/// let ok = SmartResult::from_value(42);
/// assert!(!ok.is_error());
/// assert_eq!(ok.value(), 42);
/// assert!(ok.errors_or_empty().is_empty());
/// assert_eq!(ok.first_error().category(), ErrorCategory::Unexpected);
///
/// let failed: SmartResult<i32> = Error::not_found("User.Missing", "No such user").into();
/// assert!(failed.is_error());
/// assert_eq!(failed.value(), 0);
/// assert_eq!(failed.first_error().code(), "User.Missing");
/// ```
#[must_use]
#[derive(Clone, PartialEq, Debug)]
pub struct SmartResult<T> {
    state: State<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename = "SmartResult"))]
#[derive(Clone, PartialEq, Debug)]
enum State<T> {
    Value(T),
    Errors(ErrorVec<Error>),
}

/// Rejection returned when a result is built from an empty error sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot create a SmartResult from an empty collection of errors")
    }
}

impl core::error::Error for EmptyErrors {}

impl<T> SmartResult<T> {
    /// Wraps a successful value.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Wraps a single error.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self {
            state: State::Errors(smallvec::smallvec![error]),
        }
    }

    /// Wraps an ordered sequence of errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrors`] when `errors` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use smart_result::{EmptyErrors, Error, SmartResult};
    ///
    /// let r = SmartResult::<()>::from_errors([
    ///     Error::validation("User.Name", "Name is too short"),
    ///     Error::validation("User.Age", "User is too young"),
    /// ])
    /// .unwrap();
    /// assert_eq!(r.errors().len(), 2);
    ///
    /// let empty = SmartResult::<()>::from_errors(Vec::<Error>::new());
    /// assert_eq!(empty, Err(EmptyErrors));
    /// ```
    pub fn from_errors<I>(errors: I) -> Result<Self, EmptyErrors>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: ErrorVec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(EmptyErrors);
        }
        Ok(Self {
            state: State::Errors(errors),
        })
    }

    /// Returns `true` if the result holds errors.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.state, State::Errors(_))
    }

    /// Returns the value by clone, or `T::default()` in the error state.
    ///
    /// The default is not a real value; check [`is_error`](Self::is_error)
    /// first or go through a combinator.
    #[must_use]
    #[inline]
    pub fn value(&self) -> T
    where
        T: Clone + Default,
    {
        match &self.state {
            State::Value(value) => value.clone(),
            State::Errors(_) => T::default(),
        }
    }

    /// Borrows the value, if any.
    #[must_use]
    #[inline]
    pub fn value_ref(&self) -> Option<&T> {
        match &self.state {
            State::Value(value) => Some(value),
            State::Errors(_) => None,
        }
    }

    /// Consuming form of [`value`](Self::value).
    #[must_use]
    #[inline]
    pub fn into_value(self) -> T
    where
        T: Default,
    {
        match self.state {
            State::Value(value) => value,
            State::Errors(_) => T::default(),
        }
    }

    /// Returns the stored errors, or a single fresh sentinel on a value.
    ///
    /// ```
    /// use smart_result::{ErrorCategory, SmartResult};
    ///
    /// let ok = SmartResult::from_value("done");
    /// let errors = ok.errors();
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(errors[0].category(), ErrorCategory::Unexpected);
    /// ```
    #[must_use]
    pub fn errors(&self) -> Cow<'_, [Error]> {
        match &self.state {
            State::Value(_) => Cow::Owned(Vec::from([Error::no_errors_sentinel()])),
            State::Errors(errors) => Cow::Borrowed(errors.as_slice()),
        }
    }

    /// Returns the stored errors, or an empty slice on a value.
    #[must_use]
    #[inline]
    pub fn errors_or_empty(&self) -> &[Error] {
        match &self.state {
            State::Value(_) => &[],
            State::Errors(errors) => errors.as_slice(),
        }
    }

    /// Returns the first stored error, or a fresh sentinel on a value.
    #[must_use]
    pub fn first_error(&self) -> Cow<'_, Error> {
        match self.errors_or_empty().first() {
            Some(first) => Cow::Borrowed(first),
            None => Cow::Owned(Error::no_errors_sentinel()),
        }
    }

    /// Consuming form of [`errors`](Self::errors).
    #[must_use]
    pub fn into_errors(self) -> ErrorVec<Error> {
        self.dispatch(
            |_| smallvec::smallvec![Error::no_errors_sentinel()],
            |errors| errors,
        )
    }

    /// Consuming form of [`errors_or_empty`](Self::errors_or_empty).
    #[must_use]
    pub fn into_errors_or_empty(self) -> ErrorVec<Error> {
        self.dispatch(|_| ErrorVec::new(), |errors| errors)
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorVec<Error>> {
        self.dispatch(Ok, Err)
    }

    /// Single tag check behind every combinator.
    ///
    /// Invokes exactly one of the two callables. The async combinators pass
    /// closures that build a future instead of producing the final output.
    #[inline]
    pub(crate) fn dispatch<R, V, E>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(ErrorVec<Error>) -> R,
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_errors(errors),
        }
    }

    /// Rewrites every stored error in place, keeping the state and order.
    #[cfg(feature = "tracing")]
    pub(crate) fn map_each_error<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => Self {
                state: State::Errors(errors.into_iter().map(f).collect()),
            },
        }
    }

    /// Calls `on_value` with the value or `on_errors` with every error, and
    /// returns what the called branch returns.
    ///
    /// ```
    /// use smart_result::{Error, SmartResult};
    ///
    /// let r: SmartResult<u32> = Error::conflict("Order.Duplicate", "Order already placed").into();
    /// let message = r.match_all(
    ///     |n| format!("placed {n}"),
    ///     |errors| format!("{} error(s)", errors.len()),
    /// );
    /// assert_eq!(message, "1 error(s)");
    /// ```
    #[inline]
    pub fn match_all<R, V, E>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(ErrorVec<Error>) -> R,
    {
        self.dispatch(on_value, on_errors)
    }

    /// Like [`match_all`](Self::match_all), but the error branch only sees the
    /// first error.
    #[inline]
    pub fn match_first<R, V, E>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        self.dispatch(on_value, |errors| on_first_error(take_first(errors)))
    }

    /// Side-effecting form of [`match_all`](Self::match_all).
    #[inline]
    pub fn switch<V, E>(self, on_value: V, on_errors: E)
    where
        V: FnOnce(T),
        E: FnOnce(ErrorVec<Error>),
    {
        self.dispatch(on_value, on_errors)
    }

    /// Side-effecting form of [`match_first`](Self::match_first).
    #[inline]
    pub fn switch_first<V, E>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        self.dispatch(on_value, |errors| on_first_error(take_first(errors)))
    }
}

/// Moves the first error out of a stored sequence.
///
/// Stored sequences are never empty, so the sentinel fallback is unreachable
/// for results built through this crate.
#[inline]
pub(crate) fn take_first(errors: ErrorVec<Error>) -> Error {
    errors.into_iter().next().unwrap_or_else(Error::no_errors_sentinel)
}

impl<T> From<Error> for SmartResult<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T, const N: usize> From<[Error; N]> for SmartResult<T> {
    /// Wraps a non-empty array of errors. `[Error; 0]` is rejected at compile
    /// time:
    ///
    /// ```compile_fail
    /// use smart_result::{Error, SmartResult};
    ///
    /// let _ = SmartResult::<u8>::from([] as [Error; 0]);
    /// ```
    #[inline]
    fn from(errors: [Error; N]) -> Self {
        const { assert!(N > 0, "a SmartResult needs at least one error") };
        Self {
            state: State::Errors(errors.into_iter().collect()),
        }
    }
}

impl<T> TryFrom<Vec<Error>> for SmartResult<T> {
    type Error = EmptyErrors;

    #[inline]
    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::from_errors(errors)
    }
}

impl<T> TryFrom<ErrorVec<Error>> for SmartResult<T> {
    type Error = EmptyErrors;

    #[inline]
    fn try_from(errors: ErrorVec<Error>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            return Err(EmptyErrors);
        }
        Ok(Self {
            state: State::Errors(errors),
        })
    }
}

impl<T> From<Result<T, Error>> for SmartResult<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for SmartResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.state.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for SmartResult<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match State::<T>::deserialize(deserializer)? {
            State::Value(value) => Ok(Self::from_value(value)),
            State::Errors(errors) => Self::try_from(errors).map_err(serde::de::Error::custom),
        }
    }
}
