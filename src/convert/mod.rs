//! Free-function constructors and conversions between [`SmartResult`] and
//! standard `Result`.
//!
//! These mirror the associated constructors for callers who prefer a plain
//! function call, e.g. when passing a constructor to `Iterator::map`.
//!
//! # Examples
//!
//! ```
//! use smart_result::convert;
//! use smart_result::Error;
//!
//! let results: Vec<_> = [1, 2, 3].into_iter().map(convert::from).collect();
//! assert!(results.iter().all(|r| !r.is_error()));
//!
//! let failed = convert::from_error::<i32>(Error::failure("Io.Read", "disk"));
//! let std_result = convert::to_result(failed);
//! assert_eq!(std_result.unwrap_err().len(), 1);
//! ```

use crate::types::{EmptyErrors, Error, ErrorVec, SmartResult};

/// Wraps `value` in the value state.
#[inline]
pub fn from<T>(value: T) -> SmartResult<T> {
    SmartResult::from_value(value)
}

/// Wraps a single error.
#[inline]
pub fn from_error<T>(error: Error) -> SmartResult<T> {
    SmartResult::from_error(error)
}

/// Wraps a sequence of errors, rejecting an empty one.
///
/// # Errors
///
/// Returns [`EmptyErrors`] if `errors` yields nothing.
#[inline]
pub fn from_errors<T, I>(errors: I) -> Result<SmartResult<T>, EmptyErrors>
where
    I: IntoIterator<Item = Error>,
{
    SmartResult::from_errors(errors)
}

/// Converts a standard `Result` whose error side is a single [`Error`].
#[inline]
pub fn from_result<T>(result: Result<T, Error>) -> SmartResult<T> {
    SmartResult::from(result)
}

/// Converts a `Result` with an error list.
///
/// # Errors
///
/// Returns [`EmptyErrors`] for `Err` carrying an empty list.
pub fn try_from_result<T, I>(result: Result<T, I>) -> Result<SmartResult<T>, EmptyErrors>
where
    I: IntoIterator<Item = Error>,
{
    match result {
        Ok(value) => Ok(SmartResult::from_value(value)),
        Err(errors) => SmartResult::from_errors(errors),
    }
}

/// Converts into a standard `Result`, keeping every error.
#[inline]
pub fn to_result<T>(result: SmartResult<T>) -> Result<T, ErrorVec<Error>> {
    result.into_result()
}

/// Converts into a standard `Result`, keeping only the first error.
#[inline]
pub fn to_result_first<T>(result: SmartResult<T>) -> Result<T, Error> {
    result.match_first(Ok, Err)
}
