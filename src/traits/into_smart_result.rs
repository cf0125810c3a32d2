//! Extension trait for lifting standard `Result`s into [`SmartResult`].
//!
//! # Examples
//!
//! ```
//! use smart_result::traits::IntoSmartResult;
//! use smart_result::Error;
//!
//! fn find(id: u32) -> Result<&'static str, Error> {
//!     if id == 1 {
//!         Ok("Amichai")
//!     } else {
//!         Err(Error::not_found("User.NotFound", "No such user"))
//!     }
//! }
//!
//! assert!(!find(1).into_smart().is_error());
//! assert!(find(2).into_smart().is_error());
//! ```

use crate::types::{Error, SmartResult};

/// Conversion of `Result<T, E>` into `SmartResult<T>` for any error that
/// converts into [`Error`].
pub trait IntoSmartResult<T> {
    /// Lifts `Ok` into the value state and `Err` into a single-error state.
    fn into_smart(self) -> SmartResult<T>;
}

impl<T, E> IntoSmartResult<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[inline]
    fn into_smart(self) -> SmartResult<T> {
        match self {
            Ok(value) => SmartResult::from_value(value),
            Err(error) => SmartResult::from_error(error.into()),
        }
    }
}
