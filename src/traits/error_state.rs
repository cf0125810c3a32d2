use crate::types::{Error, SmartResult};

/// Type-erased view over a [`SmartResult`].
///
/// Lets code inspect results whose payload type it does not know, e.g. a
/// list of `&dyn ErrorState` collected from unrelated operations.
///
/// # Examples
///
/// ```
/// use smart_result::traits::ErrorState;
/// use smart_result::{Error, SmartResult};
///
/// let name = SmartResult::from_value(String::from("Amichai"));
/// let age: SmartResult<u8> = Error::validation("User.Age", "User is too young").into();
///
/// let checks: [&dyn ErrorState; 2] = [&name, &age];
/// let failed: Vec<_> = checks
///     .iter()
///     .filter_map(|c| c.errors_if_any())
///     .flatten()
///     .map(|e| e.code())
///     .collect();
/// assert_eq!(failed, ["User.Age"]);
/// ```
pub trait ErrorState {
    /// Returns `true` if the underlying result holds errors.
    fn is_error(&self) -> bool;

    /// Returns the stored errors, or `None` on a value.
    fn errors_if_any(&self) -> Option<&[Error]>;
}

impl<T> ErrorState for SmartResult<T> {
    #[inline]
    fn is_error(&self) -> bool {
        SmartResult::is_error(self)
    }

    #[inline]
    fn errors_if_any(&self) -> Option<&[Error]> {
        if SmartResult::is_error(self) {
            Some(self.errors_or_empty())
        } else {
            None
        }
    }
}
