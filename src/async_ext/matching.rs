//! Suspending forms of the match/switch combinators.
//!
//! Each combinator checks the tag synchronously, calls the chosen closure to
//! obtain its future and returns that future wrapped in a [`Branch`]. The
//! untaken closure is dropped without being called.

use core::future::Future;

use crate::types::smart_result::take_first;
use crate::types::{Error, ErrorVec, SmartResult};

use super::branch::Branch;

impl<T> SmartResult<T> {
    /// Async form of [`match_all`](SmartResult::match_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smart_result::{Error, SmartResult};
    ///
    /// async fn describe(r: SmartResult<u32>) -> String {
    ///     r.match_all_async(
    ///         |n| async move { format!("got {n}") },
    ///         |errors| async move { format!("{} error(s)", errors.len()) },
    ///     )
    ///     .await
    /// }
    /// ```
    #[inline]
    pub fn match_all_async<V, FV, E, FE>(self, on_value: V, on_errors: E) -> Branch<FV, FE>
    where
        V: FnOnce(T) -> FV,
        FV: Future,
        E: FnOnce(ErrorVec<Error>) -> FE,
        FE: Future<Output = FV::Output>,
    {
        self.dispatch(
            |value| Branch::Value {
                future: on_value(value),
            },
            |errors| Branch::Errors {
                future: on_errors(errors),
            },
        )
    }

    /// Async form of [`match_first`](SmartResult::match_first).
    #[inline]
    pub fn match_first_async<V, FV, E, FE>(self, on_value: V, on_first_error: E) -> Branch<FV, FE>
    where
        V: FnOnce(T) -> FV,
        FV: Future,
        E: FnOnce(Error) -> FE,
        FE: Future<Output = FV::Output>,
    {
        self.dispatch(
            |value| Branch::Value {
                future: on_value(value),
            },
            |errors| Branch::Errors {
                future: on_first_error(take_first(errors)),
            },
        )
    }

    /// Async form of [`switch`](SmartResult::switch).
    #[inline]
    pub fn switch_async<V, FV, E, FE>(self, on_value: V, on_errors: E) -> Branch<FV, FE>
    where
        V: FnOnce(T) -> FV,
        FV: Future<Output = ()>,
        E: FnOnce(ErrorVec<Error>) -> FE,
        FE: Future<Output = ()>,
    {
        self.match_all_async(on_value, on_errors)
    }

    /// Async form of [`switch_first`](SmartResult::switch_first).
    #[inline]
    pub fn switch_first_async<V, FV, E, FE>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> Branch<FV, FE>
    where
        V: FnOnce(T) -> FV,
        FV: Future<Output = ()>,
        E: FnOnce(Error) -> FE,
        FE: Future<Output = ()>,
    {
        self.match_first_async(on_value, on_first_error)
    }
}
