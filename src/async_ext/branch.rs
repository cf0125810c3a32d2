//! Future returned by the async combinators.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

pin_project! {
    /// The future of whichever branch an async combinator picked.
    ///
    /// Built by [`SmartResult::match_all_async`](crate::SmartResult::match_all_async)
    /// and friends once the tag has been checked, so the other branch's future
    /// is never created. Resolves to the chosen future's output.
    ///
    /// # Cancel Safety
    ///
    /// `Branch` is cancel-safe if the chosen future is cancel-safe.
    #[project = BranchProj]
    #[must_use = "futures do nothing unless polled"]
    #[derive(Debug)]
    pub enum Branch<V, E> {
        Value { #[pin] future: V },
        Errors { #[pin] future: E },
    }
}

impl<V, E> Branch<V, E> {
    /// Returns `true` if the value branch was taken.
    #[must_use]
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }
}

impl<V, E> Future for Branch<V, E>
where
    V: Future,
    E: Future<Output = V::Output>,
{
    type Output = V::Output;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            BranchProj::Value { future } => future.poll(cx),
            BranchProj::Errors { future } => future.poll(cx),
        }
    }
}

impl<V, E> FusedFuture for Branch<V, E>
where
    V: FusedFuture,
    E: FusedFuture<Output = V::Output>,
{
    fn is_terminated(&self) -> bool {
        match self {
            Self::Value { future } => future.is_terminated(),
            Self::Errors { future } => future.is_terminated(),
        }
    }
}
