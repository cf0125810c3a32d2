//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! [`Branch`](crate::async_ext::Branch) future returned by the async
//! combinators, and the tracing helpers when the `tracing` feature is on.
//!
//! ```ignore
//! use smart_result::prelude_async::*;
//!
//! async fn save(order: SmartResult<Order>) {
//!     order
//!         .switch_first_async(
//!             |order| async move { repository.insert(order).await },
//!             |error| async move { audit.record(error).await },
//!         )
//!         .await;
//! }
//! ```

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::Branch;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{instrument_error, ResultSpanExt};
