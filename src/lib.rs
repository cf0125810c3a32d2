//! A value-or-errors result type with explicit dispatch.
//!
//! [`SmartResult<T>`] holds either a successful `T` or a non-empty, ordered
//! list of structured [`Error`]s. Consumers branch on
//! [`is_error`](SmartResult::is_error) or hand both paths to one of the
//! match/switch combinators, which call exactly one of them.
//!
//! # Examples
//!
//! ## Building results
//!
//! ```
//! use smart_result::{Error, SmartResult};
//!
//! let ok = SmartResult::from_value("Amichai");
//! let one: SmartResult<&str> = Error::validation("User.Name", "Name is too short").into();
//! let many: SmartResult<&str> = [
//!     Error::validation("User.Name", "Name is too short"),
//!     Error::validation("User.Age", "User is too young"),
//! ]
//! .into();
//!
//! assert!(!ok.is_error());
//! assert_eq!(one.errors().len(), 1);
//! assert_eq!(many.first_error().code(), "User.Name");
//! ```
//!
//! ## Dispatching
//!
//! ```
//! use smart_result::{Error, SmartResult};
//!
//! fn render(r: SmartResult<u32>) -> String {
//!     r.match_first(|n| format!("total: {n}"), |e| format!("failed: {e}"))
//! }
//!
//! assert_eq!(render(SmartResult::from_value(3)), "total: 3");
//! assert_eq!(
//!     render(Error::failure("Cart.Empty", "Cart is empty").into()),
//!     "failed: Cart.Empty: Cart is empty"
//! );
//! ```
//!
//! ## Rejecting empty error lists
//!
//! ```
//! use smart_result::{EmptyErrors, Error, SmartResult};
//!
//! let errors: Vec<Error> = Vec::new();
//! assert_eq!(SmartResult::<u32>::try_from(errors), Err(EmptyErrors));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free-function constructors and `Result` conversions
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits layered over SmartResult
pub mod traits;
/// Error, ErrorCategory, SmartResult and the success markers
pub mod types;

/// Async combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::from;
pub use traits::*;
pub use types::{
    markers, EmptyErrors, Error, ErrorCategory, ErrorVec, Metadata, MetadataValue, SmartResult,
    NO_ERRORS_CODE,
};
