//! Core types: [`Error`], [`ErrorCategory`] and [`SmartResult`].
//!
//! # Examples
//!
//! ```
//! use smart_result::{Error, SmartResult};
//!
//! fn parse_age(input: &str) -> SmartResult<u8> {
//!     match input.parse::<u8>() {
//!         Ok(age) if age >= 18 => SmartResult::from_value(age),
//!         Ok(_) => Error::validation("User.Age", "User is too young").into(),
//!         Err(_) => Error::validation("User.Age", "Age is not a number").into(),
//!     }
//! }
//!
//! assert_eq!(parse_age("30").value(), 30);
//! assert_eq!(parse_age("12").first_error().description(), "User is too young");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod markers;
pub mod smart_result;

pub use error::*;
pub use smart_result::*;

/// SmallVec-backed collection holding the errors of a [`SmartResult`].
///
/// Uses inline storage for 1 element, so the common single-error result
/// does not allocate for its error list.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
