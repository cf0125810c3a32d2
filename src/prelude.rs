//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use smart_result::prelude::*;
//!
//! fn create_user(name: &str) -> SmartResult<Created> {
//!     if name.len() < 3 {
//!         return Error::validation("User.Name", "Name is too short").into();
//!     }
//!     SmartResult::from_value(CREATED)
//! }
//!
//! create_user("Al").switch_first(|_| unreachable!(), |e| assert_eq!(e.code(), "User.Name"));
//! ```

// Core types
pub use crate::types::markers::{
    Created, Deleted, Success, Updated, CREATED, DELETED, SUCCESS, UPDATED,
};
pub use crate::types::{EmptyErrors, Error, ErrorCategory, ErrorVec, MetadataValue, SmartResult};

// Traits
pub use crate::traits::{ErrorState, IntoSmartResult};
