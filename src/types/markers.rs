//! Well-known success payloads.
//!
//! Operations that succeed without producing data can return one of these
//! markers instead of `()`, which keeps the intent visible at the call site.
//! They go through the ordinary value constructor like any other payload.
//!
//! ```
//! use smart_result::markers::{Deleted, DELETED};
//! use smart_result::SmartResult;
//!
//! fn delete_user(_id: u64) -> SmartResult<Deleted> {
//!     SmartResult::from_value(DELETED)
//! }
//!
//! assert_eq!(delete_user(7).value(), Deleted);
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! marker {
    ($(#[$doc:meta])* $name:ident, $constant:ident) => {
        $(#[$doc])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name;

        #[doc = concat!("The [`", stringify!($name), "`] marker value.")]
        pub const $constant: $name = $name;
    };
}

marker!(
    /// Generic success without a payload.
    Success,
    SUCCESS
);
marker!(
    /// A resource was created.
    Created,
    CREATED
);
marker!(
    /// A resource was deleted.
    Deleted,
    DELETED
);
marker!(
    /// A resource was updated.
    Updated,
    UPDATED
);
