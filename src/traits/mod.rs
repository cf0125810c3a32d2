//! Traits layered over [`SmartResult`](crate::SmartResult).
//!
//! - [`ErrorState`]: object-safe view for inspecting results of unknown payload type
//! - [`IntoSmartResult`]: lifts `Result<T, E>` into `SmartResult<T>`
//!
//! # Examples
//!
//! ```
//! use smart_result::traits::{ErrorState, IntoSmartResult};
//! use smart_result::{Error, ErrorCategory};
//!
//! let lifted = Err::<(), _>(ErrorCategory::Forbidden).into_smart();
//! let view: &dyn ErrorState = &lifted;
//! assert!(view.is_error());
//! assert_eq!(view.errors_if_any().map(<[Error]>::len), Some(1));
//! ```

pub mod error_state;
pub mod into_smart_result;

pub use error_state::ErrorState;
pub use into_smart_result::IntoSmartResult;
