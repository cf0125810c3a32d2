//! Async extensions for smart-result.
//!
//! Suspending variants of the match/switch combinators. They share the
//! blocking combinators' dispatch: exactly one branch closure is called and
//! only its future is ever polled.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! smart-result = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use smart_result::prelude_async::*;
//!
//! async fn greet(user: SmartResult<User>) -> String {
//!     user.match_first_async(
//!         |user| async move { render_greeting(&user).await },
//!         |error| async move { error.description().to_owned() },
//!     )
//!     .await
//! }
//! ```

mod branch;
mod matching;

pub use branch::Branch;
