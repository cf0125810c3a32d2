//! Tracing integration for smart-result.
//!
//! Attaches the active span to carried errors and reports errors as
//! `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! smart-result = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Error, SmartResult};

/// Metadata key under which the span name is recorded.
pub const SPAN_KEY: &str = "span";

/// Extension trait tying [`SmartResult`] errors to tracing spans.
///
/// # Example
///
/// ```rust,ignore
/// use smart_result::tracing_ext::ResultSpanExt;
/// use tracing::info_span;
///
/// fn load_user(id: u64) -> SmartResult<User> {
///     let span = info_span!("load_user", user_id = id);
///     let _guard = span.enter();
///     repository.find(id).with_current_span().trace_errors()
/// }
/// ```
pub trait ResultSpanExt<T>: Sized {
    /// Records the current span's name in every carried error.
    fn with_current_span(self) -> SmartResult<T> {
        self.with_span(&Span::current())
    }

    /// Records `span`'s name in every carried error. Values pass through.
    fn with_span(self, span: &Span) -> SmartResult<T>;

    /// Emits one `WARN` event per carried error. Emits nothing on a value.
    fn trace_errors(self) -> SmartResult<T>;
}

impl<T> ResultSpanExt<T> for SmartResult<T> {
    fn with_span(self, span: &Span) -> SmartResult<T> {
        let name = span_name(span);
        self.map_each_error(|error| error.with_metadata(SPAN_KEY, name))
    }

    fn trace_errors(self) -> SmartResult<T> {
        for error in self.errors_or_empty() {
            tracing::warn!(
                code = error.code(),
                category = %error.category(),
                "{}",
                error.description()
            );
        }
        self
    }
}

/// Records the current span's name in a single error.
pub fn instrument_error(error: Error) -> Error {
    error.with_metadata(SPAN_KEY, span_name(&Span::current()))
}

/// Span name, or `"unknown"` for a disabled span.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
