//! Structured domain error carried by [`SmartResult`](crate::SmartResult).
//!
//! An [`Error`] is an immutable value: a machine-readable `code`, a
//! human-readable `description`, an [`ErrorCategory`] and optional metadata.
//! Two errors are equal when all of those fields are equal.
//!
//! # Examples
//!
//! ```
//! use smart_result::{Error, ErrorCategory};
//!
//! let err = Error::validation("User.Name", "Name is too short")
//!     .with_metadata("min_length", 3u64);
//!
//! assert_eq!(err.category(), ErrorCategory::Validation);
//! assert_eq!(err.code(), "User.Name");
//! assert_eq!(err.to_string(), "User.Name: Name is too short");
//! ```
use core::fmt::{self, Display};

use crate::types::alloc_type::{BTreeMap, String};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code of the placeholder error synthesized when errors are read from a
/// value-state result.
pub const NO_ERRORS_CODE: &str = "SmartResult.NoErrors";

const NO_ERRORS_DESCRIPTION: &str = "Error list cannot be retrieved from a successful SmartResult.";

/// Key/value metadata attached to an [`Error`]. Keys are unique and ordered.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// Closed set of error categories.
///
/// The category drives default codes and descriptions, and `Unexpected` is
/// the category of the sentinel error returned by
/// [`SmartResult::errors`](crate::SmartResult::errors) on a value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    Failure,
    Unexpected,
    Validation,
    Conflict,
    NotFound,
    Unauthorized,
    Forbidden,
}

impl ErrorCategory {
    /// All categories, in declaration order.
    pub const ALL: [ErrorCategory; 7] = [
        Self::Failure,
        Self::Unexpected,
        Self::Validation,
        Self::Conflict,
        Self::NotFound,
        Self::Unauthorized,
        Self::Forbidden,
    ];

    /// Returns the category name, e.g. `"NotFound"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::Unexpected => "Unexpected",
            Self::Validation => "Validation",
            Self::Conflict => "Conflict",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
        }
    }

    /// Code used by [`Error::of`] when no explicit code is given.
    #[must_use]
    pub const fn default_code(self) -> &'static str {
        match self {
            Self::Failure => "General.Failure",
            Self::Unexpected => "General.Unexpected",
            Self::Validation => "General.Validation",
            Self::Conflict => "General.Conflict",
            Self::NotFound => "General.NotFound",
            Self::Unauthorized => "General.Unauthorized",
            Self::Forbidden => "General.Forbidden",
        }
    }

    /// Description used by [`Error::of`] when no explicit description is given.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::Failure => "A failure has occurred.",
            Self::Unexpected => "An unexpected error has occurred.",
            Self::Validation => "A validation error has occurred.",
            Self::Conflict => "A conflict error has occurred.",
            Self::NotFound => "A 'Not Found' error has occurred.",
            Self::Unauthorized => "An 'Unauthorized' error has occurred.",
            Self::Forbidden => "A 'Forbidden' error has occurred.",
        }
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value stored in [`Error`] metadata.
///
/// Serialized untagged. Unsigned integers that fit in `i64` are stored as
/// `Int`, so `UInt` only ever holds values above `i64::MAX` and a value reads
/// back as the variant it was written from. `Int(n)` and `UInt(n)` with the
/// same numeric value compare equal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone)]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! metadata_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for MetadataValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

metadata_from! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    String => Text,
    &str => Text,
}

impl From<u64> for MetadataValue {
    #[inline]
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Int(value),
            Err(_) => Self::UInt(value),
        }
    }
}

impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Int(a), Self::UInt(b)) | (Self::UInt(b), Self::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl From<()> for MetadataValue {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Null
    }
}

/// A single domain failure.
///
/// Errors are built through [`Error::new`], the per-category constructors
/// ([`Error::validation`], [`Error::not_found`], ...) or [`Error::of`] for the
/// category defaults. [`with_metadata`](Error::with_metadata) consumes the
/// error and returns an extended copy; there is no way to mutate one in place.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: String,
    description: String,
    category: ErrorCategory,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    metadata: Option<Metadata>,
}

impl Error {
    /// Creates an error of the given category.
    #[inline]
    pub fn new<C, D>(category: ErrorCategory, code: C, description: D) -> Self
    where
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            code: code.into(),
            description: description.into(),
            category,
            metadata: None,
        }
    }

    /// Creates an error carrying the category's default code and description.
    ///
    /// ```
    /// use smart_result::{Error, ErrorCategory};
    ///
    /// let err = Error::of(ErrorCategory::Conflict);
    /// assert_eq!(err.code(), "General.Conflict");
    /// ```
    #[inline]
    pub fn of(category: ErrorCategory) -> Self {
        Self::new(category, category.default_code(), category.default_description())
    }

    /// Creates a `Failure` error.
    #[inline]
    pub fn failure(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Failure, code, description)
    }

    /// Creates an `Unexpected` error.
    #[inline]
    pub fn unexpected(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unexpected, code, description)
    }

    /// Creates a `Validation` error.
    #[inline]
    pub fn validation(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Validation, code, description)
    }

    /// Creates a `Conflict` error.
    #[inline]
    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Conflict, code, description)
    }

    /// Creates a `NotFound` error.
    #[inline]
    pub fn not_found(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::NotFound, code, description)
    }

    /// Creates an `Unauthorized` error.
    #[inline]
    pub fn unauthorized(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unauthorized, code, description)
    }

    /// Creates a `Forbidden` error.
    #[inline]
    pub fn forbidden(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Forbidden, code, description)
    }

    /// Builds the `Unexpected` placeholder handed out when errors are read
    /// from a value-state result. A fresh instance is returned on every call.
    #[inline]
    pub fn no_errors_sentinel() -> Self {
        Self::unexpected(NO_ERRORS_CODE, NO_ERRORS_DESCRIPTION)
    }

    /// Returns a copy of this error with `key` set to `value` in its metadata.
    ///
    /// Setting an existing key replaces the previous value.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    /// Returns the error code.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable description.
    #[must_use]
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Returns the metadata map, if any entry was ever attached.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Looks up a single metadata entry.
    #[must_use]
    #[inline]
    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }
}

impl From<ErrorCategory> for Error {
    #[inline]
    fn from(category: ErrorCategory) -> Self {
        Self::of(category)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl core::error::Error for Error {}
