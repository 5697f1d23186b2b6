//! Error types for the wrapper types.
//!
//! - [`CaughtError`]: the failure payload stored by [`TryCatch::Failed`](crate::control::TryCatch::Failed)
//! - [`CaughtErrorKind`]: where a [`CaughtError`] came from
//! - [`MissingDefaultError`]: returned by [`Either::fold`](crate::control::Either::fold)
//!   when an empty value is folded without a default

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Message used when a `TryCatch` is built from a missing value.
const MISSING_VALUE_MESSAGE: &str = "Initial value is missing.";

/// Message used when a panic payload is neither `&str` nor `String`.
const UNKNOWN_PANIC_MESSAGE: &str = "Unknown panic";

/// The origin of a [`CaughtError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaughtErrorKind {
    /// The `TryCatch` was constructed from a missing value.
    MissingValue,
    /// A producer or transform returned an error.
    Raised,
    /// A producer or transform panicked.
    Panicked,
}

impl fmt::Display for CaughtErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingValue => "missing value",
            Self::Raised => "raised",
            Self::Panicked => "panicked",
        };
        formatter.write_str(name)
    }
}

/// An opaque error captured by a `TryCatch`.
///
/// A `CaughtError` wraps whatever went wrong while a `TryCatch` was being
/// built or mapped: an error returned by a producer or transform, a panic,
/// or the manufactured "missing value" error. When an underlying error
/// exists it is exposed through [`Error::source`].
///
/// Two `CaughtError`s are equal when their kind and message are equal.
///
/// # Examples
///
/// ```rust
/// use spice::error::{CaughtError, CaughtErrorKind};
///
/// let error = CaughtError::raised("borked");
/// assert_eq!(error.kind(), CaughtErrorKind::Raised);
/// assert_eq!(error.message(), "borked");
/// assert_eq!(format!("{error}"), "borked");
/// ```
#[derive(Debug, Clone)]
pub struct CaughtError {
    kind: CaughtErrorKind,
    message: String,
    source: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl CaughtError {
    /// Wraps an error returned by a producer or transform.
    ///
    /// Anything convertible into a boxed error works, including `&str` and
    /// `String`.
    pub fn raised<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let boxed: Box<dyn Error + Send + Sync + 'static> = error.into();
        Self {
            kind: CaughtErrorKind::Raised,
            message: boxed.to_string(),
            source: Some(Arc::from(boxed)),
        }
    }

    /// The error stored when a `TryCatch` is built from a missing value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::error::{CaughtError, CaughtErrorKind};
    ///
    /// let error = CaughtError::missing_value();
    /// assert_eq!(error.kind(), CaughtErrorKind::MissingValue);
    /// assert_eq!(error.message(), "Initial value is missing.");
    /// ```
    pub fn missing_value() -> Self {
        Self {
            kind: CaughtErrorKind::MissingValue,
            message: MISSING_VALUE_MESSAGE.to_string(),
            source: None,
        }
    }

    /// Builds an error from a panic payload returned by `catch_unwind`.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            UNKNOWN_PANIC_MESSAGE.to_string()
        };
        Self {
            kind: CaughtErrorKind::Panicked,
            message,
            source: None,
        }
    }

    /// Returns where this error came from.
    #[inline]
    pub const fn kind(&self) -> CaughtErrorKind {
        self.kind
    }

    /// Returns the error message.
    ///
    /// For raised errors this is the `Display` output of the wrapped error;
    /// for panics it is the panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CaughtError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for CaughtError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|error| error.as_ref() as &(dyn Error + 'static))
    }
}

impl PartialEq for CaughtError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for CaughtError {}

impl std::hash::Hash for CaughtError {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}

/// Returned when an empty `Either` is folded without a default value.
///
/// # Examples
///
/// ```rust
/// use spice::error::MissingDefaultError;
///
/// assert_eq!(
///     format!("{}", MissingDefaultError),
///     "Default value must be provided."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MissingDefaultError;

impl fmt::Display for MissingDefaultError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Default value must be provided.")
    }
}

impl Error for MissingDefaultError {}

static_assertions::assert_impl_all!(CaughtError: Send, Sync, Clone);
static_assertions::assert_impl_all!(MissingDefaultError: Send, Sync, Copy);
