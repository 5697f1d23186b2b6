//! Either type - a value or a caller-supplied fallback.
//!
//! `Either<T>` is `Empty` or `Holding(T)`. It has the same shape as
//! [`Maybe`](super::Maybe), but folding it always produces a value for the
//! single success callback: the held value, or the default supplied by the
//! caller when the `Either` is empty.
//!
//! The default is only checked when it is actually needed. Folding an
//! `Empty` without a default is a contract violation and fails with
//! [`MissingDefaultError`]; folding a `Holding` never looks at the default.
//!
//! # Examples
//!
//! ```rust
//! use spice::control::Either;
//!
//! let mut greeting = String::new();
//! Either::<&str>::empty()
//!     .fold(
//!         Some("anonymous"),
//!         Some(|name: &str| greeting = format!("hi {name}")),
//!     )
//!     .unwrap();
//! assert_eq!(greeting, "hi anonymous");
//! ```

use super::maybe::Maybe;
use super::try_catch::TryCatch;
use crate::error::MissingDefaultError;

/// A value that is either held or empty, folded against a default.
///
/// This is not a two-sided disjunction: the empty side carries no payload
/// and no alternate type. Panics raised by transforms passed to
/// [`map`](Either::map) are not caught.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use spice::control::Either;
///
/// let holding = Either::holding(20).map(|x| x + 1);
/// assert_eq!(holding.fold_into(Some(0), |x| x * 2), Ok(42));
///
/// let empty: Either<i32> = Either::empty();
/// assert_eq!(empty.fold_into(Some(0), |x| x * 2), Ok(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<T> {
    /// Nothing is held; folding uses the caller's default.
    Empty,
    /// A value is held.
    Holding(T),
}

impl<T> Either<T> {
    /// Creates an `Either` from an optional value.
    ///
    /// `Some(v)` becomes `Holding(v)` and `None` becomes `Empty`.
    #[inline]
    pub fn from_option(source: Option<T>) -> Self {
        match source {
            Some(value) => Self::Holding(value),
            None => Self::Empty,
        }
    }

    /// Creates an `Either` holding `value`.
    #[inline]
    pub const fn holding(value: T) -> Self {
        Self::Holding(value)
    }

    /// Creates an empty `Either`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_holding(&self) -> bool {
        matches!(self, Self::Holding(_))
    }

    /// Returns `true` if nothing is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the held value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Either<&T> {
        match self {
            Self::Empty => Either::Empty,
            Self::Holding(value) => Either::Holding(value),
        }
    }

    /// Applies a transform to the held value.
    ///
    /// `Empty` stays `Empty` and the transform is never invoked.
    #[inline]
    pub fn map<O, F>(self, transform: F) -> Either<O>
    where
        F: FnOnce(T) -> O,
    {
        match self {
            Self::Empty => Either::Empty,
            Self::Holding(value) => Either::Holding(transform(value)),
        }
    }

    /// Applies a transform that may produce nothing; `None` yields `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Either;
    ///
    /// let first = Either::holding("").map_partial(|s| s.chars().next());
    /// assert_eq!(first, Either::Empty);
    /// ```
    #[inline]
    pub fn map_partial<O, F>(self, transform: F) -> Either<O>
    where
        F: FnOnce(T) -> Option<O>,
    {
        match self {
            Self::Empty => Either::Empty,
            Self::Holding(value) => Either::from_option(transform(value)),
        }
    }

    /// Calls `on_success` with the held value or with `default`.
    ///
    /// On `Holding(v)`, `on_success(v)` runs if given; `default` is ignored
    /// and never validated. On `Empty`, `default` must be `Some`, and
    /// `on_success(default)` runs if given.
    ///
    /// # Errors
    ///
    /// Returns [`MissingDefaultError`] when `self` is `Empty` and `default`
    /// is `None`. No callback runs in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Either;
    /// use spice::error::MissingDefaultError;
    ///
    /// let empty: Either<i32> = Either::empty();
    /// assert_eq!(empty.fold(None, Some(|_| ())), Err(MissingDefaultError));
    ///
    /// let holding = Either::holding(1);
    /// assert_eq!(holding.fold(None, Some(|_| ())), Ok(()));
    /// ```
    pub fn fold<S>(
        self,
        default: Option<T>,
        on_success: Option<S>,
    ) -> Result<(), MissingDefaultError>
    where
        S: FnOnce(T),
    {
        let value = match self {
            Self::Holding(value) => value,
            Self::Empty => default.ok_or_else(reject_missing_default)?,
        };
        if let Some(callback) = on_success {
            callback(value);
        }
        Ok(())
    }

    /// Applies `on_success` to the held value or to `default`.
    ///
    /// The default is validated under the same rule as [`fold`](Either::fold).
    ///
    /// # Errors
    ///
    /// Returns [`MissingDefaultError`] when `self` is `Empty` and `default`
    /// is `None`.
    #[inline]
    pub fn fold_into<R, S>(
        self,
        default: Option<T>,
        on_success: S,
    ) -> Result<R, MissingDefaultError>
    where
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Holding(value) => Ok(on_success(value)),
            Self::Empty => default.map(on_success).ok_or_else(reject_missing_default),
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Holding(value) => Some(value),
        }
    }

    /// Converts into a `Maybe` holding the current payload.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self.into_option())
    }

    /// Converts into a `TryCatch` holding the current payload.
    ///
    /// `Empty` becomes a `Failed` carrying the missing-value error.
    #[inline]
    pub fn into_try_catch(self) -> TryCatch<T> {
        TryCatch::from_option(self.into_option())
    }
}

fn reject_missing_default() -> MissingDefaultError {
    tracing::debug!("empty Either folded without a default value");
    MissingDefaultError
}

impl<T> Default for Either<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Either<T> {
    #[inline]
    fn from(source: Option<T>) -> Self {
        Self::from_option(source)
    }
}

impl<T> From<Either<T>> for Option<T> {
    #[inline]
    fn from(either: Either<T>) -> Self {
        either.into_option()
    }
}

impl<T> From<Maybe<T>> for Either<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_either()
    }
}

impl<T> From<TryCatch<T>> for Either<T> {
    #[inline]
    fn from(try_catch: TryCatch<T>) -> Self {
        try_catch.into_either()
    }
}

static_assertions::assert_impl_all!(Either<String>: Send, Sync);
