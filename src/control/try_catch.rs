//! TryCatch type - a computation whose failures are kept as data.
//!
//! `TryCatch<T>` is `Failed(CaughtError)` or `Succeeded(T)`. Errors returned
//! by producers and transforms, and panics raised inside them, are captured
//! into the `Failed` variant instead of reaching the caller.
//!
//! Panic capture relies on unwinding; with `panic = "abort"` a panicking
//! transform still aborts the process.
//!
//! # Examples
//!
//! ```rust
//! use spice::control::TryCatch;
//!
//! let outcome = TryCatch::from_option(Some("demo"))
//!     .try_map(|_| Err::<String, _>("borked"));
//!
//! let message = outcome.fold_into(|error| error.to_string(), |value| value);
//! assert_eq!(message, "borked");
//! ```

use std::error::Error;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::either::Either;
use super::maybe::Maybe;
use crate::error::CaughtError;

/// A value, or the error that prevented producing it.
///
/// Once a `TryCatch` has failed, later `map` calls keep the original error
/// and never run their transforms. A failure inside a `map` on a succeeded
/// value replaces that value with the new error.
///
/// # Type Parameters
///
/// * `T` - The type of the successful value
///
/// # Examples
///
/// ```rust
/// use spice::control::TryCatch;
///
/// let parsed = TryCatch::from_producer(|| "21".parse::<i32>()).map(|x| x * 2);
/// assert_eq!(parsed, TryCatch::Succeeded(42));
///
/// let rejected = TryCatch::from_producer(|| "x".parse::<i32>());
/// assert!(rejected.is_failed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TryCatch<T> {
    /// The computation failed.
    Failed(CaughtError),
    /// The computation produced a value.
    Succeeded(T),
}

impl<T> TryCatch<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `TryCatch` from an optional value.
    ///
    /// `None` yields `Failed` with [`CaughtError::missing_value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::TryCatch;
    /// use spice::error::CaughtErrorKind;
    ///
    /// assert_eq!(TryCatch::from_option(Some(1)), TryCatch::Succeeded(1));
    ///
    /// let missing = TryCatch::<i32>::from_option(None);
    /// assert_eq!(missing.error().map(|e| e.kind()), Some(CaughtErrorKind::MissingValue));
    /// ```
    pub fn from_option(source: Option<T>) -> Self {
        match source {
            Some(value) => Self::Succeeded(value),
            None => captured(CaughtError::missing_value()),
        }
    }

    /// Runs a fallible producer and captures its outcome.
    ///
    /// `Ok(v)` yields `Succeeded(v)`. An `Err` or a panic yields `Failed`
    /// wrapping it.
    pub fn from_producer<E, P>(producer: P) -> Self
    where
        P: FnOnce() -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        guarded(|| producer().map_err(CaughtError::raised))
    }

    /// Runs a producer that signals failure only by panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::TryCatch;
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// let first = TryCatch::catching(|| empty[0]);
    /// assert!(first.is_failed());
    /// ```
    pub fn catching<P>(producer: P) -> Self
    where
        P: FnOnce() -> T,
    {
        guarded(|| Ok(producer()))
    }

    /// Creates a succeeded `TryCatch`.
    #[inline]
    pub const fn succeeded(value: T) -> Self {
        Self::Succeeded(value)
    }

    /// Creates a failed `TryCatch`.
    #[inline]
    pub const fn failed(error: CaughtError) -> Self {
        Self::Failed(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the computation produced a value.
    #[inline]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the successful value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Failed(_) => None,
            Self::Succeeded(value) => Some(value),
        }
    }

    /// Returns the captured error, if any.
    #[inline]
    pub const fn error(&self) -> Option<&CaughtError> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Succeeded(_) => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a transform, capturing any panic it raises.
    ///
    /// On `Failed` the error is kept and the transform is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::TryCatch;
    ///
    /// let failed = TryCatch::succeeded("demo").map(|_| -> String { panic!("borked") });
    /// assert_eq!(failed.error().map(|e| e.message()), Some("borked"));
    /// ```
    pub fn map<O, F>(self, transform: F) -> TryCatch<O>
    where
        F: FnOnce(T) -> O,
    {
        match self {
            Self::Failed(error) => TryCatch::Failed(error),
            Self::Succeeded(value) => guarded(|| Ok(transform(value))),
        }
    }

    /// Applies a fallible transform, capturing its error or panic.
    ///
    /// On `Failed` the error is kept and the transform is never invoked.
    pub fn try_map<O, E, F>(self, transform: F) -> TryCatch<O>
    where
        F: FnOnce(T) -> Result<O, E>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        match self {
            Self::Failed(error) => TryCatch::Failed(error),
            Self::Succeeded(value) => guarded(|| transform(value).map_err(CaughtError::raised)),
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Dispatches to one of two optional callbacks.
    ///
    /// On `Failed(e)`, `on_error(e)` runs if given. On `Succeeded(v)`,
    /// `on_success(v)` runs if given.
    pub fn fold<E, S>(self, on_error: Option<E>, on_success: Option<S>)
    where
        E: FnOnce(CaughtError),
        S: FnOnce(T),
    {
        match self {
            Self::Failed(error) => {
                if let Some(callback) = on_error {
                    callback(error);
                }
            }
            Self::Succeeded(value) => {
                if let Some(callback) = on_success {
                    callback(value);
                }
            }
        }
    }

    /// Eliminates the `TryCatch` by applying one of two functions.
    #[inline]
    pub fn fold_into<R, E, S>(self, on_error: E, on_success: S) -> R
    where
        E: FnOnce(CaughtError) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Failed(error) => on_error(error),
            Self::Succeeded(value) => on_success(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, CaughtError> {
        match self {
            Self::Failed(error) => Err(error),
            Self::Succeeded(value) => Ok(value),
        }
    }

    /// Converts into an `Option`, dropping any error.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Failed(_) => None,
            Self::Succeeded(value) => Some(value),
        }
    }

    /// Converts into a `Maybe`; a failure becomes `Absent` and its error is lost.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self.into_option())
    }

    /// Converts into an `Either`; a failure becomes `Empty` and its error is lost.
    #[inline]
    pub fn into_either(self) -> Either<T> {
        Either::from_option(self.into_option())
    }
}

/// Runs `body` inside a panic guard and turns every failure into `Failed`.
fn guarded<T, B>(body: B) -> TryCatch<T>
where
    B: FnOnce() -> Result<T, CaughtError>,
{
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(value)) => TryCatch::Succeeded(value),
        Ok(Err(error)) => captured(error),
        Err(payload) => captured(CaughtError::from_panic(payload.as_ref())),
    }
}

fn captured<T>(error: CaughtError) -> TryCatch<T> {
    tracing::debug!(
        kind = %error.kind(),
        message = error.message(),
        "TryCatch captured a failure"
    );
    TryCatch::Failed(error)
}

impl<T> From<Option<T>> for TryCatch<T> {
    #[inline]
    fn from(source: Option<T>) -> Self {
        Self::from_option(source)
    }
}

impl<T, E> From<Result<T, E>> for TryCatch<T>
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(error) => captured(CaughtError::raised(error)),
        }
    }
}

impl<T> From<TryCatch<T>> for Result<T, CaughtError> {
    #[inline]
    fn from(try_catch: TryCatch<T>) -> Self {
        try_catch.into_result()
    }
}

impl<T> From<Maybe<T>> for TryCatch<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_try_catch()
    }
}

impl<T> From<Either<T>> for TryCatch<T> {
    #[inline]
    fn from(either: Either<T>) -> Self {
        either.into_try_catch()
    }
}

static_assertions::assert_impl_all!(TryCatch<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaughtErrorKind;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn from_producer_captures_error() {
        let result = TryCatch::<i32>::from_producer(|| Err("no input"));
        assert_eq!(result, TryCatch::Failed(CaughtError::raised("no input")));
    }

    #[rstest]
    fn from_producer_captures_panic() {
        let result = TryCatch::<i32>::from_producer(|| -> Result<i32, String> {
            panic!("producer exploded")
        });
        let error = result.error().expect("panic should be captured");
        assert_eq!(error.kind(), CaughtErrorKind::Panicked);
        assert_eq!(error.message(), "producer exploded");
    }

    #[rstest]
    fn map_on_failed_keeps_original_error() {
        let called = Cell::new(false);
        let original = CaughtError::raised("first");
        let result = TryCatch::<i32>::failed(original.clone()).map(|x| {
            called.set(true);
            x
        });
        assert_eq!(result, TryCatch::Failed(original));
        assert!(!called.get());
    }

    #[rstest]
    fn try_map_replaces_value_with_new_error() {
        let result = TryCatch::succeeded(10).try_map(|_| Err::<i32, _>("second"));
        assert_eq!(result.error().map(CaughtError::message), Some("second"));
    }

    #[rstest]
    fn fold_skips_missing_callbacks() {
        TryCatch::succeeded(1).fold(None::<fn(CaughtError)>, None::<fn(i32)>);
        TryCatch::<i32>::failed(CaughtError::missing_value())
            .fold(None::<fn(CaughtError)>, None::<fn(i32)>);
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: TryCatch<i32> = Ok::<_, String>(3).into();
        assert_eq!(ok.into_result(), Ok(3));

        let err: TryCatch<i32> = Err::<i32, _>("bad").into();
        let result: Result<i32, CaughtError> = err.into();
        assert_eq!(result, Err(CaughtError::raised("bad")));
    }
}
