//! Maybe type - a value that may or may not be present.
//!
//! `Maybe<T>` is either `Absent` or `Present(T)`. A missing input given to
//! [`Maybe::from_option`] collapses straight into `Absent`, and a partial
//! transform that produces nothing collapses the result the same way.
//!
//! # Examples
//!
//! ```rust
//! use spice::control::Maybe;
//!
//! let shouted = Maybe::from_option(Some("demo"))
//!     .map(|value| value.to_uppercase())
//!     .map(|value| value.chars().rev().collect::<String>());
//!
//! let mut seen = None;
//! shouted.fold(
//!     Some(|| println!("Null value!!!")),
//!     Some(|value: String| seen = Some(value)),
//! );
//! assert_eq!(seen.as_deref(), Some("OMED"));
//! ```

use super::either::Either;
use super::try_catch::TryCatch;

/// A value that may be absent.
///
/// Unlike `Option`, folding a `Maybe` dispatches to one of two independent,
/// individually optional callbacks. Panics raised by transforms passed to
/// [`map`](Maybe::map) are not caught.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use spice::control::Maybe;
///
/// let present = Maybe::present(21);
/// assert_eq!(present.map(|x| x * 2), Maybe::Present(42));
///
/// let absent: Maybe<i32> = Maybe::absent();
/// assert_eq!(absent.map(|x| x * 2), Maybe::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Absent,
    /// A value is present.
    Present(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` from an optional value.
    ///
    /// `Some(v)` becomes `Present(v)` and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::Present(1));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_option(source: Option<T>) -> Self {
        match source {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Creates a present `Maybe`.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent `Maybe`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the present value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Present(value) => Maybe::Present(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a transform to the present value.
    ///
    /// On `Absent` the transform is never invoked. A panic raised by the
    /// transform propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Maybe;
    ///
    /// let value = Maybe::present("hello");
    /// assert_eq!(value.map(str::len), Maybe::Present(5));
    /// ```
    #[inline]
    pub fn map<O, F>(self, transform: F) -> Maybe<O>
    where
        F: FnOnce(T) -> O,
    {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Present(value) => Maybe::Present(transform(value)),
        }
    }

    /// Applies a transform that may produce nothing.
    ///
    /// A `None` result collapses to `Absent`, exactly as if the value had
    /// never been present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Maybe;
    ///
    /// let parsed = Maybe::present("42").map_partial(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::Present(42));
    ///
    /// let rejected = Maybe::present("x").map_partial(|s| s.parse::<i32>().ok());
    /// assert_eq!(rejected, Maybe::Absent);
    /// ```
    #[inline]
    pub fn map_partial<O, F>(self, transform: F) -> Maybe<O>
    where
        F: FnOnce(T) -> Option<O>,
    {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Present(value) => Maybe::from_option(transform(value)),
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Dispatches to one of two optional callbacks.
    ///
    /// On `Absent`, `on_absent` runs if given. On `Present(v)`, `on_present`
    /// runs with `v` if given. A `None` callback is skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Maybe;
    ///
    /// let mut hits = Vec::new();
    /// Maybe::present(3).fold(None::<fn()>, Some(|x| hits.push(x)));
    /// Maybe::<i32>::absent().fold(None::<fn()>, Some(|x| hits.push(x)));
    /// assert_eq!(hits, vec![3]);
    /// ```
    pub fn fold<A, P>(self, on_absent: Option<A>, on_present: Option<P>)
    where
        A: FnOnce(),
        P: FnOnce(T),
    {
        match self {
            Self::Absent => {
                if let Some(callback) = on_absent {
                    callback();
                }
            }
            Self::Present(value) => {
                if let Some(callback) = on_present {
                    callback(value);
                }
            }
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Maybe;
    ///
    /// let label = Maybe::present(7).fold_into(|| "none".to_string(), |x| x.to_string());
    /// assert_eq!(label, "7");
    /// ```
    #[inline]
    pub fn fold_into<R, A, P>(self, on_absent: A, on_present: P) -> R
    where
        A: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Self::Absent => on_absent(),
            Self::Present(value) => on_present(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }

    /// Converts into a `TryCatch` holding the current payload.
    ///
    /// `Absent` becomes a `Failed` carrying the missing-value error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::{Maybe, TryCatch};
    ///
    /// assert_eq!(Maybe::present(1).into_try_catch(), TryCatch::Succeeded(1));
    /// assert!(Maybe::<i32>::absent().into_try_catch().is_failed());
    /// ```
    #[inline]
    pub fn into_try_catch(self) -> TryCatch<T> {
        TryCatch::from_option(self.into_option())
    }

    /// Converts into an `Either` holding the current payload.
    #[inline]
    pub fn into_either(self) -> Either<T> {
        Either::from_option(self.into_option())
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(source: Option<T>) -> Self {
        Self::from_option(source)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> From<Either<T>> for Maybe<T> {
    #[inline]
    fn from(either: Either<T>) -> Self {
        either.into_maybe()
    }
}

impl<T> From<TryCatch<T>> for Maybe<T> {
    #[inline]
    fn from(try_catch: TryCatch<T>) -> Self {
        try_catch.into_maybe()
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn from_option_collapses_none() {
        assert!(Maybe::<i32>::from_option(None).is_absent());
        assert!(Maybe::from_option(Some(0)).is_present());
    }

    #[rstest]
    fn map_skips_transform_on_absent() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::absent().map(|x| {
            called.set(true);
            x + 1
        });
        assert_eq!(result, Maybe::Absent);
        assert!(!called.get());
    }

    #[rstest]
    fn map_partial_collapses_missing_result() {
        let result = Maybe::present(5).map_partial(|_| None::<String>);
        assert_eq!(result, Maybe::Absent);
    }

    #[rstest]
    fn fold_runs_exactly_one_callback() {
        let absent_calls = Cell::new(0);
        let present_calls = Cell::new(0);

        Maybe::present(1).fold(
            Some(|| absent_calls.set(absent_calls.get() + 1)),
            Some(|_| present_calls.set(present_calls.get() + 1)),
        );
        Maybe::<i32>::absent().fold(
            Some(|| absent_calls.set(absent_calls.get() + 1)),
            Some(|_| present_calls.set(present_calls.get() + 1)),
        );

        assert_eq!(absent_calls.get(), 1);
        assert_eq!(present_calls.get(), 1);
    }

    #[rstest]
    fn fold_without_callbacks_is_a_no_op() {
        Maybe::present(1).fold(None::<fn()>, None::<fn(i32)>);
        Maybe::<i32>::absent().fold(None::<fn()>, None::<fn(i32)>);
    }

    #[rstest]
    fn as_ref_borrows() {
        let value = Maybe::present(String::from("kept"));
        assert_eq!(value.as_ref().map(String::len), Maybe::Present(4));
        assert_eq!(value, Maybe::Present(String::from("kept")));
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let option: Option<i32> = Maybe::present(9).into();
        assert_eq!(option, Some(9));
        assert_eq!(Maybe::from(option), Maybe::Present(9));
    }

    #[rstest]
    fn default_is_absent() {
        assert_eq!(Maybe::<String>::default(), Maybe::Absent);
    }
}
