//! Functor type class - mapping over wrapper values.
//!
//! [`Functor`] gives the three wrappers one shared `fmap`, so code can be
//! written once against any of them. Each impl keeps the semantics of the
//! wrapper's own `map`: `Maybe` and `Either` let panics propagate, while
//! `TryCatch` captures them into `Failed`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use spice::control::{Either, Maybe, TryCatch};
//! use spice::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(wrapper: F) -> F::WithType<String> {
//!     wrapper.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::present(1)), Maybe::Present("#1".to_string()));
//! assert_eq!(describe(Either::<i32>::empty()), Either::Empty);
//! assert_eq!(describe(TryCatch::succeeded(2)), TryCatch::Succeeded("#2".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Either, Maybe, TryCatch};

/// A type class for wrappers that can have a function mapped over their contents.
///
/// # Laws
///
/// Implementations must satisfy the identity and composition laws described
/// in the [module documentation](self). For `TryCatch` the laws hold for
/// transforms that do not panic.
pub trait Functor: TypeConstructor {
    /// Applies a function to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Maybe;
    /// use spice::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).fmap(|n| n * 2), Maybe::Present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the wrapped value.
    ///
    /// The wrapper itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spice::control::Either;
    /// use spice::typeclass::Functor;
    ///
    /// let name = Either::holding("spice".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Either::Holding(5));
    /// assert!(name.is_holding());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the wrapped value with a constant.
    ///
    /// Equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the wrapped value, keeping only the variant.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Either<A> Implementation
// =============================================================================

impl<A> Functor for Either<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// TryCatch<A> Implementation
// =============================================================================

impl<A> Functor for TryCatch<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> TryCatch<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> TryCatch<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Failed(error) => TryCatch::Failed(error.clone()),
            Self::Succeeded(value) => TryCatch::succeeded(value).map(function),
        }
    }
}
