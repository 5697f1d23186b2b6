//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `TryCatch<_>` as type
//! constructors directly. [`TypeConstructor`] uses a GAT to name "the same
//! wrapper applied to another type", which is what [`Functor`](super::Functor)
//! needs to describe `fmap`.
//!
//! # Example
//!
//! ```rust
//! use spice::control::Maybe;
//! use spice::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = emptied(Maybe::present(42));
//! assert_eq!(absent, Maybe::Absent);
//! ```

use crate::control::{Either, Maybe, TryCatch};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> TypeConstructor for Either<A> {
    type Inner = A;
    type WithType<B> = Either<B>;
}

impl<A> TypeConstructor for TryCatch<A> {
    type Inner = A;
    type WithType<B> = TryCatch<B>;
}
