//! Type class traits shared by the wrapper types.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: a uniform `fmap` over [`Maybe`](crate::control::Maybe),
//!   [`Either`](crate::control::Either) and [`TryCatch`](crate::control::TryCatch)
//!
//! # Examples
//!
//! ```rust
//! use spice::control::Maybe;
//! use spice::typeclass::Functor;
//!
//! let shouted = Maybe::present("demo").fmap(str::to_uppercase);
//! assert_eq!(shouted, Maybe::Present("DEMO".to_string()));
//! ```

mod functor;
mod higher;

pub use functor::Functor;
pub use higher::TypeConstructor;
