//! # spice
//!
//! Small algebraic wrapper types with a uniform `map`/`fold` interface.
//!
//! ## Overview
//!
//! - [`Maybe`](control::Maybe): `Absent` or `Present(T)`. `fold` calls one of
//!   two independent callbacks.
//! - [`Either`](control::Either): `Empty` or `Holding(T)`. `fold` always calls
//!   a single success callback, with the held value or a caller default.
//! - [`TryCatch`](control::TryCatch): `Failed(CaughtError)` or
//!   `Succeeded(T)`. `map` captures errors and panics as data.
//!
//! Every wrapper is immutable: `map` and the conversions build new values.
//! All operations run synchronously on the caller's thread.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `TypeConstructor` and `Functor` for the wrappers
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Either`
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Captured failures and rejected `Either` folds are reported as `tracing`
//! events at `DEBUG` level. Install a subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use spice::prelude::*;
//!
//! let reversed = Maybe::from_option(Some("demo"))
//!     .map(|s| s.to_uppercase())
//!     .map(|s| s.chars().rev().collect::<String>());
//! assert_eq!(reversed, Maybe::Present("OMED".to_string()));
//!
//! let borked = TryCatch::from_option(Some("demo")).map(|_| -> String { panic!("borked") });
//! assert_eq!(borked.error().map(CaughtError::message), Some("borked"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use spice::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;
pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;
