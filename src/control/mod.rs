//! The three wrapper types.
//!
//! - [`Maybe`]: a value that may be absent; folds into one of two callbacks
//! - [`Either`]: a value or nothing, always folded against a caller default
//! - [`TryCatch`]: a value or the error that prevented it; `map` captures
//!   failures instead of letting them escape
//!
//! Each wrapper converts into the other two by handing over its current
//! payload. The conversions are lossy: a failed `TryCatch` becomes
//! `Absent`/`Empty`, and converting back yields the generic missing-value
//! error rather than the original one.
//!
//! # Examples
//!
//! ```rust
//! use spice::control::TryCatch;
//! use spice::error::CaughtErrorKind;
//!
//! let roundtrip = TryCatch::from_option(Some(7)).into_maybe().into_try_catch();
//! assert_eq!(roundtrip, TryCatch::Succeeded(7));
//!
//! let failed = TryCatch::<i32>::from_producer(|| Err("lost"));
//! let back = failed.into_maybe().into_try_catch();
//! assert_eq!(back.error().map(|e| e.kind()), Some(CaughtErrorKind::MissingValue));
//! ```

mod either;
mod maybe;
mod try_catch;

pub use either::Either;
pub use maybe::Maybe;
pub use try_catch::TryCatch;
