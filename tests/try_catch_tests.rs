//! Unit tests for the TryCatch<T> type.
//!
//! TryCatch keeps failures as data:
//! - `Failed(CaughtError)`: an error, a panic, or a missing initial value
//! - `Succeeded(T)`: the produced value

use rstest::{fixture, rstest};
use spice::control::TryCatch;
use spice::error::{CaughtError, CaughtErrorKind};
use std::cell::Cell;
use std::error::Error;
use std::fmt;

// =============================================================================
// Test error types
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct QuotaExceeded {
    limit: u32,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "quota of {} exceeded", self.limit)
    }
}

impl Error for QuotaExceeded {}

#[fixture]
fn failed() -> TryCatch<i32> {
    TryCatch::from_producer(|| Err(QuotaExceeded { limit: 3 }))
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn from_option_none_manufactures_missing_value_error() {
    let result = TryCatch::<String>::from_option(None);
    let error = result.error().expect("missing input should fail");
    assert_eq!(error.kind(), CaughtErrorKind::MissingValue);
    assert_eq!(error.message(), "Initial value is missing.");
}

#[rstest]
fn from_producer_ok_succeeds() {
    assert_eq!(
        TryCatch::from_producer(|| Ok::<_, QuotaExceeded>(5)),
        TryCatch::Succeeded(5)
    );
}

#[rstest]
fn from_producer_err_wraps_original_error(failed: TryCatch<i32>) {
    let error = failed.error().expect("producer error should be captured");
    assert_eq!(error.kind(), CaughtErrorKind::Raised);
    assert_eq!(error.message(), "quota of 3 exceeded");

    let source = error.source().expect("raised errors keep their source");
    assert_eq!(
        source.downcast_ref::<QuotaExceeded>(),
        Some(&QuotaExceeded { limit: 3 })
    );
}

#[rstest]
fn from_producer_runs_producer_once() {
    let calls = Cell::new(0);
    let _ = TryCatch::from_producer(|| {
        calls.set(calls.get() + 1);
        Ok::<_, String>(())
    });
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn catching_captures_panic_with_owned_message() {
    let index = 10;
    let result = TryCatch::catching(|| -> i32 { panic!("index {index} out of range") });
    assert_eq!(
        result.error().map(CaughtError::message),
        Some("index 10 out of range")
    );
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn map_on_failed_never_invokes_transform(failed: TryCatch<i32>) {
    let invoked = Cell::new(false);
    let original = failed.clone();
    let result = failed
        .map(|x| {
            invoked.set(true);
            x + 1
        })
        .try_map(|x| {
            invoked.set(true);
            Ok::<_, String>(x)
        });
    assert!(!invoked.get());
    assert_eq!(result, original);
}

#[rstest]
fn map_panic_discards_value_and_keeps_new_error() {
    let result = TryCatch::succeeded(41).map(|_| -> i32 { panic!("borked") });
    assert_eq!(result.value(), None);
    let error = result.error().expect("panic should be captured");
    assert_eq!(error.kind(), CaughtErrorKind::Panicked);
    assert_eq!(error.message(), "borked");
}

#[rstest]
fn try_map_error_replaces_success() {
    let result = TryCatch::succeeded(2).try_map(|limit| Err::<i32, _>(QuotaExceeded { limit }));
    assert_eq!(
        result.error().map(CaughtError::message),
        Some("quota of 2 exceeded")
    );
}

#[rstest]
fn first_error_survives_later_maps() {
    let result = TryCatch::succeeded(1)
        .try_map(|_| Err::<i32, _>("first"))
        .try_map(|_| Err::<i32, _>("second"))
        .map(|x| x * 2);
    assert_eq!(result, TryCatch::Failed(CaughtError::raised("first")));
}

#[rstest]
fn map_transforms_success() {
    let result = TryCatch::succeeded("21").try_map(str::parse::<i32>).map(|x| x * 2);
    assert_eq!(result, TryCatch::Succeeded(42));
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_dispatches_error_to_error_callback(failed: TryCatch<i32>) {
    let message = Cell::new(None);
    failed.fold(
        Some(|error: CaughtError| message.set(Some(error.kind()))),
        Some(|_| panic!("success callback must not run")),
    );
    assert_eq!(message.get(), Some(CaughtErrorKind::Raised));
}

#[rstest]
fn fold_dispatches_value_to_success_callback() {
    let seen = Cell::new(0);
    TryCatch::succeeded(8).fold(
        Some(|_| panic!("error callback must not run")),
        Some(|x| seen.set(x)),
    );
    assert_eq!(seen.get(), 8);
}

#[rstest]
fn fold_with_missing_callbacks_is_silent(failed: TryCatch<i32>) {
    failed.fold(None::<fn(CaughtError)>, Some(|_: i32| panic!("not reached")));
    TryCatch::succeeded(1).fold(Some(|_: CaughtError| panic!("not reached")), None::<fn(i32)>);
}

#[rstest]
fn into_result_exposes_error(failed: TryCatch<i32>) {
    let error = failed.into_result().unwrap_err();
    assert_eq!(error.kind(), CaughtErrorKind::Raised);
}
