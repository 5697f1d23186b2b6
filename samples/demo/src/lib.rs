//! Demo pipelines for the spice wrapper types.
//!
//! Each function builds a small pipeline and folds it into the line the
//! demo binary prints.

use spice::control::{Maybe, TryCatch};

/// The value every demo pipeline starts from.
pub const DEMO_VALUE: &str = "Demo";

/// Starting point of the `Maybe` pipeline.
pub fn demo_maybe() -> Maybe<String> {
    Maybe::from_option(Some(DEMO_VALUE.to_string()))
}

/// Starting point of the `TryCatch` pipeline.
pub fn demo_try_catch() -> TryCatch<String> {
    TryCatch::from_option(Some(DEMO_VALUE.to_string()))
}

/// Reverses a string by characters.
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Upper-cases and reverses the demo value, then describes the outcome.
pub fn maybe_report(start: Maybe<String>) -> String {
    let mut report = String::from("Null value!!!");
    start
        .map(|value| value.to_uppercase())
        .map(|value| reverse(&value))
        .fold(
            None::<fn()>,
            Some(|value: String| report = format!("The maybe result is: {value}")),
        );
    report
}

/// Runs a transform that fails, then describes the captured error.
pub fn try_catch_report(start: TryCatch<String>) -> String {
    start
        .try_map(|_| Err::<String, _>("borked"))
        .fold_into(
            |error| format!("The trycatch error is: {error}"),
            |value| format!("The trycatch value is: {value}"),
        )
}
