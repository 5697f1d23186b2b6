#![cfg(feature = "serde")]

//! Integration tests for serde support in spice.

use rstest::rstest;
use spice::control::{Either, Maybe};

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<String> = Maybe::present("value".to_string());
    let absent: Maybe<String> = Maybe::absent();

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    let restored_present: Maybe<String> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Maybe<String> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
fn test_either_json_shape() {
    let holding: Either<i32> = Either::holding(42);
    assert_eq!(serde_json::to_string(&holding).unwrap(), r#"{"Holding":42}"#);
    assert_eq!(serde_json::to_string(&Either::<i32>::empty()).unwrap(), r#""Empty""#);
}

#[rstest]
fn test_either_json_roundtrip() {
    let holding: Either<Vec<u8>> = Either::holding(vec![1, 2, 3]);
    let json = serde_json::to_string(&holding).unwrap();
    let restored: Either<Vec<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(holding, restored);
}
