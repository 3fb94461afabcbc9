#![cfg(feature = "serde")]
//! Serialization tests for `Maybe<T>`.
//!
//! `Maybe` uses the same representation as `Option`: `Some(value)` is the
//! value itself and `None` is `null`.

use lazy_stream::control::Maybe;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Maybe<String>,
}

#[rstest]
fn serialize_some_as_value() {
    let json = serde_json::to_string(&Maybe::some(5)).unwrap();
    assert_eq!(json, "5");
}

#[rstest]
fn serialize_none_as_null() {
    let json = serde_json::to_string(&Maybe::<i32>::none()).unwrap();
    assert_eq!(json, "null");
}

#[rstest]
#[case("{\"name\":\"ada\",\"nickname\":\"countess\"}", Maybe::some("countess".to_string()))]
#[case("{\"name\":\"ada\",\"nickname\":null}", Maybe::none())]
fn deserialize_field(#[case] json: &str, #[case] nickname: Maybe<String>) {
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(
        profile,
        Profile {
            name: "ada".to_string(),
            nickname,
        }
    );
}

#[rstest]
fn nested_maybe_matches_option_encoding() {
    let nested: Maybe<Vec<Maybe<i32>>> = Maybe::some(vec![Maybe::some(1), Maybe::none()]);
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[1,null]");

    let decoded: Maybe<Vec<Maybe<i32>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, nested);
}
