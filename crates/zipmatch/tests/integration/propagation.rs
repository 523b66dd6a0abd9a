//! Errors travelling through several layers of `try_get!`.

use thiserror::Error;
use zipmatch::{At, Error2, Error4, Inject, match_with, try_get, widen_error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("first failure")]
struct FirstFailure;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("second failure: {0}")]
struct SecondFailure(u32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage failure")]
struct StorageFailure;

#[derive(Debug, PartialEq, Eq, Error)]
enum AppError {
    #[error("internal: {0}")]
    Internal(&'static str),
}

impl From<FirstFailure> for AppError {
    fn from(_: FirstFailure) -> Self {
        AppError::Internal("first")
    }
}

fn fails_first() -> Result<i32, FirstFailure> {
    Err(FirstFailure)
}

fn fails_second(code: u32) -> Result<i32, SecondFailure> {
    if code == 0 { Ok(7) } else { Err(SecondFailure(code)) }
}

fn layer_one(code: u32) -> Result<i32, Error2<FirstFailure, SecondFailure>> {
    let value = try_get!(fails_second(code));
    Ok(value * 2)
}

type LayerTwoError = Error4<String, FirstFailure, SecondFailure, StorageFailure>;

fn layer_two(code: u32, fail_storage: bool) -> Result<i32, LayerTwoError> {
    let value = try_get!(layer_one(code));
    if fail_storage {
        return Err(Error4::inject(StorageFailure));
    }
    Ok(value + 1)
}

fn into_app(code: u32) -> Result<i32, AppError> {
    let value = if code == 0 { 7 } else { try_get!(fails_first()) };
    Ok(value)
}

#[test]
fn test_error_reaches_enclosing_union() {
    assert_eq!(layer_one(0), Ok(14));
    assert_eq!(layer_one(3), Err(Error2::Second(SecondFailure(3))));
}

#[test]
fn test_smaller_union_embeds_into_larger() {
    assert_eq!(layer_two(0, false), Ok(15));
    assert_eq!(layer_two(5, false), Err(Error4::Third(SecondFailure(5))));
    assert_eq!(layer_two(0, true), Err(Error4::Fourth(StorageFailure)));
}

#[test]
fn test_from_conversion_widens() {
    assert_eq!(into_app(0), Ok(7));
    let err = into_app(1).unwrap_err();
    assert_eq!(err, AppError::Internal("first"));
    assert_eq!(err.to_string(), "internal: first");
}

#[test]
fn test_widen_without_returning() {
    let widened: Result<i32, Error2<String, SecondFailure>> = widen_error(fails_second(9));
    assert_eq!(widened, Err(Error2::Second(SecondFailure(9))));
}

#[test]
fn test_duplicate_slots_pick_explicitly() {
    let err = <Error2<String, String> as Inject<String, At<1>>>::inject("right".to_string());
    let side = match_with(err, (|e: String| e,));
    assert_eq!(side, "right");
}
