//! A checked `sqrt(ln(x / y))` pipeline with one error type per step.

use thiserror::Error;
use zipmatch::{Error3, match_outcome, try_get, try_get_or};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero")]
struct DivisionByZero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("logarithm of a non-positive number")]
struct NonPositiveLogarithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square root of a negative number")]
struct NegativeSquareRoot;

type MathError = Error3<DivisionByZero, NonPositiveLogarithm, NegativeSquareRoot>;

fn div(x: f64, y: f64) -> Result<f64, DivisionByZero> {
    if y == 0.0 { Err(DivisionByZero) } else { Ok(x / y) }
}

fn ln(x: f64) -> Result<f64, NonPositiveLogarithm> {
    if x <= 0.0 {
        Err(NonPositiveLogarithm)
    } else {
        Ok(x.ln())
    }
}

fn sqrt(x: f64) -> Result<f64, NegativeSquareRoot> {
    if x < 0.0 {
        Err(NegativeSquareRoot)
    } else {
        Ok(x.sqrt())
    }
}

fn op(x: f64, y: f64) -> Result<f64, MathError> {
    let ratio = try_get!(div(x, y));
    let ln = try_get!(ln(ratio));
    Ok(try_get!(sqrt(ln)))
}

fn report(x: f64, y: f64) -> String {
    match_outcome!(
        op(x, y),
        |value: f64| format!("{value:.4}"),
        |e: DivisionByZero| e.to_string(),
        |e: NonPositiveLogarithm| e.to_string(),
        |e: NegativeSquareRoot| e.to_string(),
    )
}

#[test]
fn test_success() {
    assert_eq!(report(10.0, 1.0), "1.5174");
}

#[test]
fn test_each_step_reports_its_own_error() {
    assert_eq!(op(1.0, 0.0), Err(Error3::First(DivisionByZero)));
    assert_eq!(op(0.0, 1.0), Err(Error3::Second(NonPositiveLogarithm)));
    assert_eq!(op(1.0, 10.0), Err(Error3::Third(NegativeSquareRoot)));
}

#[test]
fn test_report_uses_error_display() {
    assert_eq!(report(1.0, 10.0), "square root of a negative number");
    assert_eq!(report(1.0, 0.0), "division by zero");
}

#[test]
fn test_default_on_failure() {
    assert_eq!(try_get_or(sqrt(-4.0), -5.1), -5.1);
    assert_eq!(try_get_or(sqrt(4.0), -5.1), 2.0);
}
