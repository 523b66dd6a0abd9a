//! First-failure combination of independent results.
//!
//! [`zip`] and [`zip_any`] take a function and a tuple of one to six results.
//! If every input is `Ok`, the function is called with the success values in
//! order and its return value becomes the `Ok` of the combined result. If any
//! input is `Err`, the function is not called and the error of the
//! lowest-index failing input becomes the combined error; later failures are
//! dropped. This is first-failure selection, not aggregation.
//!
//! The two entry points differ only in the combined error type:
//!
//! - [`zip`] requires every input to share one error type `E` and returns it
//!   unchanged ([`Deduced`]).
//! - [`zip_any`] accepts differing error types and returns the positional
//!   union `ErrorN<E1, ..., En>` ([`PositionalError`]), placing the failure in
//!   the slot of its input position even when two positions share a type.
//!
//! The function's own return type is carried through as is. A function
//! returning `()` yields `Ok(())`.

use crate::deduce::{Deduced, PositionalError, Uniform};
use crate::union::{Error2, Error3, Error4, Error5, Error6};

/// A tuple of results that can be zipped with a function of uniform error.
pub trait Zip<F> {
    /// `Result<ReturnOf<F>, E>`.
    type Output;

    /// Calls `f` with every success value, or returns the first error.
    fn zip_with(self, f: F) -> Self::Output;
}

/// A tuple of results that can be zipped into a positional error union.
pub trait ZipAny<F> {
    /// `Result<ReturnOf<F>, ErrorN<E1, ..., En>>`.
    type Output;

    /// Calls `f` with every success value, or returns the first error in its
    /// positional slot.
    fn zip_any_with(self, f: F) -> Self::Output;
}

#[inline]
fn short_circuit(position: usize, arity: usize) {
    tracing::trace!(position, arity, "zip short-circuited on first failing input");
}

impl<F, R, T0, E0> ZipAny<F> for (Result<T0, E0>,)
where
    F: FnOnce(T0) -> R,
{
    type Output = Result<R, PositionalError<(E0,)>>;

    fn zip_any_with(self, f: F) -> Self::Output {
        match self.0 {
            Ok(t0) => Ok(f(t0)),
            Err(error) => {
                short_circuit(0, 1);
                Err(error)
            }
        }
    }
}

macro_rules! zip_impls {
    ($arity:literal $union:ident { $( $idx:tt: $t:ident $e:ident $r:ident $v:ident => $variant:ident ),+ }) => {
        impl<F, R, $($t, $e),+> ZipAny<F> for ($(Result<$t, $e>,)+)
        where
            F: FnOnce($($t),+) -> R,
        {
            type Output = Result<R, PositionalError<($($e,)+)>>;

            fn zip_any_with(self, f: F) -> Self::Output {
                let ($($r,)+) = self;
                $(
                    let $v = match $r {
                        Ok(value) => value,
                        Err(error) => {
                            short_circuit($idx, $arity);
                            return Err($union::$variant(error));
                        }
                    };
                )+
                Ok(f($($v),+))
            }
        }
    };
}

zip_impls!(2 Error2 {
    0: T0 E0 r0 v0 => First,
    1: T1 E1 r1 v1 => Second
});
zip_impls!(3 Error3 {
    0: T0 E0 r0 v0 => First,
    1: T1 E1 r1 v1 => Second,
    2: T2 E2 r2 v2 => Third
});
zip_impls!(4 Error4 {
    0: T0 E0 r0 v0 => First,
    1: T1 E1 r1 v1 => Second,
    2: T2 E2 r2 v2 => Third,
    3: T3 E3 r3 v3 => Fourth
});
zip_impls!(5 Error5 {
    0: T0 E0 r0 v0 => First,
    1: T1 E1 r1 v1 => Second,
    2: T2 E2 r2 v2 => Third,
    3: T3 E3 r3 v3 => Fourth,
    4: T4 E4 r4 v4 => Fifth
});
zip_impls!(6 Error6 {
    0: T0 E0 r0 v0 => First,
    1: T1 E1 r1 v1 => Second,
    2: T2 E2 r2 v2 => Third,
    3: T3 E3 r3 v3 => Fourth,
    4: T4 E4 r4 v4 => Fifth,
    5: T5 E5 r5 v5 => Sixth
});

macro_rules! uniform_zip_impls {
    ($( ($($t:ident $e:ident),+) )+) => {
        $(
            impl<F, R, $($t, $e),+> Zip<F> for ($(Result<$t, $e>,)+)
            where
                F: FnOnce($($t),+) -> R,
                ($($e,)+): Uniform,
                Self: ZipAny<F, Output = Result<R, PositionalError<($($e,)+)>>>,
            {
                type Output = Result<R, Deduced<($($e,)+)>>;

                fn zip_with(self, f: F) -> Self::Output {
                    self.zip_any_with(f)
                        .map_err(<($($e,)+) as Uniform>::unify)
                }
            }
        )+
    };
}

uniform_zip_impls! {
    (T0 E0)
    (T0 E0, T1 E1)
    (T0 E0, T1 E1, T2 E2)
    (T0 E0, T1 E1, T2 E2, T3 E3)
    (T0 E0, T1 E1, T2 E2, T3 E3, T4 E4)
    (T0 E0, T1 E1, T2 E2, T3 E3, T4 E4, T5 E5)
}

/// Combines results that share one error type.
///
/// `results` is a tuple of one to six `Result<Ti, E>`. Returns
/// `Ok(f(t1, ..., tn))` if all are `Ok`, else the first error.
///
/// # Examples
///
/// ```
/// use zipmatch::zip;
///
/// let add = |a: i32, b: i32, c: i32| a + b + c;
/// assert_eq!(zip(add, (Ok::<_, &str>(2), Ok(3), Ok(4))), Ok(9));
/// assert_eq!(zip(add, (Ok(2), Err("b"), Ok(4))), Err("b"));
/// assert_eq!(zip(add, (Err("a"), Err("b"), Ok(4))), Err("a"));
/// ```
///
/// Differing error types are rejected; use [`zip_any`] for those:
///
/// ```compile_fail
/// use zipmatch::zip;
///
/// let a: Result<i32, String> = Ok(1);
/// let b: Result<i32, u8> = Ok(2);
/// let sum = zip(|x: i32, y: i32| x + y, (a, b));
/// ```
pub fn zip<Rs, F>(f: F, results: Rs) -> <Rs as Zip<F>>::Output
where
    Rs: Zip<F>,
{
    results.zip_with(f)
}

/// Combines results with differing error types into a positional union.
///
/// # Examples
///
/// ```
/// use zipmatch::{zip_any, Error2};
///
/// let width: Result<u32, std::num::ParseIntError> = "80".parse();
/// let unit: Result<char, &str> = Err("no unit");
///
/// let combined = zip_any(|w: u32, u: char| format!("{w}{u}"), (width, unit));
/// assert_eq!(combined, Err(Error2::Second("no unit")));
/// ```
pub fn zip_any<Rs, F>(f: F, results: Rs) -> <Rs as ZipAny<F>>::Output
where
    Rs: ZipAny<F>,
{
    results.zip_any_with(f)
}

/// `zip!(f, r1, ..., rn)` is `zip(f, (r1, ..., rn))`.
///
/// ```
/// let total = zipmatch::zip!(|a: u8, b: u8| a + b, Ok::<u8, ()>(1), Ok(2));
/// assert_eq!(total, Ok(3));
/// ```
#[macro_export]
macro_rules! zip {
    ($f:expr, $($result:expr),+ $(,)?) => {
        $crate::zip($f, ($($result,)+))
    };
}

/// `zip_any!(f, r1, ..., rn)` is `zip_any(f, (r1, ..., rn))`.
#[macro_export]
macro_rules! zip_any {
    ($f:expr, $($result:expr),+ $(,)?) => {
        $crate::zip_any($f, ($($result,)+))
    };
}
