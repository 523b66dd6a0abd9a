//! Extraction: propagate, fall back, or remap the error.
//!
//! - [`try_get!`](crate::try_get) yields the success value or returns early
//!   from the enclosing function with the error widened into that function's
//!   error type.
//! - [`const_try!`](crate::const_try) is the `const fn` form: it returns the
//!   error unchanged, since no conversion can run there.
//!   [`const_unwrap!`](crate::const_unwrap) takes the value when building a
//!   `const` item, where a failure is a compile error.
//! - [`try_get_or`] falls back to a default; [`map_error`] rewrites the error.
//!
//! Widening goes through [`Widen`], which picks one of three conversions at
//! compile time:
//!
//! | source `E` | target `U` | marker |
//! |---|---|---|
//! | anything | `U: From<E>` (includes `U == E`) | [`Convert`] |
//! | a slot type of the union `U` | `ErrorN<.., E, ..>` | [`Inj`] |
//! | `ErrorN` | a wider `ErrorM` holding every slot of `E` | [`Embed`] |
//!
//! If more than one applies (for example `E` fills two slots of `U`), the
//! call is ambiguous and does not compile; convert explicitly with
//! [`Inject`] and a named position instead.
//!
//! Embedding only targets strictly wider unions. A union of the same arity
//! with its slots reordered (`Error2<A, B>` into `Error2<B, A>`) is not a
//! widening; map it explicitly with [`map_error`]. Same-arity embedding would
//! overlap [`Convert`] when source and target are the same union.
//!
//! ```compile_fail
//! use zipmatch::{Error2, widen_error};
//!
//! let r: Result<(), Error2<u8, char>> = Err(Error2::First(1));
//! let swapped: Result<(), Error2<char, u8>> = widen_error(r);
//! ```

use std::marker::PhantomData;

use crate::union::{Error2, Error3, Error4, Error5, Error6, Inject};

/// Widening through `From`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Convert;

/// Widening by injection into the union slot at position `I`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inj<I>(PhantomData<I>);

/// Widening of a union into a wider one; `I` lists the target slot of each
/// source alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Embed<I>(PhantomData<I>);

/// Conversion of an error into an enclosing error type.
///
/// `Via` is inferred and never named by callers.
pub trait Widen<U, Via> {
    /// Converts `self` into `U`.
    fn widen(self) -> U;
}

impl<E, U> Widen<U, Convert> for E
where
    U: From<E>,
{
    fn widen(self) -> U {
        U::from(self)
    }
}

impl<E, U, I> Widen<U, Inj<I>> for E
where
    U: Inject<E, I>,
{
    fn widen(self) -> U {
        U::inject(self)
    }
}

macro_rules! embed_impl {
    ($src:ident { $($variant:ident($p:ident, $i:ident)),+ } => [$($x:ident),+] $target:ty) => {
        impl<$($p,)+ $($x,)+ $($i),+> Widen<$target, Embed<($($i,)+)>> for $src<$($p),+>
        where
            $($target: Inject<$p, $i>,)+
        {
            fn widen(self) -> $target {
                tracing::trace!(from = stringify!($src), "embedding union into a wider union");
                match self {
                    $( $src::$variant(value) => <$target as Inject<$p, $i>>::inject(value), )+
                }
            }
        }
    };
}

embed_impl!(Error2 { First(A, IA), Second(B, IB) }
    => [X0, X1, X2] Error3<X0, X1, X2>);
embed_impl!(Error2 { First(A, IA), Second(B, IB) }
    => [X0, X1, X2, X3] Error4<X0, X1, X2, X3>);
embed_impl!(Error2 { First(A, IA), Second(B, IB) }
    => [X0, X1, X2, X3, X4] Error5<X0, X1, X2, X3, X4>);
embed_impl!(Error2 { First(A, IA), Second(B, IB) }
    => [X0, X1, X2, X3, X4, X5] Error6<X0, X1, X2, X3, X4, X5>);

embed_impl!(Error3 { First(A, IA), Second(B, IB), Third(C, IC) }
    => [X0, X1, X2, X3] Error4<X0, X1, X2, X3>);
embed_impl!(Error3 { First(A, IA), Second(B, IB), Third(C, IC) }
    => [X0, X1, X2, X3, X4] Error5<X0, X1, X2, X3, X4>);
embed_impl!(Error3 { First(A, IA), Second(B, IB), Third(C, IC) }
    => [X0, X1, X2, X3, X4, X5] Error6<X0, X1, X2, X3, X4, X5>);

embed_impl!(Error4 { First(A, IA), Second(B, IB), Third(C, IC), Fourth(D, ID) }
    => [X0, X1, X2, X3, X4] Error5<X0, X1, X2, X3, X4>);
embed_impl!(Error4 { First(A, IA), Second(B, IB), Third(C, IC), Fourth(D, ID) }
    => [X0, X1, X2, X3, X4, X5] Error6<X0, X1, X2, X3, X4, X5>);

embed_impl!(Error5 { First(A, IA), Second(B, IB), Third(C, IC), Fourth(D, ID), Fifth(E, IE) }
    => [X0, X1, X2, X3, X4, X5] Error6<X0, X1, X2, X3, X4, X5>);

/// Extracts the success value, or returns early with the widened error.
///
/// Must be used inside a function or closure returning `Result<_, U>` where
/// the error of `expr` widens into `U` (see [`Widen`]). Anything else is a
/// type error.
///
/// # Examples
///
/// ```
/// use zipmatch::{try_get, Error2};
///
/// #[derive(Debug, PartialEq)]
/// struct DivByZero;
/// #[derive(Debug, PartialEq)]
/// struct Negative;
///
/// fn div(x: f64, y: f64) -> Result<f64, DivByZero> {
///     if y == 0.0 { Err(DivByZero) } else { Ok(x / y) }
/// }
///
/// fn sqrt(x: f64) -> Result<f64, Negative> {
///     if x < 0.0 { Err(Negative) } else { Ok(x.sqrt()) }
/// }
///
/// fn op(x: f64, y: f64) -> Result<f64, Error2<DivByZero, Negative>> {
///     let ratio = try_get!(div(x, y));
///     let root = try_get!(sqrt(ratio));
///     Ok(root)
/// }
///
/// assert_eq!(op(8.0, 2.0), Ok(2.0));
/// assert_eq!(op(1.0, 0.0), Err(Error2::First(DivByZero)));
/// assert_eq!(op(-1.0, 1.0), Err(Error2::Second(Negative)));
/// ```
///
/// An error with no route into the enclosing error type does not compile:
///
/// ```compile_fail
/// use zipmatch::{try_get, Error2};
///
/// #[derive(Debug)]
/// struct Unrelated;
///
/// fn source() -> Result<u8, Unrelated> {
///     Err(Unrelated)
/// }
///
/// fn run() -> Result<u8, Error2<String, char>> {
///     let v = try_get!(source());
///     Ok(v)
/// }
/// ```
#[macro_export]
macro_rules! try_get {
    ($expr:expr $(,)?) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return ::core::result::Result::Err($crate::Widen::widen(error));
            }
        }
    };
}

/// Extracts the success value inside a `const fn`, or returns the error.
///
/// The `const fn` counterpart of [`try_get!`](crate::try_get). Trait methods
/// cannot run in constant evaluation, so the error is returned as is: the
/// enclosing function must have the same error type. Called at runtime, a
/// failure propagates exactly like `try_get!`.
///
/// ```
/// use zipmatch::const_try;
///
/// const fn half(n: u8) -> Result<u8, u8> {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(n) }
/// }
///
/// const fn quarter(n: u8) -> Result<u8, u8> {
///     let h = const_try!(half(n));
///     half(h)
/// }
///
/// assert_eq!(quarter(8), Ok(2));
/// assert_eq!(quarter(6), Err(3));
/// assert_eq!(quarter(7), Err(7));
/// ```
#[macro_export]
macro_rules! const_try {
    ($expr:expr $(,)?) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return ::core::result::Result::Err(error);
            }
        }
    };
}

/// Takes the success value while building a `const` item.
///
/// An error panics, and a panic during constant evaluation is a compile
/// error. The error type must have no drop glue. Use it at the `const` item
/// boundary, not inside functions called at runtime.
///
/// ```
/// use zipmatch::const_unwrap;
///
/// const fn half(n: u8) -> Result<u8, ()> {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(()) }
/// }
///
/// const HALF: u8 = const_unwrap!(half(8));
/// assert_eq!(HALF, 4);
/// ```
///
/// A failing extraction in a constant does not compile:
///
/// ```compile_fail
/// use zipmatch::const_unwrap;
///
/// const fn half(n: u8) -> Result<u8, ()> {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(()) }
/// }
///
/// const HALF: u8 = const_unwrap!(half(3));
///
/// fn main() {
///     let _ = HALF;
/// }
/// ```
#[macro_export]
macro_rules! const_unwrap {
    ($expr:expr $(,)?) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(_) => {
                ::core::panic!("const_unwrap!: constant evaluation produced an error")
            }
        }
    };
}

/// Returns the success value, or `default` if `result` holds an error.
///
/// ```
/// use zipmatch::try_get_or;
///
/// assert_eq!(try_get_or(Ok::<i32, ()>(5), -1), 5);
/// assert_eq!(try_get_or(Err::<i32, _>("nope"), -1), -1);
/// ```
pub fn try_get_or<T, E>(result: Result<T, E>, default: T) -> T {
    result.unwrap_or(default)
}

/// Applies `f` to the error; successes pass through untouched.
pub fn map_error<T, E1, E2, F>(result: Result<T, E1>, f: F) -> Result<T, E2>
where
    F: FnOnce(E1) -> E2,
{
    result.map_err(f)
}

/// Widens the error of `result` the way [`try_get!`](crate::try_get) would,
/// without returning early.
pub fn widen_error<T, E, U, Via>(result: Result<T, E>) -> Result<T, U>
where
    E: Widen<U, Via>,
{
    result.map_err(Widen::widen)
}
