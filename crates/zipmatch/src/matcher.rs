//! Exhaustive, flattening dispatch over outcomes.
//!
//! [`match_with`] takes an outcome and a tuple of handlers, one per leaf type.
//! When the held alternative is itself a `Result` or a positional union, the
//! dispatcher descends into it with the same handlers until it reaches a leaf,
//! then calls the single handler whose parameter type is that leaf's type.
//!
//! Handler selection happens during type checking. The path through nested
//! unions is encoded in an index type (`Leaf<At<k>>` for a leaf handled by the
//! `k`-th handler, a tuple of child indices for a union) that the compiler
//! infers. A leaf with no handler, or with more than one, leaves the index
//! unresolvable and the call does not compile.
//!
//! Matching by reference works the same way with handlers over `&T`, and
//! leaves the outcome untouched.

use std::marker::PhantomData;

use crate::tagged::At;
use crate::union::{Error2, Error3, Error4, Error5, Error6};

/// Index marker for a value dispatched directly to a handler.
///
/// `I` is the handler's position, e.g. `Leaf<At<2>>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Leaf<I>(PhantomData<I>);

/// A handler set able to consume a `T`, producing `R`.
///
/// Implemented for tuples of one to ten `FnOnce` handlers; `I` is the
/// position of the handler that accepts `T`.
pub trait Handle<T, R, I> {
    /// Calls the selected handler.
    fn handle(self, value: T) -> R;
}

/// An outcome (or leaf value) that can be dispatched to `H`.
///
/// `I` is the inferred dispatch path; callers never name it.
pub trait Dispatch<H, R, I> {
    /// Routes `self` to the matching handler.
    fn dispatch(self, handlers: H) -> R;
}

impl<T, H, R, I> Dispatch<H, R, Leaf<I>> for T
where
    H: Handle<T, R, I>,
{
    fn dispatch(self, handlers: H) -> R {
        handlers.handle(self)
    }
}

impl<T, E, H, R, IT, IE> Dispatch<H, R, (IT, IE)> for Result<T, E>
where
    T: Dispatch<H, R, IT>,
    E: Dispatch<H, R, IE>,
{
    fn dispatch(self, handlers: H) -> R {
        match self {
            Ok(value) => value.dispatch(handlers),
            Err(error) => error.dispatch(handlers),
        }
    }
}

impl<'a, T, E, H, R, IT, IE> Dispatch<H, R, (IT, IE)> for &'a Result<T, E>
where
    &'a T: Dispatch<H, R, IT>,
    &'a E: Dispatch<H, R, IE>,
{
    fn dispatch(self, handlers: H) -> R {
        match self {
            Ok(value) => value.dispatch(handlers),
            Err(error) => error.dispatch(handlers),
        }
    }
}

macro_rules! union_dispatch {
    ($union:ident { $($variant:ident($p:ident, $i:ident)),+ }) => {
        impl<$($p,)+ H, R, $($i),+> Dispatch<H, R, ($($i,)+)> for $union<$($p),+>
        where
            $($p: Dispatch<H, R, $i>,)+
        {
            fn dispatch(self, handlers: H) -> R {
                match self {
                    $( $union::$variant(value) => value.dispatch(handlers), )+
                }
            }
        }

        impl<'a, $($p,)+ H, R, $($i),+> Dispatch<H, R, ($($i,)+)> for &'a $union<$($p),+>
        where
            $(&'a $p: Dispatch<H, R, $i>,)+
        {
            fn dispatch(self, handlers: H) -> R {
                match self {
                    $( $union::$variant(value) => value.dispatch(handlers), )+
                }
            }
        }
    };
}

union_dispatch!(Error2 { First(A, IA), Second(B, IB) });
union_dispatch!(Error3 { First(A, IA), Second(B, IB), Third(C, IC) });
union_dispatch!(Error4 { First(A, IA), Second(B, IB), Third(C, IC), Fourth(D, ID) });
union_dispatch!(Error5 {
    First(A, IA),
    Second(B, IB),
    Third(C, IC),
    Fourth(D, ID),
    Fifth(E, IE)
});
union_dispatch!(Error6 {
    First(A, IA),
    Second(B, IB),
    Third(C, IC),
    Fourth(D, ID),
    Fifth(E, IE),
    Sixth(F, IF)
});

macro_rules! handle_impls {
    ($handlers:tt => $([$idx:tt $f:ident])+) => {
        $( handle_impls!(@at $handlers $idx $f); )+
    };

    (@at ($($g:ident),+) $idx:tt $f:ident) => {
        impl<T, R, $($g),+> Handle<T, R, At<$idx>> for ($($g,)+)
        where
            $f: FnOnce(T) -> R,
        {
            fn handle(self, value: T) -> R {
                (self.$idx)(value)
            }
        }
    };
}

handle_impls!((F0) => [0 F0]);
handle_impls!((F0, F1) => [0 F0] [1 F1]);
handle_impls!((F0, F1, F2) => [0 F0] [1 F1] [2 F2]);
handle_impls!((F0, F1, F2, F3) => [0 F0] [1 F1] [2 F2] [3 F3]);
handle_impls!((F0, F1, F2, F3, F4) => [0 F0] [1 F1] [2 F2] [3 F3] [4 F4]);
handle_impls!((F0, F1, F2, F3, F4, F5) => [0 F0] [1 F1] [2 F2] [3 F3] [4 F4] [5 F5]);
handle_impls!((F0, F1, F2, F3, F4, F5, F6) =>
    [0 F0] [1 F1] [2 F2] [3 F3] [4 F4] [5 F5] [6 F6]);
handle_impls!((F0, F1, F2, F3, F4, F5, F6, F7) =>
    [0 F0] [1 F1] [2 F2] [3 F3] [4 F4] [5 F5] [6 F6] [7 F7]);
handle_impls!((F0, F1, F2, F3, F4, F5, F6, F7, F8) =>
    [0 F0] [1 F1] [2 F2] [3 F3] [4 F4] [5 F5] [6 F6] [7 F7] [8 F8]);
handle_impls!((F0, F1, F2, F3, F4, F5, F6, F7, F8, F9) =>
    [0 F0] [1 F1] [2 F2] [3 F3] [4 F4] [5 F5] [6 F6] [7 F7] [8 F8] [9 F9]);

/// Dispatches `outcome` to the handler for its (flattened) alternative.
///
/// `handlers` is a tuple of closures or functions, one per leaf type, in any
/// order. Handler parameter types must be spelled out so the compiler can
/// select between them.
///
/// # Examples
///
/// ```
/// use zipmatch::{match_with, Error2};
///
/// #[derive(Debug)]
/// struct Missing;
/// #[derive(Debug)]
/// struct Invalid(u32);
///
/// let outcome: Result<Result<u8, Missing>, Error2<Invalid, String>> =
///     Err(Error2::First(Invalid(7)));
///
/// let text = match_with(
///     outcome,
///     (
///         |v: u8| format!("value {v}"),
///         |_: Missing| "missing".to_string(),
///         |e: Invalid| format!("invalid {}", e.0),
///         |s: String| s,
///     ),
/// );
/// assert_eq!(text, "invalid 7");
/// ```
///
/// # Handler coverage
///
/// Every leaf must be accepted by exactly one handler. The reverse is not
/// checked: a handler whose type never occurs is accepted and never called,
/// so one handler tuple can serve outcomes with overlapping leaf sets.
///
/// A leaf without a handler does not compile:
///
/// ```compile_fail
/// use zipmatch::match_with;
///
/// let nested: Result<Result<u8, char>, bool> = Ok(Err('c'));
/// let n = match_with(nested, (|_: u8| 0, |_: bool| 1));
/// ```
///
/// Neither does a leaf reachable two ways, here through the whole-union
/// handler and through the handlers for its alternatives:
///
/// ```compile_fail
/// use zipmatch::{match_with, Error2};
///
/// let r: Result<u8, Error2<char, bool>> = Err(Error2::First('c'));
/// let n = match_with(
///     r,
///     (
///         |_: u8| 0,
///         |_: Error2<char, bool>| 1,
///         |_: char| 2,
///         |_: bool| 3,
///     ),
/// );
/// ```
///
/// Two handlers for the same type are ambiguous as well:
///
/// ```compile_fail
/// use zipmatch::match_with;
///
/// let r: Result<u8, String> = Ok(1);
/// let n = match_with(r, (|v: u8| v, |_: String| 0, |_: u8| 2));
/// ```
pub fn match_with<O, H, R, I>(outcome: O, handlers: H) -> R
where
    O: Dispatch<H, R, I>,
{
    outcome.dispatch(handlers)
}

/// Matches an outcome against handlers listed inline.
///
/// `match_outcome!(value, h1, h2, ...)` is `match_with(value, (h1, h2, ...))`.
///
/// ```
/// use zipmatch::match_outcome;
///
/// let parsed: Result<i32, std::num::ParseIntError> = "12".parse();
/// let doubled = match_outcome!(
///     parsed,
///     |v: i32| v * 2,
///     |_: std::num::ParseIntError| -1,
/// );
/// assert_eq!(doubled, 24);
/// ```
#[macro_export]
macro_rules! match_outcome {
    ($outcome:expr, $($handler:expr),+ $(,)?) => {
        $crate::match_with($outcome, ($($handler,)+))
    };
}
