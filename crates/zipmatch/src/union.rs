//! Positional error unions.
//!
//! `ErrorN<E1, ..., En>` holds exactly one of `n` error kinds. Slots are
//! positional: `Error2<String, String>` has two distinct `String` slots, and
//! the variant (not the payload type) says which position failed. Unions are
//! flat; a union nested inside another is flattened by the matcher, not by the
//! type.
//!
//! When every alternative implements [`std::error::Error`], so does the union.
//! `Display` and `source()` are forwarded to the held alternative.

use std::fmt;

use crate::tagged::{At, Tagged};

/// Places a value into the union slot selected by the position marker `I`.
///
/// `I` is inferred. When the same type occupies two slots the position is
/// ambiguous and must be named explicitly, e.g.
/// `<Error2<u8, u8> as Inject<u8, At<1>>>::inject(7)`.
pub trait Inject<T, I> {
    /// Wraps `value` in the slot at position `I`.
    fn inject(value: T) -> Self;
}

/// One of two error kinds.
///
/// # Examples
///
/// ```
/// use zipmatch::Error2;
///
/// let err: Error2<std::num::ParseIntError, &str> = Error2::Second("missing comma");
/// assert_eq!(err.to_string(), "missing comma");
/// assert_eq!(err.as_second(), Some(&"missing comma"));
/// assert!(err.as_first().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error2<A, B> {
    /// Slot 0.
    First(A),
    /// Slot 1.
    Second(B),
}

/// One of three error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error3<A, B, C> {
    /// Slot 0.
    First(A),
    /// Slot 1.
    Second(B),
    /// Slot 2.
    Third(C),
}

/// One of four error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error4<A, B, C, D> {
    /// Slot 0.
    First(A),
    /// Slot 1.
    Second(B),
    /// Slot 2.
    Third(C),
    /// Slot 3.
    Fourth(D),
}

/// One of five error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error5<A, B, C, D, E> {
    /// Slot 0.
    First(A),
    /// Slot 1.
    Second(B),
    /// Slot 2.
    Third(C),
    /// Slot 3.
    Fourth(D),
    /// Slot 4.
    Fifth(E),
}

/// One of six error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error6<A, B, C, D, E, F> {
    /// Slot 0.
    First(A),
    /// Slot 1.
    Second(B),
    /// Slot 2.
    Third(C),
    /// Slot 3.
    Fourth(D),
    /// Slot 4.
    Fifth(E),
    /// Slot 5.
    Sixth(F),
}

macro_rules! union_impls {
    (
        $name:ident $params:tt arity $arity:literal {
            $( $variant:ident($ty:ident) @ $idx:tt => $as_fn:ident, $into_fn:ident; )+
        }
    ) => {
        union_impls!(@common $name $params $arity [$($variant $idx),+]);
        $( union_impls!(@slot $name $params $variant $ty $idx $as_fn $into_fn); )+
    };

    (@common $name:ident [$($p:ident),+] $arity:literal [$($variant:ident $idx:tt),+]) => {
        impl<$($p),+> Tagged for $name<$($p),+> {
            const ARITY: usize = $arity;

            fn index(&self) -> usize {
                match self {
                    $( $name::$variant(_) => $idx, )+
                }
            }
        }

        impl<$($p: fmt::Display),+> fmt::Display for $name<$($p),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( $name::$variant(value) => fmt::Display::fmt(value, f), )+
                }
            }
        }

        impl<$($p),+> std::error::Error for $name<$($p),+>
        where
            $($p: std::error::Error),+
        {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self {
                    $( $name::$variant(value) => std::error::Error::source(value), )+
                }
            }
        }
    };

    (@slot $name:ident [$($p:ident),+] $variant:ident $ty:ident $idx:tt $as_fn:ident $into_fn:ident) => {
        impl<$($p),+> $name<$($p),+> {
            #[doc = concat!("Returns the value in slot ", stringify!($idx), ", if that slot is held.")]
            pub fn $as_fn(&self) -> Option<&$ty> {
                match self {
                    $name::$variant(value) => Some(value),
                    _ => None,
                }
            }

            #[doc = concat!("Narrows to slot ", stringify!($idx), ", handing the union back unchanged otherwise.")]
            pub fn $into_fn(self) -> Result<$ty, Self> {
                match self {
                    $name::$variant(value) => Ok(value),
                    other => Err(other),
                }
            }
        }

        impl<$($p),+> Inject<$ty, At<$idx>> for $name<$($p),+> {
            fn inject(value: $ty) -> Self {
                tracing::trace!(union = stringify!($name), slot = $idx, "injected into positional slot");
                $name::$variant(value)
            }
        }
    };
}

union_impls!(Error2 [A, B] arity 2 {
    First(A) @ 0 => as_first, into_first;
    Second(B) @ 1 => as_second, into_second;
});

union_impls!(Error3 [A, B, C] arity 3 {
    First(A) @ 0 => as_first, into_first;
    Second(B) @ 1 => as_second, into_second;
    Third(C) @ 2 => as_third, into_third;
});

union_impls!(Error4 [A, B, C, D] arity 4 {
    First(A) @ 0 => as_first, into_first;
    Second(B) @ 1 => as_second, into_second;
    Third(C) @ 2 => as_third, into_third;
    Fourth(D) @ 3 => as_fourth, into_fourth;
});

union_impls!(Error5 [A, B, C, D, E] arity 5 {
    First(A) @ 0 => as_first, into_first;
    Second(B) @ 1 => as_second, into_second;
    Third(C) @ 2 => as_third, into_third;
    Fourth(D) @ 3 => as_fourth, into_fourth;
    Fifth(E) @ 4 => as_fifth, into_fifth;
});

union_impls!(Error6 [A, B, C, D, E, F] arity 6 {
    First(A) @ 0 => as_first, into_first;
    Second(B) @ 1 => as_second, into_second;
    Third(C) @ 2 => as_third, into_third;
    Fourth(D) @ 3 => as_fourth, into_fourth;
    Fifth(E) @ 4 => as_fifth, into_fifth;
    Sixth(F) @ 5 => as_sixth, into_sixth;
});
