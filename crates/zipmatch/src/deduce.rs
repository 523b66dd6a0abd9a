//! Combined error types for several independent results.
//!
//! Two deductions are offered because stable Rust cannot branch on type
//! equality:
//!
//! - [`Positional`] maps `(E1, ..., En)` to the union `ErrorN<E1, ..., En>`
//!   with one slot per input position. A single input keeps its own type.
//! - [`Uniform`] exists only for tuples whose members are all the same `E`,
//!   and deduces `E` itself. [`Uniform::unify`] folds the positional union
//!   back into `E`.
//!
//! ```
//! use zipmatch::{Deduced, Error3, PositionalError};
//!
//! let uniform: Deduced<(String, String)> = String::from("same type");
//! let positional: PositionalError<(u8, char, bool)> = Error3::Third(true);
//! # let _ = (uniform, positional);
//! ```

use crate::union::{Error2, Error3, Error4, Error5, Error6};

/// Positional union of a tuple of error types.
pub trait Positional {
    /// `E1` for a single input, `ErrorN<E1, ..., En>` otherwise.
    type Union;
}

/// Tuples of error types that are all the same.
#[diagnostic::on_unimplemented(
    message = "the error types `{Self}` are not all the same",
    label = "errors differ between inputs",
    note = "use `zip_any` to combine differing error types into a positional union"
)]
pub trait Uniform: Positional {
    /// The shared error type.
    type Error;

    /// Folds the positional union into the shared type.
    fn unify(union: Self::Union) -> Self::Error;
}

/// The deduced error of uniform inputs.
pub type Deduced<Es> = <Es as Uniform>::Error;

/// The positional union of differing inputs.
pub type PositionalError<Es> = <Es as Positional>::Union;

impl<E0> Positional for (E0,) {
    type Union = E0;
}

impl<E> Uniform for (E,) {
    type Error = E;

    fn unify(union: E) -> E {
        union
    }
}

macro_rules! deduce_impls {
    ($union:ident [$($p:ident),+] [$($same:ident),+] { $($variant:ident),+ }) => {
        impl<$($p),+> Positional for ($($p,)+) {
            type Union = $union<$($p),+>;
        }

        impl<E> Uniform for ($($same,)+) {
            type Error = E;

            fn unify(union: $union<$($same),+>) -> E {
                union.collapse()
            }
        }

        impl<E> $union<$($same),+> {
            /// Returns the held value when every slot has the same type.
            ///
            /// The position is discarded; use the variant or the `as_*`
            /// accessors first if it matters.
            pub fn collapse(self) -> E {
                match self {
                    $( $union::$variant(value) => value, )+
                }
            }
        }
    };
}

deduce_impls!(Error2 [A, B] [E, E] { First, Second });
deduce_impls!(Error3 [A, B, C] [E, E, E] { First, Second, Third });
deduce_impls!(Error4 [A, B, C, D] [E, E, E, E] { First, Second, Third, Fourth });
deduce_impls!(Error5 [A, B, C, D, F] [E, E, E, E, E] { First, Second, Third, Fourth, Fifth });
deduce_impls!(Error6 [A, B, C, D, F, G] [E, E, E, E, E, E] {
    First, Second, Third, Fourth, Fifth, Sixth
});
