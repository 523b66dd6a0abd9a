//! Discriminant access shared by every outcome type.
//!
//! An outcome is a Rust enum: it always holds exactly one of its declared
//! alternatives, and there is no empty state. [`Tagged`] exposes which
//! alternative is held as a zero-based position, and [`At`] names a position
//! at the type level so traits can select slots and handlers by index.

/// Type-level position of an alternative, a handler or a zip input.
///
/// `At<0>` is the first position. The marker carries no data; it only
/// disambiguates trait impls that would otherwise overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct At<const N: usize>;

impl<const N: usize> At<N> {
    /// The position this marker stands for.
    pub const INDEX: usize = N;
}

/// A closed union with a runtime discriminant.
///
/// # Examples
///
/// ```
/// use zipmatch::{Error2, Tagged};
///
/// let ok: Result<i32, String> = Ok(3);
/// assert_eq!(ok.index(), 0);
///
/// let err: Error2<u8, char> = Error2::Second('x');
/// assert_eq!(err.index(), 1);
/// assert!(err.holds::<1>());
/// assert_eq!(<Error2<u8, char> as Tagged>::ARITY, 2);
/// ```
pub trait Tagged {
    /// Number of declared alternatives.
    const ARITY: usize;

    /// Position of the alternative currently held. Always `< ARITY`.
    fn index(&self) -> usize;

    /// Returns `true` if the alternative at position `N` is held.
    fn holds<const N: usize>(&self) -> bool {
        self.index() == N
    }
}

impl<T, E> Tagged for Result<T, E> {
    const ARITY: usize = 2;

    fn index(&self) -> usize {
        match self {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }
}
