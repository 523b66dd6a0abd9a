#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Zipmatch Library
//!
//! Positional error unions, first-failure zipping of independent results,
//! extract-or-propagate, and exhaustive matching that flattens nested
//! outcomes.
//!
//! # Modules
//!
//! - [`tagged`]: discriminant access and the `At<N>` position marker
//! - [`union`]: the positional unions `Error2` ... `Error6`
//! - [`deduce`]: combined error types for several inputs
//! - [`matcher`]: flattening, type-directed dispatch
//! - [`zip`](mod@zip): first-failure combination
//! - [`extract`]: `try_get!`, `const_try!`, `const_unwrap!`, defaults and error mapping
//! - [`successes`](mod@successes): lazy success projection

pub mod deduce;
pub mod extract;
pub mod matcher;
pub mod successes;
pub mod tagged;
pub mod union;
pub mod zip;

mod proptests;

// Re-exports for convenience
pub use deduce::{Deduced, Positional, PositionalError, Uniform};
pub use extract::{Convert, Embed, Inj, Widen, map_error, try_get_or, widen_error};
pub use matcher::{Dispatch, Handle, Leaf, match_with};
pub use successes::{Successes, SuccessesExt, successes};
pub use tagged::{At, Tagged};
pub use union::{Error2, Error3, Error4, Error5, Error6, Inject};
pub use zip::{Zip, ZipAny, zip, zip_any};

/// Glob import of the traits, types, functions and macros.
///
/// ```
/// use zipmatch::prelude::*;
///
/// let r: Result<u8, Error2<char, bool>> = Err(Error2::Second(true));
/// let n = match_outcome!(r, |v: u8| v, |_: char| 1, |_: bool| 2);
/// assert_eq!(n, 2);
/// ```
pub mod prelude {
    pub use crate::{
        At, Dispatch, Error2, Error3, Error4, Error5, Error6, Inject, SuccessesExt, Tagged,
        Uniform, Widen, Zip, ZipAny,
    };
    pub use crate::{map_error, match_with, successes, try_get_or, widen_error, zip, zip_any};
    pub use crate::{const_try, const_unwrap, match_outcome, try_get};
}
