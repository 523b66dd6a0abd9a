//! # zipmatch Design Documentation
//!
//! Architectural decision records for zipmatch: why `zip` and `zip_any` are
//! separate entry points, why error unions keep one slot per position, how the
//! matcher treats nested results and surplus handlers, the arity limits, and
//! how extraction works inside `const fn` and `const` items.
//!
//! This is a documentation-only crate with no runtime code.

#![doc = include_str!("../README.md")]
