//! Pure function composition: pipelines, currying, partial application.
//!
//! Everything here builds single-argument stages and chains them. The
//! other modules of this crate produce such stages (sequence operators
//! in [`stream`](crate::stream), effect steps in
//! [`effect`](crate::effect)); this module is what snaps them together.
//!
//! # Two disciplines
//!
//! The variadic macros are the permissive entry points. They expand to
//! nested calls and lean entirely on inference, so stages only need to
//! be [`FnOnce`] and a mismatch surfaces at the offending pair:
//!
//! - [`pipe!`]: value first, stages left to right
//! - [`compose!`]: function first, applied right to left
//! - [`pipe_async!`]: like `pipe!`, awaiting future-returning stages
//!
//! The fixed-arity functions are the strict entry points. [`pipe2`]
//! through [`pipe5`] and [`compose2`] through [`compose5`] spell out
//! every intermediate type in their signatures, which pins each link of
//! the chain down at the cost of occasional annotations. Use them where
//! the inferred types have drifted once too often.
//!
//! # Making stages
//!
//! Multi-argument functions become stages by fixing arguments:
//!
//! - [`partial!`] fixes chosen positions, `__` marks the open ones
//! - [`curry2!`]..[`curry4!`] convert to one-argument-at-a-time form
//! - [`flip`] reorders a binary function so the right argument is the
//!   one left open; [`identity`] and [`constant`] fill gaps
//!
//! # Example
//!
//! ```
//! use fp_pack::compose::identity;
//! use fp_pack::{curry2, partial, pipe};
//!
//! fn scale(factor: i32, value: i32) -> i32 { factor * value }
//! fn shift(value: i32, by: i32) -> i32 { value + by }
//!
//! let adjusted = pipe!(
//!     3,
//!     curry2!(scale)(100),
//!     partial!(shift, __, -50),
//!     identity,
//! );
//! assert_eq!(adjusted, 250);
//! ```
//!
//! # Laws
//!
//! The law test suites hold `compose!` to associativity
//! (`compose!(f, compose!(g, h))` agrees with
//! `compose!(compose!(f, g), h)`) and to `identity` as a two-sided
//! unit; `pipe!` is its mirror image, `flip` is an involution, and the
//! curried and partial forms agree with direct application everywhere.

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_async_macro;
mod pipe_macro;
mod strict;
mod utils;

pub use strict::{compose2, compose3, compose4, compose5, pipe2, pipe3, pipe4, pipe5};
pub use utils::{__, Placeholder, constant, flip, identity};

// The macros already live at the crate root via #[macro_export]; these
// re-exports let pipelines import them from the module path as well.
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
pub use crate::pipe_async;
