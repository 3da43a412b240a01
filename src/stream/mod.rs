//! Lazy sequences with one operator set over sync and async sources.
//!
//! This module provides [`LazySequence`], a pull-based sequence that
//! abstracts over synchronous sources (iterables) and asynchronous
//! sources (streams and futures). Whether a sequence is synchronous or
//! asynchronous is fixed at construction and observable through
//! [`Evaluation`]; every operator works on both kinds without the caller
//! branching on which one it holds.
//!
//! # Core Guarantees
//!
//! - **Laziness**: construction does no work; elements are produced only
//!   when pulled, at most one at a time. Infinite sources combine with
//!   `take` and friends safely.
//! - **Order**: operators yield elements in source order, including when
//!   synchronous and asynchronous sequences are combined.
//! - **Single consumption**: operators and terminals take the sequence
//!   by value, so a consumed sequence is gone. Ownership replaces any
//!   runtime "already consumed" bookkeeping.
//!
//! # Operators
//!
//! Operators exist in two shapes: methods on [`LazySequence`]
//! (`sequence.take(3)`) and point-free stages in [`point_free`]
//! (`point_free::take(3)`) for use inside [`pipe!`](crate::pipe)
//! pipelines.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::pipe;
//! use fp_pack::stream::{LazySequence, point_free};
//!
//! let sequence = pipe!(
//!     LazySequence::from_iterable(1..),
//!     point_free::take_while(|x: &i32| *x <= 4),
//!     point_free::concat(LazySequence::from_iterable([9, 10])),
//! );
//! assert_eq!(sequence.try_into_vec().unwrap(), vec![1, 2, 3, 4, 9, 10]);
//! ```
//!
//! Mixing in an asynchronous ingredient promotes the pipeline; draining
//! then happens with `await`:
//!
//! ```rust
//! use fp_pack::stream::LazySequence;
//! use futures::executor::block_on;
//!
//! let sequence = LazySequence::from_iterable([1, 2])
//!     .chain(LazySequence::from_future(async { 3 }));
//! assert_eq!(block_on(sequence.into_vec()), vec![1, 2, 3]);
//! ```

// =============================================================================
// Core Sequence
// =============================================================================

mod sequence;

pub use sequence::{Evaluation, LazySequence};

// =============================================================================
// Operators
// =============================================================================

mod operators;

pub mod point_free;
