//! The `pipe_async!` macro for left-to-right application of async stages.
//!
//! This module provides the [`pipe_async!`] macro, the async counterpart
//! of [`pipe!`](crate::pipe). Stages that return futures are awaited in
//! place, so a pipeline can mix asynchronous steps with plain synchronous
//! transformations while reading top to bottom like its synchronous
//! sibling.
//!
//! # Async stages
//!
//! An async stage is any callable returning a [`Future`](std::future::Future):
//! an `async fn`, a closure returning an `async move` block, or a method
//! like [`LazySequence::into_vec`](crate::stream::LazySequence::into_vec)
//! referenced without awaiting. `pipe!` cannot await, so chaining such
//! stages there would thread futures, not values. `pipe_async!` awaits
//! each future-returning stage before handing its output to the next
//! stage.
//!
//! Because the expansion contains `.await`, the macro can only be invoked
//! inside an `async` context. The surrounding `async` block is what makes
//! the whole pipeline lazy: nothing runs until that block is awaited.
//!
//! # Operators
//!
//! - **Comma syntax**: the stage returns a future and is awaited before
//!   the next stage runs
//! - **Lift operator** (`=>`): the stage is a plain function, applied
//!   without awaiting
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::pipe_async;
//! use futures::executor::block_on;
//!
//! async fn fetch_score(id: u32) -> i32 { id as i32 * 10 }
//!
//! let result = block_on(async {
//!     pipe_async!(4_u32, fetch_score, => |score| score + 1)
//! });
//! assert_eq!(result, 41);
//! ```
//!
//! ## Draining a sequence mid-pipeline
//!
//! ```rust
//! use fp_pack::pipe_async;
//! use fp_pack::stream::LazySequence;
//! use futures::executor::block_on;
//!
//! let total = block_on(async {
//!     pipe_async!(
//!         LazySequence::from_iterable(1..=3),
//!         |sequence: LazySequence<i32>| sequence.into_vec(),
//!         => |values: Vec<i32>| values.into_iter().sum::<i32>(),
//!     )
//! });
//! assert_eq!(total, 6);
//! ```

/// Pipes a value through synchronous and asynchronous stages, left to right.
///
/// `pipe_async!(x, f, g)` is equivalent to `g(f(x).await).await`; prefixing
/// a stage with `=>` applies it without awaiting. The macro expands to an
/// expression containing `.await`, so it must be invoked inside an `async`
/// function or block.
///
/// Stages run strictly in sequence, one at a time: a later stage never
/// starts before an earlier future resolves. Use a lift stage for pure
/// transformations between async steps rather than wrapping them in
/// futures of their own.
///
/// # Syntax
///
/// - `pipe_async!(input)` - Evaluates to `input` unchanged
/// - `pipe_async!(input, f)` - Evaluates to `f(input).await`
/// - `pipe_async!(input, => f)` - Evaluates to `f(input)` (no await)
/// - `pipe_async!(input, f, => g, h, ...)` - Chain multiple stages
///
/// # Stage requirements
///
/// Each stage is called exactly once, so [`FnOnce`] is enough. A comma
/// stage must return a [`Future`](std::future::Future) whose output
/// matches the next stage's input; adjacent stages are checked pairwise,
/// so a mismatch is reported at the exact pair that disagrees.
///
/// # Examples
///
/// ## Chaining async functions
///
/// ```rust
/// use fp_pack::pipe_async;
/// use futures::executor::block_on;
///
/// async fn square(value: i32) -> i32 { value * value }
/// async fn negate(value: i32) -> i32 { -value }
///
/// let result = block_on(async {
///     pipe_async!(9, square, negate)
/// });
/// assert_eq!(result, -81);
/// ```
///
/// ## Mixing lifts with async stages
///
/// ```rust
/// use fp_pack::pipe_async;
/// use futures::executor::block_on;
///
/// async fn halve(value: i32) -> i32 { value / 2 }
///
/// let result = block_on(async {
///     pipe_async!(
///         50,
///         => |value: i32| value + 4, // 54, applied directly
///         halve,                     // 27, awaited
///         => |value: i32| value * 3, // 81
///     )
/// });
/// assert_eq!(result, 81);
/// ```
///
/// ## Deferred execution
///
/// The pipeline inherits the laziness of its surrounding `async` block:
///
/// ```rust
/// use fp_pack::pipe_async;
/// use futures::executor::block_on;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let ran = Rc::new(Cell::new(false));
/// let witness = Rc::clone(&ran);
///
/// let workflow = async move {
///     pipe_async!(6, |value: i32| async move {
///         witness.set(true);
///         value * 9
///     })
/// };
///
/// assert!(!ran.get());
/// assert_eq!(block_on(workflow), 54);
/// assert!(ran.get());
/// ```
#[macro_export]
macro_rules! pipe_async {
    // No stages left.
    ($input:expr) => {
        $input
    };

    // Final lift stage: apply without awaiting.
    ($input:expr, => $stage:expr $(,)?) => {
        $stage($input)
    };

    // Lift stage with more to come.
    ($input:expr, => $stage:expr, $($rest:tt)+) => {{
        let __pipe_async_step = $stage($input);
        $crate::pipe_async!(__pipe_async_step, $($rest)+)
    }};

    // Final awaited stage.
    ($input:expr, $stage:expr $(,)?) => {
        $stage($input).await
    };

    // Awaited stage with more to come.
    ($input:expr, $stage:expr, $($rest:tt)+) => {{
        let __pipe_async_step = $stage($input).await;
        $crate::pipe_async!(__pipe_async_step, $($rest)+)
    }};
}
