//! The `pipe_effect!` macro family for short-circuiting pipelines.
//!
//! This module provides [`pipe_effect!`] and [`pipe_effect_strict!`],
//! which thread a value through stages that may halt the pipeline by
//! returning a [`PipeResult::Effect`](crate::effect::PipeResult). Once a
//! stage halts, every later stage is skipped and the halting
//! [`SideEffect`](crate::effect::SideEffect) travels to the caller
//! unchanged.
//!
//! # Operators
//!
//! - **Comma syntax**: the stage returns a `PipeResult` and may halt
//!   (threaded with `and_then`)
//! - **Lift operator** (`=>`): the stage is a plain function that cannot
//!   halt (threaded with `map`)
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::effect::PipeResult;
//! use fp_pack::pipe_effect;
//!
//! let result: PipeResult<i32> = pipe_effect!(
//!     5,
//!     |x: i32| PipeResult::pure(x * 2),
//!     => |x| x + 1,
//! );
//! assert_eq!(result.run(), 11);
//! ```
//!
//! ## Halting
//!
//! ```rust
//! use fp_pack::effect::PipeResult;
//! use fp_pack::pipe_effect;
//!
//! let halted: PipeResult<i32> = pipe_effect!(
//!     1,
//!     |x: i32| PipeResult::halt_labeled("too-small", move || x),
//!     |x: i32| PipeResult::pure(x + 100),
//! );
//! assert_eq!(halted.effect_ref().and_then(|effect| effect.label()), Some("too-small"));
//! assert_eq!(halted.run(), 1);
//! ```

/// Pipes a value through effect-aware stages, halting on the first effect.
///
/// Stages run left to right. A comma-separated stage returns a
/// [`PipeResult`](crate::effect::PipeResult) and is threaded with
/// `and_then`; a stage behind the lift operator `=>` is a plain function
/// threaded with `map`. In both cases an already-halted pipeline skips the
/// stage entirely, so the first halt wins and its effect container reaches
/// the caller untouched.
///
/// The whole chain shares one effect payload type. When stages halt with
/// their own payload types that should widen into a caller-named union,
/// use [`pipe_effect_strict!`](crate::pipe_effect_strict) instead.
///
/// # Syntax
///
/// - `pipe_effect!(input)` - Converts input to `PipeResult`
/// - `pipe_effect!(input, f)` - Applies `f` using `and_then`
/// - `pipe_effect!(input, => f)` - Applies `f` using `map` (lift operator)
/// - `pipe_effect!(input, f, => g, h, ...)` - Chain multiple stages
///
/// # Entry value
///
/// The input position accepts anything implementing
/// [`IntoPipeResult`](crate::effect::IntoPipeResult):
///
/// - `PipeResult<T, R>` is used unchanged
/// - `SideEffect<R>` enters already halted, so no stage runs at all
/// - Primitive types (`i32`, `String`, `bool`, etc.) enter as values
/// - Other types are wrapped with [`Pure`](crate::effect::Pure)
///
/// # Panic Behavior
///
/// Nothing is caught. A stage that panics unwinds out of the pipeline
/// immediately; halting is reserved for deliberately returned effects.
///
/// # Examples
///
/// ## Value flowing through all stages
///
/// ```rust
/// use fp_pack::effect::PipeResult;
/// use fp_pack::pipe_effect;
///
/// let result: PipeResult<String> = pipe_effect!(
///     21,
///     => |x: i32| x * 2,
///     |x: i32| PipeResult::pure(x.to_string()),
/// );
/// assert_eq!(result.run(), "42");
/// ```
///
/// ## First halt wins
///
/// ```rust
/// use fp_pack::effect::PipeResult;
/// use fp_pack::pipe_effect;
///
/// let halted: PipeResult<i32> = pipe_effect!(
///     10,
///     |_: i32| PipeResult::halt_labeled("first", || -1),
///     |_: i32| PipeResult::halt_labeled("second", || -2),
/// );
/// assert_eq!(halted.effect_ref().and_then(|effect| effect.label()), Some("first"));
/// ```
///
/// ## Entering with an existing effect
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect;
///
/// let pre_halted: PipeResult<i32> = pipe_effect!(
///     SideEffect::labeled("cached", || 7),
///     |x: i32| PipeResult::pure(x * 1000),
/// );
/// assert_eq!(pre_halted.run(), 7);
/// ```
///
/// ## User-defined types with Pure
///
/// ```rust
/// use fp_pack::effect::{PipeResult, Pure};
/// use fp_pack::pipe_effect;
///
/// struct Draft {
///     words: usize,
/// }
///
/// let result: PipeResult<usize> = pipe_effect!(
///     Pure(Draft { words: 12 }),
///     => |draft: Draft| draft.words,
/// );
/// assert_eq!(result.run(), 12);
/// ```
#[macro_export]
macro_rules! pipe_effect {
    // No stages left: lift the entry value.
    ($input:expr) => {{
        $crate::effect::IntoPipeResult::into_pipe_result($input)
    }};

    // Final lift stage: a plain function that cannot halt.
    ($input:expr, => $stage:expr $(,)?) => {{
        $crate::effect::IntoPipeResult::into_pipe_result($input).map($stage)
    }};

    // Lift stage with more to come.
    ($input:expr, => $stage:expr, $($rest:tt)+) => {{
        let __pipe_effect_step =
            $crate::effect::IntoPipeResult::into_pipe_result($input).map($stage);
        $crate::pipe_effect!(__pipe_effect_step, $($rest)+)
    }};

    // Final halting stage.
    ($input:expr, $stage:expr $(,)?) => {{
        $crate::effect::IntoPipeResult::into_pipe_result($input).and_then($stage)
    }};

    // Halting stage with more to come.
    ($input:expr, $stage:expr, $($rest:tt)+) => {{
        let __pipe_effect_step =
            $crate::effect::IntoPipeResult::into_pipe_result($input).and_then($stage);
        $crate::pipe_effect!(__pipe_effect_step, $($rest)+)
    }};
}

/// Pipes a value through stages whose effect payloads widen into a union.
///
/// Works like [`pipe_effect!`](crate::pipe_effect), but comma stages are
/// threaded with `and_then_into`: each stage may halt with its own payload
/// type, converted into the chain's payload type via [`Into`]. Naming the
/// chain payload as an enum with one `From` impl per stage keeps the exact
/// set of possible halts in the type, and matching on the executed payload
/// recovers which stage halted.
///
/// # Syntax
///
/// - `pipe_effect_strict!(input)` - Converts input to `PipeResult`
/// - `pipe_effect_strict!(input, f)` - Applies `f` using `and_then_into`
/// - `pipe_effect_strict!(input, => f)` - Applies `f` using `map`
/// - `pipe_effect_strict!(input, f, => g, ...)` - Chain multiple stages
///
/// The chain's payload type rarely falls out of inference alone; bind the
/// result with an explicit `PipeResult<_, YourUnion>` annotation.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::PipeResult;
/// use fp_pack::pipe_effect_strict;
///
/// #[derive(Debug, PartialEq, Eq)]
/// enum Exit {
///     Parse(String),
///     Range(i32),
/// }
///
/// impl From<String> for Exit {
///     fn from(message: String) -> Self {
///         Self::Parse(message)
///     }
/// }
///
/// impl From<i32> for Exit {
///     fn from(excess: i32) -> Self {
///         Self::Range(excess)
///     }
/// }
///
/// fn parse(raw: &str) -> PipeResult<i32, String> {
///     match raw.parse() {
///         Ok(number) => PipeResult::pure(number),
///         Err(_) => PipeResult::halt(|| "not a number".to_string()),
///     }
/// }
///
/// fn check_range(number: i32) -> PipeResult<i32, i32> {
///     if number <= 100 {
///         PipeResult::pure(number)
///     } else {
///         PipeResult::halt(move || number - 100)
///     }
/// }
///
/// let accepted: PipeResult<i32, Exit> = pipe_effect_strict!("42", parse, check_range);
/// assert_eq!(accepted.value(), Some(42));
///
/// let rejected: PipeResult<i32, Exit> = pipe_effect_strict!("142", parse, check_range);
/// assert_eq!(rejected.effect().map(|effect| effect.run()), Some(Exit::Range(42)));
/// ```
#[macro_export]
macro_rules! pipe_effect_strict {
    // No stages left: lift the entry value.
    ($input:expr) => {{
        $crate::effect::IntoPipeResult::into_pipe_result($input)
    }};

    // Final lift stage: a plain function that cannot halt.
    ($input:expr, => $stage:expr $(,)?) => {{
        $crate::effect::IntoPipeResult::into_pipe_result($input).map($stage)
    }};

    // Lift stage with more to come.
    ($input:expr, => $stage:expr, $($rest:tt)+) => {{
        let __pipe_effect_strict_step =
            $crate::effect::IntoPipeResult::into_pipe_result($input).map($stage);
        $crate::pipe_effect_strict!(__pipe_effect_strict_step, $($rest)+)
    }};

    // Final widening stage: the payload converts into the chain's union.
    ($input:expr, $stage:expr $(,)?) => {{
        $crate::effect::IntoPipeResult::into_pipe_result($input).and_then_into($stage)
    }};

    // Widening stage with more to come.
    ($input:expr, $stage:expr, $($rest:tt)+) => {{
        let __pipe_effect_strict_step =
            $crate::effect::IntoPipeResult::into_pipe_result($input).and_then_into($stage);
        $crate::pipe_effect_strict!(__pipe_effect_strict_step, $($rest)+)
    }};
}
