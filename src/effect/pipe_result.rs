//! `PipeResult` - the outcome of an effect pipeline stage.
//!
//! This module provides the [`PipeResult<T, R>`] type, which represents
//! either a plain value flowing through a pipeline (`Value`) or a deferred
//! [`SideEffect`] that halted it (`Effect`). Because it is a sum type, no
//! ordinary value can be mistaken for an effect: an effect-shaped struct a
//! stage happens to return is still just a `Value`.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::effect::PipeResult;
//!
//! // A value keeps flowing
//! let flowing: PipeResult<i32> = PipeResult::pure(20).and_then(|x| PipeResult::pure(x + 1));
//! assert_eq!(flowing.run(), 21);
//!
//! // An effect halts the chain; later stages never run
//! let halted: PipeResult<i32> = PipeResult::halt(|| -1).and_then(|x: i32| PipeResult::pure(x * 2));
//! assert!(halted.is_effect());
//! assert_eq!(halted.run(), -1);
//! ```
//!
//! # Handling both outcomes
//!
//! ```rust
//! use fp_pack::effect::PipeResult;
//!
//! let outcome: PipeResult<i32> = PipeResult::halt_labeled("fallback", || 0);
//! let description = outcome.fold(
//!     |value| format!("value: {value}"),
//!     |effect| format!("halted by {:?}", effect.label()),
//! );
//! assert_eq!(description, "halted by Some(\"fallback\")");
//! ```

use std::fmt;

use super::side_effect::SideEffect;

/// The outcome of a pipeline stage: a value, or a deferred effect.
///
/// `PipeResult<T, R>` is either `Value(T)` or `Effect(SideEffect<R>)`.
/// The second type parameter defaults to the first, so `PipeResult<T>`
/// names the common case where a halted pipeline produces the same type
/// the successful one would.
///
/// Stages of an effect pipeline take the current value and return a
/// `PipeResult`; returning `Effect` halts the chain, and every later stage
/// is skipped while the effect container travels to the caller unchanged.
///
/// # Type Parameters
///
/// * `T` - The type of the value produced by a completed pipeline
/// * `R` - The type produced by the halting effect when it is executed
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::PipeResult;
///
/// let value: PipeResult<i32> = PipeResult::pure(42);
/// assert!(value.is_value());
///
/// let effect: PipeResult<i32> = PipeResult::halt(|| 0);
/// assert!(effect.is_effect());
/// ```
pub enum PipeResult<T, R = T> {
    /// A plain value continuing through the pipeline.
    Value(T),
    /// A deferred effect that halted the pipeline.
    Effect(SideEffect<R>),
}

impl<T, R> PipeResult<T, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::pure(42);
    /// assert_eq!(result.value(), Some(42));
    /// ```
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self::Value(value)
    }

    /// Halts with an unlabeled effect built from the given thunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::halt(|| -1);
    /// assert!(result.is_effect());
    /// assert_eq!(result.run(), -1);
    /// ```
    #[inline]
    pub fn halt<F>(effect: F) -> Self
    where
        F: FnOnce() -> R + 'static,
        R: 'static,
    {
        Self::Effect(SideEffect::of(effect))
    }

    /// Halts with a labeled effect built from the given thunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::halt_labeled("audit", || 0);
    /// assert_eq!(result.effect_ref().and_then(|effect| effect.label()), Some("audit"));
    /// ```
    #[inline]
    pub fn halt_labeled<S, F>(label: S, effect: F) -> Self
    where
        S: Into<String>,
        F: FnOnce() -> R + 'static,
        R: 'static,
    {
        Self::Effect(SideEffect::labeled(label, effect))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::pure(42);
    /// assert!(result.is_value());
    /// assert!(!result.is_effect());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this is an `Effect`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::halt(|| 0);
    /// assert!(result.is_effect());
    /// assert!(!result.is_value());
    /// ```
    #[inline]
    pub const fn is_effect(&self) -> bool {
        matches!(self, Self::Effect(_))
    }

    // =========================================================================
    // Consuming extraction
    // =========================================================================

    /// Converts into an `Option<T>`, consuming the result.
    ///
    /// Returns `Some(value)` for `Value(value)`, otherwise `None`. The
    /// effect, if any, is dropped without running.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let value: PipeResult<i32> = PipeResult::pure(42);
    /// assert_eq!(value.value(), Some(42));
    ///
    /// let effect: PipeResult<i32> = PipeResult::halt(|| 0);
    /// assert_eq!(effect.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Effect(_) => None,
        }
    }

    /// Converts into an `Option<SideEffect<R>>`, consuming the result.
    ///
    /// Returns `Some(effect)` for `Effect(effect)`, otherwise `None`.
    /// The effect is handed over cold; nothing is executed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let halted: PipeResult<i32> = PipeResult::halt(|| 7);
    /// let effect = halted.effect().unwrap();
    /// assert_eq!(effect.run(), 7);
    /// ```
    #[inline]
    pub fn effect(self) -> Option<SideEffect<R>> {
        match self {
            Self::Value(_) => None,
            Self::Effect(effect) => Some(effect),
        }
    }

    // =========================================================================
    // Borrowing accessors
    // =========================================================================

    /// Returns a reference to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::pure(42);
    /// assert_eq!(result.value_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Effect(_) => None,
        }
    }

    /// Returns a reference to the halting effect if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::halt_labeled("skip", || 0);
    /// assert_eq!(result.effect_ref().and_then(|effect| effect.label()), Some("skip"));
    /// ```
    #[inline]
    pub const fn effect_ref(&self) -> Option<&SideEffect<R>> {
        match self {
            Self::Value(_) => None,
            Self::Effect(effect) => Some(effect),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the value if present, passing an effect through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::pure(21).map(|x| x * 2);
    /// assert_eq!(result.value(), Some(42));
    ///
    /// let halted: PipeResult<i32> = PipeResult::halt(|| 0);
    /// assert!(halted.map(|x| x * 2).is_effect());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> PipeResult<U, R>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => PipeResult::Value(function(value)),
            Self::Effect(effect) => PipeResult::Effect(effect),
        }
    }

    /// Transforms the halting effect if present, passing a value through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let halted: PipeResult<i32> = PipeResult::halt(|| 20);
    /// let doubled = halted.map_effect(|effect| effect.map(|x| x * 2));
    /// assert_eq!(doubled.run(), 40);
    /// ```
    #[inline]
    pub fn map_effect<R2, F>(self, function: F) -> PipeResult<T, R2>
    where
        F: FnOnce(SideEffect<R>) -> SideEffect<R2>,
    {
        match self {
            Self::Value(value) => PipeResult::Value(value),
            Self::Effect(effect) => PipeResult::Effect(function(effect)),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Applies the next pipeline stage, short-circuiting on an effect.
    ///
    /// If this is `Value(value)`, the stage runs on `value`. If this is
    /// `Effect(effect)`, the stage is never invoked and the same effect
    /// container is returned. This is what makes a halt contagious: after
    /// the first `Effect`, every later `and_then` is a no-op.
    ///
    /// All stages in a chain share one effect payload type `R`. For stages
    /// with their own payload types, see [`and_then_into`](Self::and_then_into).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::pure(20)
    ///     .and_then(|x| PipeResult::pure(x + 1))
    ///     .and_then(|x| PipeResult::pure(x * 2));
    /// assert_eq!(result.value(), Some(42));
    /// ```
    ///
    /// ## Short-circuiting
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::pure(1)
    ///     .and_then(|_| PipeResult::halt_labeled("stop", || -1))
    ///     .and_then(|x: i32| PipeResult::pure(x * 1000));
    /// assert_eq!(result.effect_ref().and_then(|effect| effect.label()), Some("stop"));
    /// assert_eq!(result.run(), -1);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, stage: F) -> PipeResult<U, R>
    where
        F: FnOnce(T) -> PipeResult<U, R>,
    {
        match self {
            Self::Value(value) => stage(value),
            Self::Effect(effect) => PipeResult::Effect(effect),
        }
    }

    /// Applies the next stage, widening its effect payload into this
    /// chain's payload type.
    ///
    /// Works like [`and_then`](Self::and_then), except the stage may halt
    /// with its own payload type `R2`, which is converted into the chain's
    /// `R` via [`Into`]. Naming `R` as an enum with a `From` impl per stage
    /// payload keeps the exact set of possible halts in the type, the same
    /// way `?` widens error types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
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
    /// let accepted: PipeResult<i32, Exit> =
    ///     PipeResult::pure("42").and_then_into(parse).and_then_into(check_range);
    /// assert_eq!(accepted.value(), Some(42));
    ///
    /// let rejected: PipeResult<i32, Exit> =
    ///     PipeResult::pure("142").and_then_into(parse).and_then_into(check_range);
    /// let exit = rejected.effect().unwrap().run();
    /// assert_eq!(exit, Exit::Range(42));
    /// ```
    #[inline]
    pub fn and_then_into<U, R2, F>(self, stage: F) -> PipeResult<U, R>
    where
        F: FnOnce(T) -> PipeResult<U, R2>,
        R2: Into<R> + 'static,
        R: 'static,
    {
        match self {
            Self::Value(value) => match stage(value) {
                PipeResult::Value(next) => PipeResult::Value(next),
                PipeResult::Effect(effect) => PipeResult::Effect(effect.widen()),
            },
            Self::Effect(effect) => PipeResult::Effect(effect),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the result by applying one of two handlers.
    ///
    /// Exactly one handler runs: `on_value` for a value, `on_effect` for a
    /// halting effect. The effect handler receives the cold container and
    /// decides itself whether to execute it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let value: PipeResult<i32> = PipeResult::pure(42);
    /// let shown = value.fold(|x| x.to_string(), |_| "halted".to_string());
    /// assert_eq!(shown, "42");
    ///
    /// let halted: PipeResult<i32> = PipeResult::halt(|| 0);
    /// let shown = halted.fold(|x| x.to_string(), |effect| format!("ran: {}", effect.run()));
    /// assert_eq!(shown, "ran: 0");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_value: F, on_effect: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(SideEffect<R>) -> U,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Effect(effect) => on_effect(effect),
        }
    }

    // =========================================================================
    // Panicking extraction
    // =========================================================================

    /// Returns the value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Effect` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::pure(42);
    /// assert_eq!(result.unwrap_value(), 42);
    /// ```
    #[inline]
    pub fn unwrap_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Effect(_) => panic!("called `PipeResult::unwrap_value()` on an `Effect` value"),
        }
    }

    /// Returns the halting effect, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Value` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let result: PipeResult<i32> = PipeResult::halt(|| 7);
    /// assert_eq!(result.unwrap_effect().run(), 7);
    /// ```
    #[inline]
    pub fn unwrap_effect(self) -> SideEffect<R> {
        match self {
            Self::Value(_) => panic!("called `PipeResult::unwrap_effect()` on a `Value` value"),
            Self::Effect(effect) => effect,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Result`, treating a halt as the error case.
    ///
    /// Useful for bridging a pipeline into `?`-based control flow. The
    /// effect is not executed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let value: PipeResult<i32> = PipeResult::pure(42);
    /// assert_eq!(value.into_result().ok(), Some(42));
    ///
    /// let halted: PipeResult<i32> = PipeResult::halt(|| 0);
    /// assert!(halted.into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, SideEffect<R>> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Effect(effect) => Err(effect),
        }
    }
}

impl<T: 'static> PipeResult<T, T> {
    /// Resolves the pipeline outcome to a plain value.
    ///
    /// A `Value` is returned unchanged; an `Effect` is executed exactly
    /// once and its result returned. This method only exists when the
    /// value type and the effect payload type coincide, so a chain whose
    /// stages still disagree on those types cannot be unwrapped early:
    /// the call simply does not compile until the pipeline is complete.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let value: PipeResult<i32> = PipeResult::pure(42);
    /// assert_eq!(value.run(), 42);
    ///
    /// let halted: PipeResult<i32> = PipeResult::halt(|| -1);
    /// assert_eq!(halted.run(), -1);
    /// ```
    ///
    /// A half-finished chain cannot be resolved:
    ///
    /// ```compile_fail
    /// use fp_pack::effect::PipeResult;
    ///
    /// // The value type is i32 but the halt payload is String, so `run`
    /// // is not available yet.
    /// let unfinished: PipeResult<i32, String> = PipeResult::pure(1);
    /// let _ = unfinished.run();
    /// ```
    #[inline]
    pub fn run(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Effect(effect) => effect.run(),
        }
    }
}

// =============================================================================
// Debug
// =============================================================================

impl<T: fmt::Debug, R> fmt::Debug for PipeResult<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Effect(effect) => formatter.debug_tuple("Effect").field(effect).finish(),
        }
    }
}

// =============================================================================
// From conversions
// =============================================================================

impl<T, R> From<SideEffect<R>> for PipeResult<T, R> {
    /// Wraps an already-constructed effect as a halted pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let effect = SideEffect::labeled("noop", || 0);
    /// let result: PipeResult<i32> = effect.into();
    /// assert!(result.is_effect());
    /// ```
    #[inline]
    fn from(effect: SideEffect<R>) -> Self {
        Self::Effect(effect)
    }
}

impl<T, R> From<PipeResult<T, R>> for Result<T, SideEffect<R>> {
    /// Converts a pipeline outcome to a `Result`.
    ///
    /// `Value(value)` becomes `Ok(value)`, and `Effect(effect)` becomes
    /// `Err(effect)` without executing the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let halted: PipeResult<i32> = PipeResult::halt(|| 9);
    /// let result: Result<i32, SideEffect<i32>> = halted.into();
    /// assert_eq!(result.err().map(SideEffect::run), Some(9));
    /// ```
    #[inline]
    fn from(pipe_result: PipeResult<T, R>) -> Self {
        pipe_result.into_result()
    }
}

// =============================================================================
// IntoPipeResult - pipeline entry conversion
// =============================================================================

/// Conversion of a pipeline entry value into a [`PipeResult`].
///
/// The first position of [`pipe_effect!`](crate::pipe_effect) accepts
/// anything implementing this trait:
///
/// - `PipeResult<T, R>` is passed through unchanged
/// - `SideEffect<R>` becomes an already-halted pipeline, so no stage runs
/// - Primitive types (`i32`, `String`, `bool`, ...) become `Value`s
/// - Arbitrary user types can opt in by wrapping in [`Pure`]
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{IntoPipeResult, PipeResult};
///
/// let from_value: PipeResult<i32> = 42.into_pipe_result();
/// assert_eq!(from_value.value(), Some(42));
/// ```
pub trait IntoPipeResult<T, R> {
    /// Converts `self` into a `PipeResult`.
    fn into_pipe_result(self) -> PipeResult<T, R>;
}

impl<T, R> IntoPipeResult<T, R> for PipeResult<T, R> {
    #[inline]
    fn into_pipe_result(self) -> Self {
        self
    }
}

impl<T, R> IntoPipeResult<T, R> for SideEffect<R> {
    /// An existing effect enters the pipeline already halted.
    #[inline]
    fn into_pipe_result(self) -> PipeResult<T, R> {
        PipeResult::Effect(self)
    }
}

/// Wrapper to lift an arbitrary value into a pipeline as a `Value`.
///
/// Primitive types convert directly; everything else is wrapped in `Pure`
/// to state the intent explicitly at the pipeline entrance.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{IntoPipeResult, PipeResult, Pure};
///
/// struct Order {
///     total: u32,
/// }
///
/// let result: PipeResult<Order, String> = Pure(Order { total: 99 }).into_pipe_result();
/// assert_eq!(result.value().map(|order| order.total), Some(99));
/// ```
pub struct Pure<A>(pub A);

impl<A> Pure<A> {
    /// Creates a new `Pure` wrapper.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Extracts the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A, R> IntoPipeResult<A, R> for Pure<A> {
    #[inline]
    fn into_pipe_result(self) -> PipeResult<A, R> {
        PipeResult::Value(self.0)
    }
}

/// Implements `IntoPipeResult` for primitive types, lifting them as `Value`s.
macro_rules! impl_into_pipe_result_for_primitives {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl<R> IntoPipeResult<$primitive, R> for $primitive {
                #[inline]
                fn into_pipe_result(self) -> PipeResult<$primitive, R> {
                    PipeResult::Value(self)
                }
            }
        )*
    };
}

impl_into_pipe_result_for_primitives!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String, &'static str
);

// Static assertions to verify PipeResult stays on one thread
static_assertions::assert_not_impl_any!(PipeResult<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(PipeResult<String, i32>: Send, Sync);
