//! `SideEffect` - a deferred effect used to short-circuit pipelines.
//!
//! A [`SideEffect`] wraps an effectful computation without executing it.
//! Pipeline stages return one to signal "stop transforming and hand this
//! effect to the caller"; the thunk stays cold until the caller decides
//! to run it at the edge of the program.
//!
//! # Halting, not failing
//!
//! `SideEffect` describes an effect rather than executing it. Unlike an
//! error, it is not a failure: it is a voluntary early exit carrying work
//! that should happen instead of the rest of the pipeline. Panics are not
//! caught anywhere in this module; a panicking thunk propagates to the
//! caller like any other panic.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::effect::SideEffect;
//!
//! let effect = SideEffect::of(|| 42);
//! assert_eq!(effect.run(), 42);
//! ```
//!
//! Nothing runs before `run`:
//!
//! ```rust
//! use fp_pack::effect::SideEffect;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let ran = Rc::new(Cell::new(false));
//! let witness = Rc::clone(&ran);
//!
//! let effect = SideEffect::of(move || {
//!     witness.set(true);
//!     "done"
//! });
//!
//! assert!(!ran.get());
//! assert_eq!(effect.run(), "done");
//! assert!(ran.get());
//! ```

use std::fmt;

/// A deferred effect that short-circuits a pipeline when returned by a stage.
///
/// `SideEffect<R>` wraps a thunk producing a value of type `R` together with
/// an optional diagnostic label. The thunk is executed at most once, by
/// [`run`](Self::run), which consumes the container. Once constructed, a
/// `SideEffect` is never mutated; combinators like [`map`](Self::map) build
/// a new container around the old thunk.
///
/// # Type Parameters
///
/// - `R`: The type of the value produced when the effect is executed.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::SideEffect;
///
/// let effect = SideEffect::labeled("fallback", || vec![0_i32; 3]);
/// assert_eq!(effect.label(), Some("fallback"));
/// assert_eq!(effect.run(), vec![0, 0, 0]);
/// ```
pub struct SideEffect<R> {
    /// The deferred computation producing a value of type `R`.
    effect: Box<dyn FnOnce() -> R>,
    /// Optional diagnostic label describing the effect.
    label: Option<String>,
}

impl<R: 'static> SideEffect<R> {
    /// Creates a side effect from a thunk, without a label.
    ///
    /// The thunk will not be executed until [`run`](Self::run) is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::of(|| 21 * 2);
    /// assert_eq!(effect.label(), None);
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn of<F>(effect: F) -> Self
    where
        F: FnOnce() -> R + 'static,
    {
        Self {
            effect: Box::new(effect),
            label: None,
        }
    }

    /// Creates a side effect from a thunk, with a diagnostic label.
    ///
    /// The label identifies the effect when inspecting a halted pipeline;
    /// it has no influence on execution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::labeled("cache-miss", || "default".to_string());
    /// assert_eq!(effect.label(), Some("cache-miss"));
    /// ```
    pub fn labeled<S, F>(label: S, effect: F) -> Self
    where
        S: Into<String>,
        F: FnOnce() -> R + 'static,
    {
        Self {
            effect: Box::new(effect),
            label: Some(label.into()),
        }
    }

    /// Returns the diagnostic label, if one was attached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let unlabeled = SideEffect::of(|| 1);
    /// assert_eq!(unlabeled.label(), None);
    ///
    /// let labeled = SideEffect::labeled("retry", || 1);
    /// assert_eq!(labeled.label(), Some("retry"));
    /// ```
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Executes the deferred effect and returns its result.
    ///
    /// Consuming `self` guarantees the thunk runs at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::of(|| "hello".len());
    /// assert_eq!(effect.run(), 5);
    /// ```
    pub fn run(self) -> R {
        (self.effect)()
    }

    /// Transforms the eventual result of the effect, preserving laziness.
    ///
    /// The original thunk is not executed; the returned `SideEffect` runs
    /// it and applies `function` to its output when executed. The label is
    /// carried over unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::labeled("count", || 21).map(|count| count * 2);
    /// assert_eq!(effect.label(), Some("count"));
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn map<S, F>(self, function: F) -> SideEffect<S>
    where
        F: FnOnce(R) -> S + 'static,
        S: 'static,
    {
        let Self { effect, label } = self;
        SideEffect {
            effect: Box::new(move || function(effect())),
            label,
        }
    }

    /// Converts the effect's payload type via [`Into`], preserving laziness.
    ///
    /// Used when a stage's effect payload needs to flow into a pipeline
    /// whose effect type is a wider union. The conversion happens after the
    /// thunk runs, so nothing executes early.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let narrow: SideEffect<&'static str> = SideEffect::of(|| "halt");
    /// let wide: SideEffect<String> = narrow.widen();
    /// assert_eq!(wide.run(), "halt".to_string());
    /// ```
    pub fn widen<S>(self) -> SideEffect<S>
    where
        R: Into<S>,
        S: 'static,
    {
        self.map(Into::into)
    }
}

// =============================================================================
// Debug
// =============================================================================

impl<R> fmt::Debug for SideEffect<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => formatter.debug_tuple("SideEffect").field(label).finish(),
            None => formatter.write_str("SideEffect(<deferred>)"),
        }
    }
}

// Static assertions to verify SideEffect stays on one thread
static_assertions::assert_not_impl_any!(SideEffect<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(SideEffect<String>: Send, Sync, Clone);
