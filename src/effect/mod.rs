//! Short-circuiting side effects for pipelines.
//!
//! This module provides the `SideEffect` protocol: a way for a pipeline
//! stage to stop the chain by returning a deferred effect instead of a
//! value, without exceptions and without running the effect early.
//!
//! # Core Types
//!
//! - [`SideEffect`]: a deferred effect (thunk plus optional label) that
//!   runs at most once, when the caller decides
//! - [`PipeResult`]: a sum type holding either a flowing value or the
//!   effect that halted the pipeline
//! - [`IntoPipeResult`] / [`Pure`]: conversions for pipeline entry values
//!
//! # Halting
//!
//! A stage halts by returning [`PipeResult::Effect`]. From that point on,
//! every later stage is skipped and the effect container travels to the
//! caller unchanged:
//!
//! ```rust
//! use fp_pack::effect::PipeResult;
//! use fp_pack::pipe_effect;
//!
//! let halted: PipeResult<i32> = pipe_effect!(
//!     3,
//!     |x: i32| PipeResult::halt_labeled("odd-input", move || x),
//!     |x: i32| PipeResult::pure(x * 100),
//! );
//! assert_eq!(halted.effect_ref().and_then(|effect| effect.label()), Some("odd-input"));
//! assert_eq!(halted.run(), 3);
//! ```
//!
//! # Unwrapping at the edge
//!
//! Outside the chain, [`PipeResult::run`] resolves either arm to a plain
//! value, and [`PipeResult::fold`] applies one of two handlers. `run` only
//! exists once the value and effect payload types coincide, so unwrapping
//! a half-built chain is a compile error rather than a runtime surprise.
//!
//! # Error Behavior
//!
//! `SideEffect` is not an error channel. Panics raised by stages or by
//! effect thunks are never caught here; they propagate to the caller.

// =============================================================================
// SideEffect - deferred effects
// =============================================================================

mod side_effect;

pub use side_effect::SideEffect;

// =============================================================================
// PipeResult - stage outcomes and entry conversion
// =============================================================================

mod pipe_result;

pub use pipe_result::{IntoPipeResult, PipeResult, Pure};

// =============================================================================
// Pipeline Macros
// =============================================================================

mod pipe_effect_macro;

// The macros already live at the crate root via #[macro_export]; these
// re-exports let pipelines import them from the module path as well.
pub use crate::pipe_effect;
pub use crate::pipe_effect_strict;
