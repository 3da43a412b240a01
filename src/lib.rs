//! # fp-pack
//!
//! Lazy sync/async sequences, pipeline composition, and a
//! short-circuiting side-effect protocol for functional Rust.
//!
//! The crate is the composition core of a functional utility kit:
//!
//! - **Lazy sequences**: [`LazySequence`](stream::LazySequence), a
//!   pull-based sequence that treats synchronous and asynchronous
//!   sources uniformly and never computes ahead of demand
//! - **Stream operators**: `take`, `drop`, `take_while`, `drop_while`,
//!   `append`, `prepend`, `chain` and friends, order-preserving and
//!   available both as methods and as curried pipeline stages
//! - **Function composition**: `compose!`, `pipe!`, `pipe_async!`,
//!   `partial!`, `curry!` macros plus strictly typed fixed-arity
//!   combinators
//! - **Side effects**: [`SideEffect`](effect::SideEffect) and
//!   [`PipeResult`](effect::PipeResult) for short-circuiting pipelines
//!   without exceptions
//!
//! ## Feature flags
//!
//! - `compose`: composition macros and the fixed-arity combinators
//! - `effect`: the `SideEffect` protocol and effect pipelines
//! - `stream`: lazy sequences and stream operators (pulls in `futures`)
//! - `full`: all of the above; `default` enables the same set
//!
//! ## Quick start
//!
//! ```rust
//! use fp_pack::prelude::*;
//!
//! let doubled = pipe!(21, |x: i32| x * 2);
//! assert_eq!(doubled, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// clippy 0.1.92 has a panic bug in redundant_closure_for_method_calls.
#![allow(clippy::redundant_closure_for_method_calls)]

/// Single-import surface for pipeline code.
///
/// ```rust
/// use fp_pack::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "stream")]
    pub use crate::stream::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "stream")]
pub mod stream;

#[cfg(all(test, feature = "compose"))]
mod tests {
    #[test]
    fn prelude_reaches_the_macros() {
        use crate::prelude::*;

        let tripled = pipe!(14, |value: i32| value * 3);
        assert_eq!(tripled, 42);
    }
}
