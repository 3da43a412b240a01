//! The `curry2!`..`curry4!` macros: one-argument-at-a-time application.
//!
//! Currying rewrites `f(a, b, c)` as `f(a)(b)(c)`, which is what turns
//! a multi-argument function into a family of pipeline stages: fixing
//! the first arguments yields a single-argument closure that slots
//! straight into [`pipe!`](crate::pipe!) and
//! [`compose!`](crate::compose!).
//!
//! # Sharing discipline
//!
//! Every level returns an [`Fn`] closure, so partially applied stages
//! can be stored and reused. To make that work the expansion parks the
//! function and the already-supplied arguments in `std::rc::Rc` and
//! clones them out per call (`Rc::unwrap_or_clone`), which also lets
//! non-`Copy` argument types participate at the cost of a `Clone`
//! bound.

/// Curries a two-argument function.
///
/// `curry2!(f)` builds a closure such that `curry2!(f)(a)(b)` equals
/// `f(a, b)`. Every level can be called repeatedly; supplied arguments
/// are cloned per call.
///
/// The function must be [`Fn`]; the first argument type must be
/// [`Clone`].
///
/// # Examples
///
/// ```
/// use fp_pack::curry2;
///
/// fn scale(factor: i32, value: i32) -> i32 { factor * value }
///
/// let times = curry2!(scale);
/// assert_eq!(times(4)(25), 100);
/// ```
///
/// A partial application is a reusable stage:
///
/// ```
/// use fp_pack::curry2;
///
/// fn concat(left: String, right: String) -> String {
///     format!("{left}{right}")
/// }
///
/// let prefixed = curry2!(concat)(String::from("fp-"));
/// assert_eq!(prefixed(String::from("pack")), "fp-pack");
/// assert_eq!(prefixed(String::from("lib")), "fp-lib");
/// ```
///
/// Curried stages feed pipelines:
///
/// ```
/// use fp_pack::{curry2, pipe};
///
/// fn scale(factor: i32, value: i32) -> i32 { factor * value }
///
/// let times = curry2!(scale);
/// assert_eq!(pipe!(5, times(10), times(2)), 100);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($callee:expr $(,)?) => {{
        let callee = ::std::rc::Rc::new($callee);
        move |first| {
            let callee = ::std::rc::Rc::clone(&callee);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                callee(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}

/// Curries a three-argument function.
///
/// `curry3!(f)(a)(b)(c)` equals `f(a, b, c)`; every intermediate stage
/// is reusable. The first two argument types must be [`Clone`].
///
/// # Examples
///
/// ```
/// use fp_pack::curry3;
///
/// fn lerp(from: f64, to: f64, t: f64) -> f64 {
///     from + (to - from) * t
/// }
///
/// let curried = curry3!(lerp);
/// assert!((curried(0.0)(10.0)(0.5) - 5.0).abs() < f64::EPSILON);
/// ```
///
/// Intermediate stages can be named and shared:
///
/// ```
/// use fp_pack::curry3;
///
/// fn between(low: i32, high: i32, value: i32) -> bool {
///     low <= value && value <= high
/// }
///
/// let at_least_zero = curry3!(between)(0);
/// let percentage = at_least_zero(100);
/// assert!(percentage(55));
/// assert!(!percentage(120));
/// ```
#[macro_export]
macro_rules! curry3 {
    ($callee:expr $(,)?) => {{
        let callee = ::std::rc::Rc::new($callee);
        move |first| {
            let callee = ::std::rc::Rc::clone(&callee);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let callee = ::std::rc::Rc::clone(&callee);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    callee(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function.
///
/// `curry4!(f)(a)(b)(c)(d)` equals `f(a, b, c, d)`. The first three
/// argument types must be [`Clone`].
///
/// # Examples
///
/// ```
/// use fp_pack::curry4;
///
/// fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
///     (u32::from(r) << 24) | (u32::from(g) << 16) | (u32::from(b) << 8) | u32::from(a)
/// }
///
/// let curried = curry4!(rgba);
/// assert_eq!(curried(0x12)(0x34)(0x56)(0x78), 0x1234_5678);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($callee:expr $(,)?) => {{
        let callee = ::std::rc::Rc::new($callee);
        move |first| {
            let callee = ::std::rc::Rc::clone(&callee);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let callee = ::std::rc::Rc::clone(&callee);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    let callee = ::std::rc::Rc::clone(&callee);
                    let first = ::std::rc::Rc::clone(&first);
                    let second = ::std::rc::Rc::clone(&second);
                    let third = ::std::rc::Rc::new(third);
                    move |fourth| {
                        callee(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&third)),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
