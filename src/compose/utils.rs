//! Small combinators used when wiring pipelines together.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: ignores its argument, always yields one value
//! - [`flip`]: swaps the two arguments of a binary function
//!
//! None of these do anything a closure could not, but naming them keeps
//! pipeline definitions free of `|x| x` noise and gives the law suites
//! a unit element to state composition identities against.

/// Returns its argument as-is.
///
/// The unit element of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave as `f`. Useful as a
/// do-nothing branch where an API expects a function.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::identity;
///
/// assert_eq!(identity(7), 7);
/// assert_eq!(identity("as-is"), "as-is");
/// ```
///
/// A neutral stage leaves a pipeline's result alone:
///
/// ```
/// use fp_pack::compose::identity;
/// use fp_pack::pipe;
///
/// fn triple(x: i32) -> i32 { x * 3 }
///
/// assert_eq!(pipe!(4, identity, triple, identity), triple(4));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its argument and always returns the
/// given value.
///
/// The value is cloned per call, so the returned closure can be invoked
/// any number of times. The input type is an independent parameter and
/// is usually pinned down by the call site.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::constant;
///
/// let fallback = constant::<_, i32>("n/a");
/// assert_eq!(fallback(0), "n/a");
/// assert_eq!(fallback(9000), "n/a");
/// ```
///
/// Blanking out sequence elements:
///
/// ```
/// use fp_pack::compose::constant;
/// use fp_pack::stream::LazySequence;
///
/// let masked = LazySequence::from_iterable(1..=3).map(constant(0));
/// assert_eq!(masked.try_into_vec().unwrap(), vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
where
    T: Clone,
{
    move |_| value.clone()
}

/// Reverses the argument order of a binary function.
///
/// `flip(f)(a, b)` is `f(b, a)`; flipping twice restores the original
/// behavior. Handy with [`partial!`](crate::partial) and the curry
/// macros when the argument worth fixing sits in the wrong position.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::flip;
///
/// fn repeat(text: &str, times: usize) -> String {
///     text.repeat(times)
/// }
///
/// let repeat_flipped = flip(repeat);
/// assert_eq!(repeat_flipped(3, "ab"), "ababab");
/// ```
///
/// Flipping twice is the original function:
///
/// ```
/// use fp_pack::compose::flip;
///
/// fn ratio(top: f64, bottom: f64) -> f64 { top / bottom }
///
/// let back = flip(flip(ratio));
/// assert_eq!(back(9.0, 3.0), ratio(9.0, 3.0));
/// ```
#[inline]
pub fn flip<A, B, C, F>(binary: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| binary(first, second)
}

/// Marker type for open argument slots.
///
/// Exists so that `fp_pack::compose::__` is a nameable item; the
/// [`partial!`](crate::partial) macro itself matches `__` as a literal
/// token and never looks at this type.
///
/// # Examples
///
/// ```
/// use fp_pack::partial;
///
/// fn power(base: u32, exponent: u32) -> u32 { base.pow(exponent) }
///
/// // `__` is written directly in the call, not imported.
/// let squared = partial!(power, __, 2);
/// assert_eq!(squared(12), 144);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder written where an argument stays open.
///
/// **Do not import this** when using [`partial!`](crate::partial): the
/// macro matches `__` as a literal token, and an imported binding turns
/// it into an ordinary expression that selects the wrong macro arm.
///
/// The name is a double underscore because `macro_rules!` cannot match
/// a lone `_` as a literal token.
///
/// # Examples
///
/// ```
/// use fp_pack::partial;
///
/// fn nth_char(text: String, index: usize) -> Option<char> {
///     text.chars().nth(index)
/// }
///
/// let initial = partial!(nth_char, __, 0);
/// assert_eq!(initial(String::from("stream")), Some('s'));
/// ```
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
