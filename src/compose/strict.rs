//! Fixed-arity, fully typed forms of piping and composition.
//!
//! [`pipe!`](crate::pipe) and [`compose!`](crate::compose!) accept any
//! number of stages and rely on inference at each recursive expansion.
//! The functions here spell the same shapes out for two to five stages
//! with every intermediate type named as a generic parameter, so a
//! mismatched pair of stages is reported against the exact parameter
//! that disagrees rather than inside a macro expansion. They are
//! otherwise interchangeable with the macros.
//!
//! All stages are [`FnOnce`]: each runs exactly once, and one-shot
//! stages (such as those from
//! [`stream::point_free`](crate::stream::point_free)) are accepted.

/// Applies two stages to a value, left to right.
///
/// `pipe2(x, f, g)` is `g(f(x))`, with the intermediate type pinned by
/// the signature.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::pipe2;
///
/// let shifted = pipe2(8, |x: i32| x * 3, |x: i32| x - 5);
/// assert_eq!(shifted, 19);
/// ```
#[inline]
pub fn pipe2<A, B, C, F1, F2>(input: A, first: F1, second: F2) -> C
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
{
    second(first(input))
}

/// Applies three stages to a value, left to right.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::pipe3;
///
/// let result = pipe3(
///     "fp-pack",
///     str::len,
///     |length: usize| length * 10,
///     |scaled: usize| scaled.to_string(),
/// );
/// assert_eq!(result, "70");
/// ```
#[inline]
pub fn pipe3<A, B, C, D, F1, F2, F3>(input: A, first: F1, second: F2, third: F3) -> D
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
{
    third(second(first(input)))
}

/// Applies four stages to a value, left to right.
#[inline]
pub fn pipe4<A, B, C, D, E, F1, F2, F3, F4>(
    input: A,
    first: F1,
    second: F2,
    third: F3,
    fourth: F4,
) -> E
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
{
    fourth(third(second(first(input))))
}

/// Applies five stages to a value, left to right.
#[inline]
pub fn pipe5<A, B, C, D, E, F, F1, F2, F3, F4, F5>(
    input: A,
    first: F1,
    second: F2,
    third: F3,
    fourth: F4,
    fifth: F5,
) -> F
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
{
    fifth(fourth(third(second(first(input)))))
}

/// Composes two functions right to left.
///
/// `compose2(f, g)` is `|x| f(g(x))`, matching the argument order of
/// [`compose!`](crate::compose!): the rightmost function runs first.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::compose2;
///
/// let subtract_two = |x: i32| x - 2;
/// let triple = |x: i32| x * 3;
///
/// let composed = compose2(subtract_two, triple);
/// assert_eq!(composed(6), 16);
/// ```
#[inline]
pub fn compose2<A, B, C, F1, F2>(outer: F2, inner: F1) -> impl FnOnce(A) -> C
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
{
    move |value| outer(inner(value))
}

/// Composes three functions right to left.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::compose3;
///
/// let composed = compose3(
///     |s: String| s.len(),
///     |x: i32| x.to_string(),
///     |x: i32| x * 111,
/// );
/// assert_eq!(composed(9), 3);
/// ```
#[inline]
pub fn compose3<A, B, C, D, F1, F2, F3>(outer: F3, middle: F2, inner: F1) -> impl FnOnce(A) -> D
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
{
    move |value| outer(middle(inner(value)))
}

/// Composes four functions right to left.
#[inline]
pub fn compose4<A, B, C, D, E, F1, F2, F3, F4>(
    outer: F4,
    third: F3,
    second: F2,
    inner: F1,
) -> impl FnOnce(A) -> E
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
{
    move |value| outer(third(second(inner(value))))
}

/// Composes five functions right to left.
#[inline]
pub fn compose5<A, B, C, D, E, F, F1, F2, F3, F4, F5>(
    outer: F5,
    fourth: F4,
    third: F3,
    second: F2,
    inner: F1,
) -> impl FnOnce(A) -> F
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
{
    move |value| outer(fourth(third(second(inner(value)))))
}
