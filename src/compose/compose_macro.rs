//! Right-to-left function composition: the `compose!` macro.

/// Fuses a list of functions into one, applying the rightmost first.
///
/// `compose!(f, g, h)` returns a closure behaving as `|x| f(g(h(x)))`,
/// the mathematical reading of composition. Where
/// [`pipe!`](crate::pipe!) needs a starting value, `compose!` produces
/// a reusable function; pipelines that will run against more than one
/// input are usually built this way and named once.
///
/// # Forms
///
/// - `compose!(f)` is `f` itself
/// - `compose!(f, g)` behaves as `|x| f(g(x))`
/// - longer lists associate as `compose!(f, compose!(g, ...))`
///
/// A trailing comma is accepted.
///
/// # Laws
///
/// With [`identity`](crate::compose::identity):
///
/// - `compose!(f, identity)` and `compose!(identity, f)` both behave as `f`
/// - grouping is irrelevant: `compose!(f, compose!(g, h))` agrees with
///   `compose!(compose!(f, g), h)` on every input
///
/// # Calling convention
///
/// The returned closure captures every stage by value and implements
/// whichever of [`Fn`]/[`FnMut`]/[`FnOnce`] all stages support, so a
/// chain containing a one-shot stage is itself one-shot. Each stage's
/// output type must match the input type of the stage to its left; a
/// mismatch is reported at the pair that disagrees.
///
/// # Examples
///
/// The rightmost function runs first:
///
/// ```
/// use fp_pack::compose;
///
/// fn scale(x: i32) -> i32 { x * 10 }
/// fn offset(x: i32) -> i32 { x + 7 }
///
/// // offset first: scale(offset(2)) = scale(9) = 90
/// let adjusted = compose!(scale, offset);
/// assert_eq!(adjusted(2), 90);
/// ```
///
/// The composed function is reusable:
///
/// ```
/// use fp_pack::compose;
///
/// let grade = compose!(
///     |passed: bool| if passed { "pass" } else { "fail" },
///     |score: u32| score >= 60,
/// );
/// assert_eq!(grade(72), "pass");
/// assert_eq!(grade(41), "fail");
/// ```
///
/// Types flow right to left:
///
/// ```
/// use fp_pack::compose;
///
/// let digit_count = compose!(|s: String| s.len(), |x: u32| x.to_string());
/// assert_eq!(digit_count(12345), 5);
/// ```
///
/// Stage constructors from
/// [`stream::point_free`](crate::stream::point_free) compose into
/// reusable sequence transformers:
///
/// ```
/// use fp_pack::compose;
/// use fp_pack::stream::{LazySequence, point_free};
///
/// let middle = compose!(point_free::take(2), point_free::drop(2));
/// let window = middle(LazySequence::from_iterable([9, 8, 7, 6, 5]));
/// assert_eq!(window.try_into_vec().unwrap(), vec![7, 6]);
/// ```
///
/// Grouping does not change the result:
///
/// ```
/// use fp_pack::compose;
///
/// fn a(x: i32) -> i32 { x + 11 }
/// fn b(x: i32) -> i32 { x * 5 }
/// fn c(x: i32) -> i32 { x - 2 }
///
/// let flat = compose!(a, b, c);
/// let nested = compose!(a, compose!(b, c));
/// assert_eq!(flat(8), nested(8));
/// ```
#[macro_export]
macro_rules! compose {
    // A single function composes to itself.
    ($only:expr) => {
        $only
    };

    // compose!(f, g): g first, then f.
    ($after:expr, $before:expr $(,)?) => {{
        let after = $after;
        let before = $before;
        move |input| after(before(input))
    }};

    // Peel the leftmost function, compose the remainder.
    ($after:expr, $($remaining:expr),+ $(,)?) => {{
        let after = $after;
        let tail = $crate::compose!($($remaining),+);
        move |input| after(tail(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_single_function_is_unchanged() {
        let negate = compose!(|x: i32| -x);
        assert_eq!(negate(3), -3);
    }

    #[test]
    fn test_rightmost_runs_first() {
        // (4 + 6) squared, not 4 squared + 6.
        let composed = compose!(|x: i32| x * x, |x: i32| x + 6);
        assert_eq!(composed(4), 100);
    }

    #[test]
    fn test_three_stage_composition() {
        let composed = compose!(|x: i32| x - 1, |x: i32| x * 3, |x: i32| x + 2);
        // 5 + 2 = 7, 7 * 3 = 21, 21 - 1 = 20
        assert_eq!(composed(5), 20);
    }

    #[test]
    fn test_types_flow_right_to_left() {
        let composed = compose!(|s: String| s.len(), |x: u32| format!("{x:04}"));
        assert_eq!(composed(7), 4);
    }

    #[test]
    fn test_capturing_stage() {
        let step = 10;
        let composed = compose!(move |x: i32| x + step, |x: i32| x * 2);
        assert_eq!(composed(3), 16);
    }

    #[test]
    fn test_one_shot_chain() {
        let tag = String::from("total=");
        let render = move |x: i32| format!("{tag}{x}");
        let composed = compose!(render, |x: i32| x + 1);
        assert_eq!(composed(9), "total=10");
    }

    #[test]
    fn test_trailing_comma_is_accepted() {
        let composed = compose!(|x: i32| x + 1, |x: i32| x * 2,);
        assert_eq!(composed(4), 9);
    }
}
