//! Left-to-right value threading: the `pipe!` macro.

/// Threads a value through a chain of single-argument functions,
/// leftmost stage first.
///
/// `pipe!(x, f, g, h)` expands to `h(g(f(x)))`. The macro nests plain
/// calls at expansion time, so the chain costs nothing at runtime and
/// every intermediate type is checked where two stages meet.
///
/// Reading order matches execution order, which is the reason to reach
/// for `pipe!` over [`compose!`](crate::compose!) when a concrete value
/// is already in hand: `pipe!(x, f, g)` and `compose!(g, f)(x)` agree.
///
/// # Forms
///
/// - `pipe!(x)` evaluates to `x` unchanged
/// - `pipe!(x, f)` evaluates to `f(x)`
/// - `pipe!(x, f, g, ...)` applies every stage in writing order
///
/// A trailing comma is accepted.
///
/// # Stage requirements
///
/// Each stage is called exactly once, so [`FnOnce`] is enough. Closures
/// that consume their captured environment work, as do the one-shot
/// stage constructors this crate builds elsewhere. A type mismatch is
/// reported at the exact pair of stages that disagrees rather than at
/// the chain as a whole.
///
/// # Examples
///
/// Execution order is writing order:
///
/// ```
/// use fp_pack::pipe;
///
/// fn halve(x: i32) -> i32 { x / 2 }
/// fn negate(x: i32) -> i32 { -x }
///
/// // halve(30) = 15, then negate(15) = -15
/// assert_eq!(pipe!(30, halve, negate), -15);
/// ```
///
/// The value may change type at any stage:
///
/// ```
/// use fp_pack::pipe;
///
/// let label = pipe!(
///     987,
///     |x: i32| x.to_string(),
///     |text: String| format!("#{text}"),
/// );
/// assert_eq!(label, "#987");
/// ```
///
/// One-shot stages are fine:
///
/// ```
/// use fp_pack::pipe;
///
/// let unit = String::from("ms");
/// let render = move |value: u64| format!("{value}{unit}");
/// assert_eq!(pipe!(250_u64, render), "250ms");
/// ```
///
/// Sequence stages from [`stream::point_free`](crate::stream::point_free)
/// thread the same way:
///
/// ```
/// use fp_pack::pipe;
/// use fp_pack::stream::{LazySequence, point_free};
///
/// let window = pipe!(
///     LazySequence::from_iterable(1..),
///     point_free::drop(2),
///     point_free::take(3),
/// );
/// assert_eq!(window.try_into_vec().unwrap(), vec![3, 4, 5]);
/// ```
///
/// Agreement with [`compose!`](crate::compose!):
///
/// ```
/// use fp_pack::{compose, pipe};
///
/// fn triple(x: i32) -> i32 { x * 3 }
/// fn decrement(x: i32) -> i32 { x - 1 }
///
/// assert_eq!(pipe!(7, triple, decrement), compose!(decrement, triple)(7));
/// ```
#[macro_export]
macro_rules! pipe {
    // No stages left.
    ($input:expr) => {
        $input
    };

    // Final stage.
    ($input:expr, $stage:expr $(,)?) => {
        $stage($input)
    };

    // Fold the first stage into the input, recurse on the rest.
    ($input:expr, $stage:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($stage($input), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_bare_value_passes_through() {
        assert_eq!(pipe!("untouched"), "untouched");
    }

    #[test]
    fn test_single_stage_applies() {
        assert_eq!(pipe!(6, |x: i32| x * 7), 42);
    }

    #[test]
    fn test_stages_run_in_writing_order() {
        // Subtraction first: (20 - 3) * 2 = 34, not 20 * 2 - 3.
        let result = pipe!(20, |x: i32| x - 3, |x: i32| x * 2);
        assert_eq!(result, 34);
    }

    #[test]
    fn test_type_changes_between_stages() {
        let length = pipe!(90210, |x: i32| x.to_string(), |s: String| s.len());
        assert_eq!(length, 5);
    }

    #[test]
    fn test_long_chain() {
        let chained = pipe!(
            1,
            |x: i32| x + 1,
            |x: i32| x * 10,
            |x: i32| x - 5,
            |x: i32| x / 3,
        );
        assert_eq!(chained, 5);
    }

    #[test]
    fn test_trailing_comma_is_accepted() {
        assert_eq!(pipe!(1, |x: i32| x + 1,), 2);
    }

    #[test]
    fn test_consuming_capture_stage() {
        let tail = vec![1, 2, 3];
        let extend = move |mut head: Vec<i32>| {
            head.extend(tail);
            head
        };
        assert_eq!(pipe!(vec![0], extend), vec![0, 1, 2, 3]);
    }
}
