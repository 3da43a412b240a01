//! The `partial!` macro: fix some arguments, leave the rest open.

/// Partially applies a function, with `__` marking the open slots.
///
/// Every `__` stays a parameter of the resulting closure; every other
/// position is evaluated once and baked in. Fixing all slots yields a
/// zero-argument thunk, fixing none yields a closure equivalent to the
/// original function.
///
/// **Do not import `fp_pack::compose::__`.** The macro matches `__` as
/// a literal token; an imported binding is an ordinary expression and
/// selects a fixing arm instead of leaving the slot open.
///
/// # Forms
///
/// For a two-argument function `f`:
///
/// - `partial!(f, x, __)` is `|b| f(x, b)`
/// - `partial!(f, __, y)` is `|a| f(a, y)`
/// - `partial!(f, x, y)` is `|| f(x, y)`
/// - `partial!(f, __, __)` is `|a, b| f(a, b)`
///
/// Three- and four-argument functions follow the same scheme with every
/// placement of `__` supported.
///
/// # Capture requirements
///
/// The function must be [`Fn`] and each fixed value [`Clone`]: the
/// returned closure is itself [`Fn`], so fixed values are cloned out on
/// every call.
///
/// # Examples
///
/// Fixing the first argument:
///
/// ```
/// use fp_pack::partial;
///
/// fn repeat(text: &str, times: usize) -> String { text.repeat(times) }
///
/// let ha = partial!(repeat, "ha", __);
/// assert_eq!(ha(3), "hahaha");
/// assert_eq!(ha(1), "ha");
/// ```
///
/// Fixing the second argument:
///
/// ```
/// use fp_pack::partial;
///
/// fn shift(value: i32, by: i32) -> i32 { value + by }
///
/// let bump = partial!(shift, __, 1);
/// assert_eq!(bump(41), 42);
/// ```
///
/// A middle placeholder, with the fixed values cloned per call:
///
/// ```
/// use fp_pack::partial;
///
/// fn wrap(left: String, text: String, right: String) -> String {
///     format!("{left}{text}{right}")
/// }
///
/// let bracketed = partial!(wrap, String::from("["), __, String::from("]"));
/// assert_eq!(bracketed(String::from("core")), "[core]");
/// assert_eq!(bracketed(String::from("next")), "[next]");
/// ```
///
/// All arguments fixed makes a thunk:
///
/// ```
/// use fp_pack::partial;
///
/// fn area(width: u32, height: u32) -> u32 { width * height }
///
/// let unit_square = partial!(area, 1, 1);
/// assert_eq!(unit_square(), 1);
/// ```
///
/// A partially applied function is a pipeline stage:
///
/// ```
/// use fp_pack::{partial, pipe};
///
/// fn clamp(value: i32, low: i32, high: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// assert_eq!(pipe!(42, partial!(clamp, __, 0, 10)), 10);
/// ```
#[macro_export]
macro_rules! partial {
    // Four-argument forms. Within one arity, arms keeping more slots
    // open must come first: `__` is itself a valid expression, so a
    // `$expr` matcher would otherwise capture the placeholder.

    // _ _ _ _
    ($callee:expr, __, __, __, __ $(,)?) => {{
        let callee = $callee;
        move |first, second, third, fourth| callee(first, second, third, fourth)
    }};

    // x _ _ _
    ($callee:expr, $first:expr, __, __, __ $(,)?) => {{
        let callee = $callee;
        let first = $first;
        move |second, third, fourth| callee(first.clone(), second, third, fourth)
    }};

    // _ x _ _
    ($callee:expr, __, $second:expr, __, __ $(,)?) => {{
        let callee = $callee;
        let second = $second;
        move |first, third, fourth| callee(first, second.clone(), third, fourth)
    }};

    // _ _ x _
    ($callee:expr, __, __, $third:expr, __ $(,)?) => {{
        let callee = $callee;
        let third = $third;
        move |first, second, fourth| callee(first, second, third.clone(), fourth)
    }};

    // _ _ _ x
    ($callee:expr, __, __, __, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let fourth = $fourth;
        move |first, second, third| callee(first, second, third, fourth.clone())
    }};

    // x x _ _
    ($callee:expr, $first:expr, $second:expr, __, __ $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let second = $second;
        move |third, fourth| callee(first.clone(), second.clone(), third, fourth)
    }};

    // x _ x _
    ($callee:expr, $first:expr, __, $third:expr, __ $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let third = $third;
        move |second, fourth| callee(first.clone(), second, third.clone(), fourth)
    }};

    // x _ _ x
    ($callee:expr, $first:expr, __, __, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let fourth = $fourth;
        move |second, third| callee(first.clone(), second, third, fourth.clone())
    }};

    // _ x x _
    ($callee:expr, __, $second:expr, $third:expr, __ $(,)?) => {{
        let callee = $callee;
        let second = $second;
        let third = $third;
        move |first, fourth| callee(first, second.clone(), third.clone(), fourth)
    }};

    // _ x _ x
    ($callee:expr, __, $second:expr, __, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let second = $second;
        let fourth = $fourth;
        move |first, third| callee(first, second.clone(), third, fourth.clone())
    }};

    // _ _ x x
    ($callee:expr, __, __, $third:expr, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let third = $third;
        let fourth = $fourth;
        move |first, second| callee(first, second, third.clone(), fourth.clone())
    }};

    // x x x _
    ($callee:expr, $first:expr, $second:expr, $third:expr, __ $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let second = $second;
        let third = $third;
        move |fourth| callee(first.clone(), second.clone(), third.clone(), fourth)
    }};

    // x x _ x
    ($callee:expr, $first:expr, $second:expr, __, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let second = $second;
        let fourth = $fourth;
        move |third| callee(first.clone(), second.clone(), third, fourth.clone())
    }};

    // x _ x x
    ($callee:expr, $first:expr, __, $third:expr, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let third = $third;
        let fourth = $fourth;
        move |second| callee(first.clone(), second, third.clone(), fourth.clone())
    }};

    // _ x x x
    ($callee:expr, __, $second:expr, $third:expr, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let second = $second;
        let third = $third;
        let fourth = $fourth;
        move |first| callee(first, second.clone(), third.clone(), fourth.clone())
    }};

    // x x x x: thunk
    ($callee:expr, $first:expr, $second:expr, $third:expr, $fourth:expr $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let second = $second;
        let third = $third;
        let fourth = $fourth;
        move || callee(first.clone(), second.clone(), third.clone(), fourth.clone())
    }};

    // Three-argument forms.

    // _ _ _
    ($callee:expr, __, __, __ $(,)?) => {{
        let callee = $callee;
        move |first, second, third| callee(first, second, third)
    }};

    // x _ _
    ($callee:expr, $first:expr, __, __ $(,)?) => {{
        let callee = $callee;
        let first = $first;
        move |second, third| callee(first.clone(), second, third)
    }};

    // _ x _
    ($callee:expr, __, $second:expr, __ $(,)?) => {{
        let callee = $callee;
        let second = $second;
        move |first, third| callee(first, second.clone(), third)
    }};

    // _ _ x
    ($callee:expr, __, __, $third:expr $(,)?) => {{
        let callee = $callee;
        let third = $third;
        move |first, second| callee(first, second, third.clone())
    }};

    // x x _
    ($callee:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let second = $second;
        move |third| callee(first.clone(), second.clone(), third)
    }};

    // x _ x
    ($callee:expr, $first:expr, __, $third:expr $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let third = $third;
        move |second| callee(first.clone(), second, third.clone())
    }};

    // _ x x
    ($callee:expr, __, $second:expr, $third:expr $(,)?) => {{
        let callee = $callee;
        let second = $second;
        let third = $third;
        move |first| callee(first, second.clone(), third.clone())
    }};

    // x x x: thunk
    ($callee:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let second = $second;
        let third = $third;
        move || callee(first.clone(), second.clone(), third.clone())
    }};

    // Two-argument forms.

    // _ _
    ($callee:expr, __, __ $(,)?) => {{
        let callee = $callee;
        move |first, second| callee(first, second)
    }};

    // x _
    ($callee:expr, $first:expr, __ $(,)?) => {{
        let callee = $callee;
        let first = $first;
        move |second| callee(first.clone(), second)
    }};

    // _ x
    ($callee:expr, __, $second:expr $(,)?) => {{
        let callee = $callee;
        let second = $second;
        move |first| callee(first, second.clone())
    }};

    // x x: thunk
    ($callee:expr, $first:expr, $second:expr $(,)?) => {{
        let callee = $callee;
        let first = $first;
        let second = $second;
        move || callee(first.clone(), second.clone())
    }};
}

#[cfg(test)]
mod tests {
    fn scale(amount: i32, factor: i32) -> i32 {
        amount * factor
    }

    fn clamp(value: i32, low: i32, high: i32) -> i32 {
        value.max(low).min(high)
    }

    #[test]
    fn test_first_argument_fixed() {
        let of_nine = partial!(scale, 9, __);
        assert_eq!(of_nine(3), 27);
    }

    #[test]
    fn test_second_argument_fixed() {
        let doubled = partial!(scale, __, 2);
        assert_eq!(doubled(8), 16);
    }

    #[test]
    fn test_all_fixed_is_a_thunk() {
        let thunk = partial!(scale, 4, 6);
        assert_eq!(thunk(), 24);
    }

    #[test]
    fn test_all_open_matches_the_original() {
        let same = partial!(scale, __, __);
        assert_eq!(same(3, 5), scale(3, 5));
    }

    #[test]
    fn test_middle_slot_open() {
        let clamp_to_range = partial!(clamp, __, 0, 10);
        assert_eq!(clamp_to_range(-5), 0);
        assert_eq!(clamp_to_range(5), 5);
        assert_eq!(clamp_to_range(15), 10);
    }

    #[test]
    fn test_two_slots_open() {
        let clamp_below = partial!(clamp, __, __, 100);
        assert_eq!(clamp_below(250, 0), 100);
    }

    #[test]
    fn test_four_arguments_alternating() {
        let weave = |a: i32, b: i32, c: i32, d: i32| a * 1000 + b * 100 + c * 10 + d;
        let fixed_outer = partial!(weave, 1, __, __, 4);
        assert_eq!(fixed_outer(2, 3), 1234);
    }

    #[test]
    fn test_fixed_value_is_cloned_per_call() {
        let join = |prefix: String, suffix: &str| format!("{prefix}{suffix}");
        let with_prefix = partial!(join, String::from(">> "), __);
        assert_eq!(with_prefix("one"), ">> one");
        assert_eq!(with_prefix("two"), ">> two");
    }
}
