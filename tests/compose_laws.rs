//! Property-based tests for the composition algebra.
//!
//! Checks the laws the composition utilities promise:
//! - associativity and the identity laws of compose!
//! - pipe!/compose! duality and pipeline splitting
//! - agreement between the macros and the fixed-arity forms
//! - currying and partial application equivalences

#![cfg(feature = "compose")]

use fp_pack::compose::{compose2, compose3, constant, flip, identity, pipe2, pipe5};
use fp_pack::{compose, curry2, curry3, partial, pipe};
use proptest::prelude::*;

// =============================================================================
// compose! laws
// =============================================================================

proptest! {
    /// compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(4);
        let h = |x: i32| x.wrapping_sub(3);

        let left_nested = compose!(f, compose!(g, h));
        let right_nested = compose!(compose!(f, g), h);

        prop_assert_eq!(left_nested(value), right_nested(value));
    }

    /// compose!(identity, f) == f
    #[test]
    fn prop_compose_left_identity(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_mul(3);

        let with_unit = compose!(identity, f);

        prop_assert_eq!(with_unit(value), f(value));
    }

    /// compose!(f, identity) == f
    #[test]
    fn prop_compose_right_identity(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_mul(3);

        let with_unit = compose!(f, identity);

        prop_assert_eq!(with_unit(value), f(value));
    }

    /// Composition order: compose!(f, g)(x) == f(g(x))
    #[test]
    fn prop_compose_order(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(10);
        let g = |x: i32| x.wrapping_mul(8);

        let composed = compose!(f, g);

        prop_assert_eq!(composed(value), f(g(value)));
    }
}

// =============================================================================
// pipe! laws
// =============================================================================

proptest! {
    /// pipe!(x, f, g) == compose!(g, f)(x)
    #[test]
    fn prop_pipe_compose_duality(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(12);

        let piped = pipe!(value, f, g);
        let composed = compose!(g, f)(value);

        prop_assert_eq!(piped, composed);
    }

    /// pipe!(x, identity) == x
    #[test]
    fn prop_pipe_identity(value in any::<i32>()) {
        prop_assert_eq!(pipe!(value, identity), value);
    }

    /// Pipe application order: pipe!(x, f, g) == g(f(x))
    #[test]
    fn prop_pipe_order(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(7);
        let g = |x: i32| x.wrapping_mul(3);

        prop_assert_eq!(pipe!(value, f, g), g(f(value)));
    }

    /// Splitting a pipeline at any stage yields the same result
    #[test]
    fn prop_pipe_splitting(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(10);
        let h = |x: i32| x.wrapping_sub(5);

        let all_at_once = pipe!(value, f, g, h);
        let split = pipe!(pipe!(value, f, g), h);

        prop_assert_eq!(all_at_once, split);
    }
}

// =============================================================================
// Fixed-arity agreement
// =============================================================================

proptest! {
    /// pipe2 agrees with pipe!
    #[test]
    fn prop_pipe2_matches_macro(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(14);

        prop_assert_eq!(pipe2(value, f, g), pipe!(value, f, g));
    }

    /// pipe5 agrees with pipe!
    #[test]
    fn prop_pipe5_matches_macro(value in any::<i32>()) {
        let f1 = |x: i32| x.wrapping_add(5);
        let f2 = |x: i32| x.wrapping_mul(7);
        let f3 = |x: i32| x.wrapping_sub(3);
        let f4 = |x: i32| x.wrapping_mul(x);
        let f5 = |x: i32| x.wrapping_add(10);

        prop_assert_eq!(
            pipe5(value, f1, f2, f3, f4, f5),
            pipe!(value, f1, f2, f3, f4, f5)
        );
    }

    /// compose2 agrees with compose!
    #[test]
    fn prop_compose2_matches_macro(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(11);

        prop_assert_eq!(compose2(f, g)(value), compose!(f, g)(value));
    }

    /// compose3 agrees with nested compose2
    #[test]
    fn prop_compose3_matches_nested_compose2(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(13);
        let h = |x: i32| x.wrapping_sub(3);

        prop_assert_eq!(
            compose3(f, g, h)(value),
            compose2(f, compose2(g, h))(value)
        );
    }
}

// =============================================================================
// constant laws
// =============================================================================

proptest! {
    /// constant(k)(x) == k for all x
    #[test]
    fn prop_constant_ignores_input(fixed in any::<i32>(), probe in any::<i32>()) {
        let always = constant(fixed);
        prop_assert_eq!(always(probe), fixed);
    }

    /// compose!(constant(k), f) == constant(k)
    #[test]
    fn prop_constant_absorbs_composition(fixed in any::<i32>(), probe in any::<i32>()) {
        let f = |x: i32| x.wrapping_mul(21);
        let composed = compose!(constant(fixed), f);

        prop_assert_eq!(composed(probe), fixed);
    }
}

// =============================================================================
// flip laws
// =============================================================================

proptest! {
    /// flip(flip(f)) == f
    #[test]
    fn prop_flip_involution(first in any::<i32>(), second in any::<i32>()) {
        let gap = |left: i32, right: i32| left.wrapping_sub(right);
        let double_flipped = flip(flip(gap));

        prop_assert_eq!(double_flipped(first, second), gap(first, second));
    }

    /// flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_swaps(first in any::<i32>(), second in any::<i32>()) {
        let gap = |left: i32, right: i32| left.wrapping_sub(right);
        let flipped = flip(gap);

        prop_assert_eq!(flipped(first, second), gap(second, first));
    }
}

// =============================================================================
// curry! laws
// =============================================================================

proptest! {
    /// curry2!(f)(a)(b) == f(a, b)
    #[test]
    fn prop_curry2_equivalence(first in any::<i32>(), second in any::<i32>()) {
        fn plus(a: i32, b: i32) -> i32 {
            a.wrapping_add(b)
        }

        let curried = curry2!(plus);

        prop_assert_eq!(curried(first)(second), plus(first, second));
    }

    /// curry3!(f)(a)(b)(c) == f(a, b, c)
    #[test]
    fn prop_curry3_equivalence(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>()
    ) {
        fn combine(a: i32, b: i32, c: i32) -> i32 {
            a.wrapping_add(b).wrapping_mul(c)
        }

        let curried = curry3!(combine);

        prop_assert_eq!(curried(first)(second)(third), combine(first, second, third));
    }

    /// Partially applied curried functions are reusable
    #[test]
    fn prop_curry2_partial_application_reusable(
        fixed in any::<i32>(),
        input_a in any::<i32>(),
        input_b in any::<i32>()
    ) {
        fn plus(a: i32, b: i32) -> i32 {
            a.wrapping_add(b)
        }

        let plus_fixed = curry2!(plus)(fixed);

        prop_assert_eq!(plus_fixed(input_a), plus(fixed, input_a));
        prop_assert_eq!(plus_fixed(input_b), plus(fixed, input_b));
    }
}

// =============================================================================
// partial! laws
// =============================================================================

proptest! {
    /// partial!(f, a, __)(b) == f(a, b)
    #[test]
    fn prop_partial_first_fixed(first in any::<i32>(), second in any::<i32>()) {
        fn subtract(a: i32, b: i32) -> i32 {
            a.wrapping_sub(b)
        }

        let partial_applied = partial!(subtract, first, __);

        prop_assert_eq!(partial_applied(second), subtract(first, second));
    }

    /// partial!(f, __, b)(a) == f(a, b)
    #[test]
    fn prop_partial_second_fixed(first in any::<i32>(), second in any::<i32>()) {
        fn subtract(a: i32, b: i32) -> i32 {
            a.wrapping_sub(b)
        }

        let partial_applied = partial!(subtract, __, second);

        prop_assert_eq!(partial_applied(first), subtract(first, second));
    }

    /// Partial application agrees with currying when fixing the first argument
    #[test]
    fn prop_partial_matches_curry(first in any::<i32>(), second in any::<i32>()) {
        fn times(a: i32, b: i32) -> i32 {
            a.wrapping_mul(b)
        }

        let via_partial = partial!(times, first, __);
        let via_curry = curry2!(times)(first);

        prop_assert_eq!(via_partial(second), via_curry(second));
    }
}

// =============================================================================
// Cross-macro laws
// =============================================================================

proptest! {
    /// A pipeline of curried stages agrees with direct application
    #[test]
    fn prop_pipeline_of_curried_stages(value in any::<i32>()) {
        fn plus(a: i32, b: i32) -> i32 {
            a.wrapping_add(b)
        }
        fn times(a: i32, b: i32) -> i32 {
            a.wrapping_mul(b)
        }

        let plus_ten = curry2!(plus)(10);
        let triple = curry2!(times)(3);

        let piped = pipe!(value, plus_ten, triple);
        let direct = times(3, plus(10, value));

        prop_assert_eq!(piped, direct);
    }

    /// compose! distributes over pipe! stage boundaries
    #[test]
    fn prop_compose_stage_in_pipe(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(2);
        let g = |x: i32| x.wrapping_mul(5);
        let h = |x: i32| x.wrapping_sub(1);

        let fused = pipe!(value, compose!(g, f), h);
        let flat = pipe!(value, f, g, h);

        prop_assert_eq!(fused, flat);
    }
}
