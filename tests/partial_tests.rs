//! Slot-fixing tests for the partial! macro.
//!
//! Fixing any subset of a function's arguments, with `__` marking the
//! slots left open, from thunks up to four-argument forms.

#![cfg(feature = "compose")]

// =============================================================================
// Two-argument functions
// =============================================================================

mod arity_two {
    use fp_pack::partial;

    fn interest(principal: i32, rate_percent: i32) -> i32 {
        principal * rate_percent / 100
    }

    #[test]
    fn test_first_slot_fixed() {
        let on_two_thousand = partial!(interest, 2_000, __);

        assert_eq!(on_two_thousand(5), 100);
        assert_eq!(on_two_thousand(25), 500);
    }

    #[test]
    fn test_second_slot_fixed() {
        let at_seven_percent = partial!(interest, __, 7);

        assert_eq!(at_seven_percent(1_000), 70);
        assert_eq!(at_seven_percent(300), 21);
    }

    #[test]
    fn test_both_slots_fixed_makes_a_thunk() {
        let snapshot = partial!(interest, 500, 10);
        assert_eq!(snapshot(), 50);
    }

    #[test]
    fn test_both_slots_open_matches_the_original() {
        let reopened = partial!(interest, __, __);

        assert_eq!(reopened(1_000, 3), interest(1_000, 3));
        assert_eq!(reopened(250, 40), interest(250, 40));
    }

    #[test]
    fn test_fixed_and_open_positions_do_not_swap() {
        fn grow(base: u32, times: u32) -> u32 {
            base * 10u32.pow(times)
        }

        let three_grown = partial!(grow, 3, __);
        let grown_twice = partial!(grow, __, 2);

        assert_eq!(three_grown(3), 3_000);
        assert_eq!(grown_twice(7), 700);
    }

    #[test]
    fn test_stage_survives_many_calls() {
        let of_thousand = partial!(interest, 1_000, __);

        for rate in 0..50 {
            assert_eq!(of_thousand(rate), rate * 10);
        }
    }

    #[test]
    fn test_owned_fixed_argument_is_cloned_per_call() {
        fn tag(label: String, value: i32) -> String {
            format!("[{label}] {value}")
        }

        let queued = partial!(tag, String::from("queue"), __);

        assert_eq!(queued(7), "[queue] 7");
        assert_eq!(queued(8), "[queue] 8");
    }
}

// =============================================================================
// Three-argument functions
// =============================================================================

mod arity_three {
    use fp_pack::partial;

    fn digits3(hundreds: i32, tens: i32, ones: i32) -> i32 {
        hundreds * 100 + tens * 10 + ones
    }

    #[test]
    fn test_each_single_slot_fixed() {
        let nine_hundred = partial!(digits3, 9, __, __);
        let ninety = partial!(digits3, __, 9, __);
        let nine = partial!(digits3, __, __, 9);

        assert_eq!(nine_hundred(5, 1), 951);
        assert_eq!(ninety(5, 1), 591);
        assert_eq!(nine(5, 1), 519);
    }

    #[test]
    fn test_each_single_slot_open() {
        assert_eq!(partial!(digits3, 9, 5, __)(1), 951);
        assert_eq!(partial!(digits3, 9, __, 1)(5), 951);
        assert_eq!(partial!(digits3, __, 5, 1)(9), 951);
    }

    #[test]
    fn test_all_slots_fixed_makes_a_thunk() {
        let snapshot = partial!(digits3, 3, 2, 1);
        assert_eq!(snapshot(), 321);
    }

    #[test]
    fn test_all_slots_open_matches_the_original() {
        let reopened = partial!(digits3, __, __, __);
        assert_eq!(reopened(7, 8, 9), digits3(7, 8, 9));
    }
}

// =============================================================================
// Four-argument functions
// =============================================================================

mod arity_four {
    use fp_pack::partial;

    fn pack_bytes(a: u32, b: u32, c: u32, d: u32) -> u32 {
        (a << 24) | (b << 16) | (c << 8) | d
    }

    #[test]
    fn test_alternating_open_slots() {
        let odd_fixed = partial!(pack_bytes, 0xAA, __, 0xCC, __);
        assert_eq!(odd_fixed(0xBB, 0xDD), 0xAABB_CCDD);

        let even_fixed = partial!(pack_bytes, __, 0xBB, __, 0xDD);
        assert_eq!(even_fixed(0xAA, 0xCC), 0xAABB_CCDD);
    }

    #[test]
    fn test_single_open_slot() {
        let last_open = partial!(pack_bytes, 0xDE, 0xAD, 0xBE, __);
        assert_eq!(last_open(0xEF), 0xDEAD_BEEF);

        let first_open = partial!(pack_bytes, __, 0xAD, 0xBE, 0xEF);
        assert_eq!(first_open(0xDE), 0xDEAD_BEEF);
    }

    #[test]
    fn test_all_slots_open_matches_the_original() {
        let reopened = partial!(pack_bytes, __, __, __, __);
        assert_eq!(reopened(1, 2, 3, 4), pack_bytes(1, 2, 3, 4));
    }
}

// =============================================================================
// Partial stages in pipelines
// =============================================================================

mod pipeline_tests {
    use fp_pack::{partial, pipe};

    fn spend(budget: i32, cost: i32) -> i32 {
        budget - cost
    }

    fn floor_at(min: i32, value: i32) -> i32 {
        value.max(min)
    }

    #[test]
    fn test_partial_stages_in_pipe() {
        let remaining = pipe!(
            250,
            partial!(spend, __, 80),
            partial!(spend, __, 200),
            partial!(floor_at, 0, __),
        );
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_partial_stage_bound_before_the_pipeline() {
        let without_fees = partial!(spend, __, 12);

        assert_eq!(pipe!(100, without_fees), 88);
    }
}
