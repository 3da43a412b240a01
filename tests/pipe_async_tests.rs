//! Integration tests for the pipe_async! macro.
//!
//! Tests for async pipelines mixing awaited stages and sync lifts.

#![cfg(feature = "compose")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fp_pack::pipe_async;

async fn scale_by_five(value: i32) -> i32 {
    value * 5
}

async fn subtract_three(value: i32) -> i32 {
    value - 3
}

async fn label(value: i32) -> String {
    format!("#{value}")
}

// =============================================================================
// Awaited stages
// =============================================================================

#[tokio::test]
async fn test_single_async_stage() {
    let scaled = pipe_async!(8, scale_by_five);
    assert_eq!(scaled, 40);
}

#[tokio::test]
async fn test_chained_async_stages() {
    // scale_by_five(4) = 20, subtract_three(20) = 17, scale_by_five(17) = 85
    let chained = pipe_async!(4, scale_by_five, subtract_three, scale_by_five);
    assert_eq!(chained, 85);
}

#[tokio::test]
async fn test_async_stage_changes_type() {
    let tagged = pipe_async!(64, scale_by_five, label);
    assert_eq!(tagged, "#320");
}

#[tokio::test]
async fn test_async_closure_stage() {
    let offset = 30;
    let result = pipe_async!(14, |value: i32| async move { value + offset });
    assert_eq!(result, 44);
}

// =============================================================================
// Sync lifts
// =============================================================================

#[tokio::test]
async fn test_lift_only_pipeline() {
    let plain = pipe_async!(9, => |value: i32| value * 4, => |value: i32| value - 6);
    assert_eq!(plain, 30);
}

#[tokio::test]
async fn test_mixed_lift_and_async_stages() {
    let woven = pipe_async!(
        10,
        => |value: i32| value + 2,
        scale_by_five,
        => |value: i32| value - 45,
        subtract_three,
    );
    // 10 + 2 = 12, times 5 = 60, minus 45 = 15, minus 3 = 12
    assert_eq!(woven, 12);
}

// =============================================================================
// Evaluation order and deferral
// =============================================================================

#[tokio::test]
async fn test_stages_run_strictly_in_order() {
    let step = Arc::new(AtomicUsize::new(0));

    let first_spy = Arc::clone(&step);
    let second_spy = Arc::clone(&step);

    let finished = pipe_async!(
        6,
        move |value: i32| {
            let spy = Arc::clone(&first_spy);
            async move {
                assert_eq!(spy.fetch_add(1, Ordering::SeqCst), 0);
                value + 4
            }
        },
        move |value: i32| {
            let spy = Arc::clone(&second_spy);
            async move {
                assert_eq!(spy.fetch_add(1, Ordering::SeqCst), 1);
                value * 3
            }
        },
    );

    assert_eq!(finished, 30);
    assert_eq!(step.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_pipeline_wrapped_in_async_block_is_deferred() {
    let ran = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&ran);

    let pipeline = async move {
        pipe_async!(
            7,
            move |value: i32| {
                let spy = Arc::clone(&spy);
                async move {
                    spy.fetch_add(1, Ordering::SeqCst);
                    value * 8
                }
            },
        )
    };

    // Building the future runs nothing
    assert_eq!(ran.load(Ordering::SeqCst), 0);

    assert_eq!(pipeline.await, 56);
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Sequence stages
// =============================================================================

#[cfg(feature = "stream")]
mod sequence_stages {
    use fp_pack::pipe_async;
    use fp_pack::stream::{LazySequence, point_free};

    #[tokio::test]
    async fn test_drain_sequence_inside_async_pipeline() {
        let total = pipe_async!(
            LazySequence::from_iterable(1..=5),
            => point_free::take(3),
            |sequence: LazySequence<i32>| sequence.into_vec(),
            => |values: Vec<i32>| values.into_iter().sum::<i32>(),
        );
        assert_eq!(total, 6);
    }

    #[tokio::test]
    async fn test_async_sequence_drained_by_awaited_stage() {
        let sequence = LazySequence::from_stream(futures::stream::iter(vec![10, 20, 30]));

        let values = pipe_async!(
            sequence,
            => point_free::drop(1),
            |sequence: LazySequence<i32>| sequence.into_vec(),
        );
        assert_eq!(values, vec![20, 30]);
    }
}
