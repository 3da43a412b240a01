//! Integration tests for LazySequence construction and consumption.
//!
//! Tests for building sequences from sync and async sources, the
//! evaluation tag, and the terminal consumption methods.

#![cfg(feature = "stream")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fp_pack::stream::{Evaluation, LazySequence};
use futures::StreamExt;
use futures::stream;
use rstest::rstest;

// =============================================================================
// Construction sources
// =============================================================================

#[rstest]
fn test_from_iterable_accepts_collections_and_ranges() {
    assert_eq!(
        LazySequence::from_iterable(vec![1, 2, 3]).try_into_vec().unwrap(),
        vec![1, 2, 3]
    );
    assert_eq!(
        LazySequence::from_iterable([4, 5]).try_into_vec().unwrap(),
        vec![4, 5]
    );
    assert_eq!(
        LazySequence::from_iterable(1..=3).try_into_vec().unwrap(),
        vec![1, 2, 3]
    );
}

#[rstest]
fn test_from_iterable_accepts_another_iterator() {
    let doubled = (1..=3).map(|x| x * 2);
    let sequence = LazySequence::from_iterable(doubled);
    assert_eq!(sequence.try_into_vec().unwrap(), vec![2, 4, 6]);
}

#[rstest]
fn test_infinite_source_is_fine_when_bounded_downstream() {
    let sequence = LazySequence::from_iterable(0..).take(4);
    assert_eq!(sequence.try_into_vec().unwrap(), vec![0, 1, 2, 3]);
}

#[rstest]
fn test_pure_and_empty_are_sync() {
    let single = LazySequence::pure("only");
    assert_eq!(single.evaluation(), Evaluation::Sync);
    assert_eq!(single.try_into_vec().unwrap(), vec!["only"]);

    let nothing = LazySequence::<i32>::empty();
    assert_eq!(nothing.evaluation(), Evaluation::Sync);
    assert!(nothing.try_into_vec().unwrap().is_empty());
}

// =============================================================================
// Evaluation tag
// =============================================================================

#[rstest]
fn test_tag_is_fixed_at_construction() {
    assert_eq!(
        LazySequence::from_iterable(vec![1]).evaluation(),
        Evaluation::Sync
    );
    assert_eq!(
        LazySequence::from_stream(stream::iter(vec![1])).evaluation(),
        Evaluation::Async
    );
    assert_eq!(
        LazySequence::from_future(async { 1 }).evaluation(),
        Evaluation::Async
    );
}

#[rstest]
fn test_is_sync_and_is_async_agree_with_tag() {
    let sync_sequence = LazySequence::from_iterable(vec![1]);
    assert!(sync_sequence.is_sync());
    assert!(!sync_sequence.is_async());

    let async_sequence = LazySequence::from_stream(stream::iter(vec![1]));
    assert!(async_sequence.is_async());
    assert!(!async_sequence.is_sync());
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn test_construction_touches_no_elements() {
    let pulls = Arc::new(AtomicUsize::new(0));
    let spy = pulls.clone();

    let counting = std::iter::from_fn(move || {
        spy.fetch_add(1, Ordering::SeqCst);
        Some(7)
    });

    let _sequence = LazySequence::from_iterable(counting);
    assert_eq!(pulls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_future_source_not_polled_until_pulled() {
    let polled = Arc::new(AtomicUsize::new(0));
    let spy = polled.clone();

    let mut sequence = LazySequence::from_future(async move {
        spy.fetch_add(1, Ordering::SeqCst);
        42
    });

    assert_eq!(polled.load(Ordering::SeqCst), 0);
    assert_eq!(sequence.next().await, Some(42));
    assert_eq!(polled.load(Ordering::SeqCst), 1);
    assert_eq!(sequence.next().await, None);
}

// =============================================================================
// Terminal consumption
// =============================================================================

#[rstest]
fn test_try_into_vec_works_only_for_sync() {
    let sync_sequence = LazySequence::from_iterable(vec![1, 2]);
    assert_eq!(sync_sequence.try_into_vec().unwrap(), vec![1, 2]);

    let async_sequence = LazySequence::from_stream(stream::iter(vec![1, 2]));
    let returned = async_sequence.try_into_vec().unwrap_err();
    // Rejection hands the sequence back intact
    assert_eq!(returned.evaluation(), Evaluation::Async);
}

#[rstest]
fn test_try_into_iter_feeds_plain_iterator_adapters() {
    let sequence = LazySequence::from_iterable(1..=7);
    let sum: i32 = sequence.try_into_iter().unwrap().filter(|x| x % 2 == 1).sum();
    assert_eq!(sum, 16);
}

#[tokio::test]
async fn test_into_vec_drains_either_source() {
    let from_sync = LazySequence::from_iterable(vec![1, 2]).into_vec().await;
    assert_eq!(from_sync, vec![1, 2]);

    let from_async = LazySequence::from_stream(stream::iter(vec![3, 4])).into_vec().await;
    assert_eq!(from_async, vec![3, 4]);
}

#[tokio::test]
async fn test_next_pulls_exactly_one_element_per_call() {
    let pulls = Arc::new(AtomicUsize::new(0));
    let spy = pulls.clone();

    let mut remaining = vec![10, 20].into_iter();
    let counting = std::iter::from_fn(move || {
        spy.fetch_add(1, Ordering::SeqCst);
        remaining.next()
    });

    let mut sequence = LazySequence::from_iterable(counting);

    assert_eq!(sequence.next().await, Some(10));
    assert_eq!(pulls.load(Ordering::SeqCst), 1);

    assert_eq!(sequence.next().await, Some(20));
    assert_eq!(pulls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_try_collect_short_circuits_on_error() {
    let failing = LazySequence::from_iterable(vec![Ok::<i32, &str>(1), Err("bad"), Ok(3)]);
    assert_eq!(failing.try_collect().await, Err("bad"));

    let async_failing = LazySequence::from_stream(stream::iter(vec![Ok::<i32, &str>(1), Err("bad")]));
    assert_eq!(async_failing.try_collect().await, Err("bad"));
}

// =============================================================================
// Stream interoperability
// =============================================================================

#[tokio::test]
async fn test_sequence_is_a_stream() {
    // Any stream combinator can consume a LazySequence directly
    let sequence = LazySequence::from_iterable(1..=4);
    let folded = sequence.fold(0, |total, x| async move { total + x }).await;
    assert_eq!(folded, 10);
}

#[tokio::test]
async fn test_into_stream_promotes_sync_source() {
    let stream = LazySequence::from_iterable(vec![4, 5, 6]).into_stream();
    let collected: Vec<i32> = stream.collect().await;
    assert_eq!(collected, vec![4, 5, 6]);
}

#[rstest]
fn test_debug_names_the_evaluation() {
    let sync_sequence = LazySequence::from_iterable(vec![1]);
    assert!(format!("{sync_sequence:?}").contains("Sync"));

    let async_sequence = LazySequence::from_stream(stream::iter(vec![1]));
    assert!(format!("{async_sequence:?}").contains("Async"));
}
