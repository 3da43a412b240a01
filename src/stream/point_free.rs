//! Point-free stages for [`pipe!`](crate::pipe) pipelines.
//!
//! Each function here takes the operator's configuration first and
//! returns a unary stage `LazySequence -> LazySequence`, so operators
//! slot directly between pipeline commas. The stage does nothing until
//! it is applied, and the resulting sequence stays lazy as usual.
//!
//! These functions are meant to be called through the module path
//! (`point_free::drop(2)`); importing [`drop`] unqualified shadows
//! `std::mem::drop` in that scope.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::pipe;
//! use fp_pack::stream::{LazySequence, point_free};
//!
//! let sequence = pipe!(
//!     LazySequence::from_iterable(1..=10),
//!     point_free::drop_while(|x: &i32| *x < 3),
//!     point_free::take(4),
//!     point_free::map(|x| x * 10),
//! );
//! assert_eq!(sequence.try_into_vec().unwrap(), vec![30, 40, 50, 60]);
//! ```

use std::future::Future;

use super::LazySequence;

/// Stage form of [`LazySequence::take`].
///
/// # Examples
///
/// ```rust
/// use fp_pack::pipe;
/// use fp_pack::stream::{LazySequence, point_free};
///
/// let sequence = pipe!(LazySequence::from_iterable(1..), point_free::take(3));
/// assert_eq!(sequence.try_into_vec().unwrap(), vec![1, 2, 3]);
/// ```
pub fn take<T: 'static>(count: usize) -> impl FnOnce(LazySequence<T>) -> LazySequence<T> {
    move |sequence| sequence.take(count)
}

/// Stage form of [`LazySequence::drop`].
///
/// # Examples
///
/// ```rust
/// use fp_pack::pipe;
/// use fp_pack::stream::{LazySequence, point_free};
///
/// let sequence = pipe!(LazySequence::from_iterable(1..=5), point_free::drop(2));
/// assert_eq!(sequence.try_into_vec().unwrap(), vec![3, 4, 5]);
/// ```
pub fn drop<T: 'static>(count: usize) -> impl FnOnce(LazySequence<T>) -> LazySequence<T> {
    move |sequence| sequence.drop(count)
}

/// Stage form of [`LazySequence::take_while`].
pub fn take_while<T, P>(predicate: P) -> impl FnOnce(LazySequence<T>) -> LazySequence<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |sequence| sequence.take_while(predicate)
}

/// Stage form of [`LazySequence::take_while_async`].
pub fn take_while_async<T, P, Fut>(predicate: P) -> impl FnOnce(LazySequence<T>) -> LazySequence<T>
where
    T: 'static,
    P: FnMut(&T) -> Fut + 'static,
    Fut: Future<Output = bool> + 'static,
{
    move |sequence| sequence.take_while_async(predicate)
}

/// Stage form of [`LazySequence::drop_while`].
pub fn drop_while<T, P>(predicate: P) -> impl FnOnce(LazySequence<T>) -> LazySequence<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |sequence| sequence.drop_while(predicate)
}

/// Stage form of [`LazySequence::drop_while_async`].
pub fn drop_while_async<T, P, Fut>(predicate: P) -> impl FnOnce(LazySequence<T>) -> LazySequence<T>
where
    T: 'static,
    P: FnMut(&T) -> Fut + 'static,
    Fut: Future<Output = bool> + 'static,
{
    move |sequence| sequence.drop_while_async(predicate)
}

/// Stage form of [`LazySequence::append`].
pub fn append<T: 'static>(value: T) -> impl FnOnce(LazySequence<T>) -> LazySequence<T> {
    move |sequence| sequence.append(value)
}

/// Stage form of [`LazySequence::append_future`].
pub fn append_future<T, F>(future: F) -> impl FnOnce(LazySequence<T>) -> LazySequence<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    move |sequence| sequence.append_future(future)
}

/// Stage form of [`LazySequence::prepend`].
pub fn prepend<T: 'static>(value: T) -> impl FnOnce(LazySequence<T>) -> LazySequence<T> {
    move |sequence| sequence.prepend(value)
}

/// Stage form of [`LazySequence::prepend_future`].
pub fn prepend_future<T, F>(future: F) -> impl FnOnce(LazySequence<T>) -> LazySequence<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    move |sequence| sequence.prepend_future(future)
}

/// Stage form of [`LazySequence::chain`]: the piped sequence keeps its
/// elements first, followed by the elements of `tail`.
///
/// # Examples
///
/// ```rust
/// use fp_pack::pipe;
/// use fp_pack::stream::{LazySequence, point_free};
///
/// let sequence = pipe!(
///     LazySequence::from_iterable([1, 2]),
///     point_free::concat(LazySequence::from_iterable([3, 4])),
/// );
/// assert_eq!(sequence.try_into_vec().unwrap(), vec![1, 2, 3, 4]);
/// ```
pub fn concat<T: 'static>(tail: LazySequence<T>) -> impl FnOnce(LazySequence<T>) -> LazySequence<T> {
    move |sequence| sequence.chain(tail)
}

/// Stage form of [`LazySequence::map`].
pub fn map<T, U, F>(function: F) -> impl FnOnce(LazySequence<T>) -> LazySequence<U>
where
    T: 'static,
    U: 'static,
    F: FnMut(T) -> U + 'static,
{
    move |sequence| sequence.map(function)
}

/// Stage form of [`LazySequence::map_async`].
pub fn map_async<T, U, F, Fut>(function: F) -> impl FnOnce(LazySequence<T>) -> LazySequence<U>
where
    T: 'static,
    U: 'static,
    F: FnMut(T) -> Fut + 'static,
    Fut: Future<Output = U> + 'static,
{
    move |sequence| sequence.map_async(function)
}

/// Stage form of [`LazySequence::filter`].
pub fn filter<T, P>(predicate: P) -> impl FnOnce(LazySequence<T>) -> LazySequence<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |sequence| sequence.filter(predicate)
}
