//! `LazySequence` - a pull-based sequence over sync or async sources.
//!
//! This module provides the [`LazySequence`] type, a lazily evaluated
//! sequence that treats synchronous sources (anything iterable) and
//! asynchronous sources (streams and futures) uniformly. Whether a
//! sequence is synchronous or asynchronous is decided once, at
//! construction, and carried through every operator; the
//! [`Evaluation`] tag makes the decision observable.
//!
//! # Laziness
//!
//! Construction does no work. Elements are produced one at a time, only
//! when the consumer pulls, and never more than one element is in flight.
//! Infinite sources are fine as long as a downstream operator such as
//! `take` bounds consumption.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::pipe;
//! use fp_pack::stream::{LazySequence, point_free};
//!
//! let sequence = pipe!(
//!     LazySequence::from_iterable(1..),
//!     point_free::drop(2),
//!     point_free::take(3),
//! );
//! assert_eq!(sequence.try_into_vec().unwrap(), vec![3, 4, 5]);
//! ```
//!
//! Asynchronous sources use the same operators and drain with `await`:
//!
//! ```rust
//! use fp_pack::stream::LazySequence;
//! use futures::executor::block_on;
//!
//! let sequence = LazySequence::from_stream(futures::stream::iter(vec![1, 2, 3])).take(2);
//! assert_eq!(block_on(sequence.into_vec()), vec![1, 2]);
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{self, Stream, StreamExt, TryStreamExt};

/// How a [`LazySequence`] produces its elements.
///
/// The tag is fixed when the sequence is constructed. Operators preserve
/// it, except that combining a synchronous sequence with an asynchronous
/// ingredient promotes the result to [`Async`](Evaluation::Async).
///
/// # Examples
///
/// ```rust
/// use fp_pack::stream::{Evaluation, LazySequence};
///
/// let sync_sequence = LazySequence::from_iterable(vec![1, 2, 3]);
/// assert_eq!(sync_sequence.evaluation(), Evaluation::Sync);
///
/// let async_sequence = LazySequence::from_stream(futures::stream::iter(vec![1, 2, 3]));
/// assert_eq!(async_sequence.evaluation(), Evaluation::Async);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Evaluation {
    /// Elements come from a synchronous source and resolve without awaiting.
    Sync,
    /// Elements come from an asynchronous source and must be awaited.
    Async,
}

/// The backing source of a sequence. Constructed once; every operator
/// dispatches on it and rebuilds the same variant (or promotes to the
/// stream variant when asynchrony enters the pipeline).
pub(crate) enum Source<T> {
    Iterator(Box<dyn Iterator<Item = T>>),
    Stream(Pin<Box<dyn Stream<Item = T>>>),
}

/// A lazily evaluated sequence over a synchronous or asynchronous source.
///
/// `LazySequence<T>` wraps either a boxed [`Iterator`] or a pinned boxed
/// [`Stream`] and exposes one set of operators over both. Elements are
/// computed on demand: nothing is produced at construction, and a pull
/// requests exactly one element from the source.
///
/// The sequence itself implements [`Stream`], so it can be consumed with
/// any stream combinator; synchronous sequences simply resolve every poll
/// immediately. For runtime-free consumption of synchronous sequences,
/// use [`try_into_iter`](Self::try_into_iter) or
/// [`try_into_vec`](Self::try_into_vec).
///
/// # Type Parameters
///
/// * `T` - The element type
///
/// # Examples
///
/// ```rust
/// use fp_pack::stream::LazySequence;
///
/// let sequence = LazySequence::from_iterable([10, 20, 30]);
/// assert_eq!(sequence.try_into_vec().unwrap(), vec![10, 20, 30]);
/// ```
pub struct LazySequence<T> {
    pub(crate) source: Source<T>,
}

impl<T: 'static> LazySequence<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a synchronous sequence from anything iterable.
    ///
    /// Accepts arrays, `Vec`s, ranges, other iterators, or any
    /// [`IntoIterator`]. The iterable is not touched until the sequence
    /// is consumed, so infinite iterators are fine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let from_vec = LazySequence::from_iterable(vec![1, 2, 3]);
    /// assert_eq!(from_vec.try_into_vec().unwrap(), vec![1, 2, 3]);
    ///
    /// let from_range = LazySequence::from_iterable(1..).take(2);
    /// assert_eq!(from_range.try_into_vec().unwrap(), vec![1, 2]);
    /// ```
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            source: Source::Iterator(Box::new(iterable.into_iter())),
        }
    }

    /// Creates an asynchronous sequence from a [`Stream`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::{Evaluation, LazySequence};
    ///
    /// let sequence = LazySequence::from_stream(futures::stream::iter([1, 2, 3]));
    /// assert_eq!(sequence.evaluation(), Evaluation::Async);
    /// ```
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + 'static,
    {
        Self {
            source: Source::Stream(Box::pin(stream)),
        }
    }

    /// Creates a one-element asynchronous sequence from a [`Future`].
    ///
    /// The future is not polled until the single element is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    /// use futures::executor::block_on;
    ///
    /// let sequence = LazySequence::from_future(async { 42 });
    /// assert_eq!(block_on(sequence.into_vec()), vec![42]);
    /// ```
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        Self::from_stream(stream::once(future))
    }

    /// Creates a one-element synchronous sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::pure(7);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![7]);
    /// ```
    pub fn pure(value: T) -> Self {
        Self::from_iterable(std::iter::once(value))
    }

    /// Creates an empty synchronous sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::<i32>::empty();
    /// assert_eq!(sequence.try_into_vec().unwrap(), Vec::<i32>::new());
    /// ```
    pub fn empty() -> Self {
        Self::from_iterable(std::iter::empty())
    }

    pub(crate) fn from_boxed_iterator(iterator: Box<dyn Iterator<Item = T>>) -> Self {
        Self {
            source: Source::Iterator(iterator),
        }
    }

    pub(crate) fn from_boxed_stream(stream: Pin<Box<dyn Stream<Item = T>>>) -> Self {
        Self {
            source: Source::Stream(stream),
        }
    }

    // =========================================================================
    // Evaluation Tag
    // =========================================================================

    /// Returns how this sequence produces its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::{Evaluation, LazySequence};
    ///
    /// let sequence = LazySequence::from_iterable(0..3);
    /// assert_eq!(sequence.evaluation(), Evaluation::Sync);
    /// ```
    #[inline]
    pub const fn evaluation(&self) -> Evaluation {
        match &self.source {
            Source::Iterator(_) => Evaluation::Sync,
            Source::Stream(_) => Evaluation::Async,
        }
    }

    /// Returns `true` if this sequence resolves without awaiting.
    #[inline]
    pub const fn is_sync(&self) -> bool {
        matches!(self.evaluation(), Evaluation::Sync)
    }

    /// Returns `true` if this sequence must be awaited.
    #[inline]
    pub const fn is_async(&self) -> bool {
        matches!(self.evaluation(), Evaluation::Async)
    }

    // =========================================================================
    // Pulling
    // =========================================================================

    /// Pulls the next element, or `None` when the sequence is exhausted.
    ///
    /// This is the uniform pull interface: one call requests exactly one
    /// element. For synchronous sequences the returned future resolves
    /// immediately without touching the waker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    /// use futures::executor::block_on;
    ///
    /// block_on(async {
    ///     let mut sequence = LazySequence::from_iterable([1, 2]);
    ///     assert_eq!(sequence.next().await, Some(1));
    ///     assert_eq!(sequence.next().await, Some(2));
    ///     assert_eq!(sequence.next().await, None);
    /// });
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Option<T> {
        StreamExt::next(self).await
    }

    // =========================================================================
    // Terminal Consumption
    // =========================================================================

    /// Drains the sequence into a `Vec`, awaiting asynchronous sources.
    ///
    /// For synchronous sequences the returned future completes without
    /// ever suspending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    /// use futures::executor::block_on;
    ///
    /// let sequence = LazySequence::from_stream(futures::stream::iter([1, 2, 3]));
    /// assert_eq!(block_on(sequence.into_vec()), vec![1, 2, 3]);
    /// ```
    pub async fn into_vec(self) -> Vec<T> {
        match self.source {
            Source::Iterator(iterator) => iterator.collect(),
            Source::Stream(stream) => stream.collect().await,
        }
    }

    /// Drains a synchronous sequence into a `Vec` without a runtime.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` unchanged when the sequence is asynchronous,
    /// so the caller can fall back to [`into_vec`](Self::into_vec).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sync_sequence = LazySequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sync_sequence.try_into_vec().unwrap(), vec![1, 2, 3]);
    ///
    /// let async_sequence = LazySequence::from_stream(futures::stream::iter([1]));
    /// assert!(async_sequence.try_into_vec().is_err());
    /// ```
    pub fn try_into_vec(self) -> Result<Vec<T>, Self> {
        match self.source {
            Source::Iterator(iterator) => Ok(iterator.collect()),
            Source::Stream(stream) => Err(Self {
                source: Source::Stream(stream),
            }),
        }
    }

    /// Converts a synchronous sequence into a plain [`Iterator`].
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` unchanged when the sequence is asynchronous.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable(2..=5);
    /// let sum: i32 = sequence.try_into_iter().unwrap().sum();
    /// assert_eq!(sum, 14);
    /// ```
    pub fn try_into_iter(self) -> Result<Box<dyn Iterator<Item = T>>, Self> {
        match self.source {
            Source::Iterator(iterator) => Ok(iterator),
            Source::Stream(stream) => Err(Self {
                source: Source::Stream(stream),
            }),
        }
    }

    /// Converts the sequence into a pinned boxed [`Stream`].
    ///
    /// Synchronous sequences are promoted: each element is delivered
    /// `Ready` on the poll that requests it, preserving order and
    /// laziness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    /// use futures::StreamExt;
    /// use futures::executor::block_on;
    ///
    /// let stream = LazySequence::from_iterable([1, 2]).into_stream();
    /// let doubled: Vec<i32> = block_on(stream.map(|x| x * 2).collect());
    /// assert_eq!(doubled, vec![2, 4]);
    /// ```
    pub fn into_stream(self) -> Pin<Box<dyn Stream<Item = T>>> {
        match self.source {
            Source::Iterator(iterator) => Box::pin(stream::iter(iterator)),
            Source::Stream(stream) => stream,
        }
    }
}

impl<T: 'static, E: 'static> LazySequence<Result<T, E>> {
    /// Drains a sequence of `Result`s, stopping at the first error.
    ///
    /// Elements after the first `Err` are never pulled, matching the
    /// demand-driven contract: the failure surfaces at the pull that
    /// produced it.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` element encountered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    /// use futures::executor::block_on;
    ///
    /// let all_ok = LazySequence::from_iterable([Ok::<i32, String>(1), Ok(2)]);
    /// assert_eq!(block_on(all_ok.try_collect()), Ok(vec![1, 2]));
    ///
    /// let failing = LazySequence::from_iterable([Ok(1), Err("boom"), Ok(3)]);
    /// assert_eq!(block_on(failing.try_collect()), Err("boom"));
    /// ```
    pub async fn try_collect(self) -> Result<Vec<T>, E> {
        match self.source {
            Source::Iterator(iterator) => iterator.collect(),
            Source::Stream(stream) => stream.try_collect().await,
        }
    }
}

// =============================================================================
// Stream Implementation
// =============================================================================

impl<T> Stream for LazySequence<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<T>> {
        match &mut self.get_mut().source {
            Source::Iterator(iterator) => Poll::Ready(iterator.next()),
            Source::Stream(stream) => stream.as_mut().poll_next(context),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Source::Iterator(iterator) => iterator.size_hint(),
            Source::Stream(stream) => stream.size_hint(),
        }
    }
}

// =============================================================================
// Debug
// =============================================================================

impl<T: 'static> fmt::Debug for LazySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazySequence")
            .field("evaluation", &self.evaluation())
            .finish_non_exhaustive()
    }
}

// Static assertions: consumption happens where the sequence was built,
// but the sequence itself can be moved freely while polled
static_assertions::assert_not_impl_any!(LazySequence<i32>: Send, Sync);
static_assertions::assert_impl_all!(LazySequence<i32>: Unpin);
static_assertions::assert_impl_all!(Evaluation: Send, Sync, Copy);
