//! Operators over [`LazySequence`].
//!
//! Every operator consumes its sequence and returns a new one, keeping
//! the pipeline lazy: no element is produced until a terminal pulls, and
//! a pull requests at most one element from the source. Operators
//! preserve element order and the [`Evaluation`](super::Evaluation) tag,
//! except where an asynchronous ingredient (a stream, a future, or an
//! async predicate) promotes a synchronous sequence to asynchronous.
//!
//! The methods here take their sequence first; the
//! [`point_free`](super::point_free) module exposes the same operators
//! as unary stages for [`pipe!`](crate::pipe) pipelines.

use std::future::Future;

use futures::future;
use futures::stream::{self, StreamExt};

use super::sequence::{LazySequence, Source};

impl<T: 'static> LazySequence<T> {
    // =========================================================================
    // Prefix Selection
    // =========================================================================

    /// Keeps the first `count` elements and ends the sequence there.
    ///
    /// Once the quota is met the source is never pulled again, so `take`
    /// bounds infinite sequences. `take(0)` yields nothing and pulls
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable(1..).take(3);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        match self.source {
            Source::Iterator(iterator) => Self::from_boxed_iterator(Box::new(iterator.take(count))),
            Source::Stream(stream) => Self::from_boxed_stream(Box::pin(stream.take(count))),
        }
    }

    /// Discards the first `count` elements, then yields the rest.
    ///
    /// The discarded elements are still pulled one at a time, on first
    /// demand, so side effects in the source happen in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable(1..=5).drop(2);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![3, 4, 5]);
    /// ```
    #[must_use]
    pub fn drop(self, count: usize) -> Self {
        match self.source {
            Source::Iterator(iterator) => Self::from_boxed_iterator(Box::new(iterator.skip(count))),
            Source::Stream(stream) => Self::from_boxed_stream(Box::pin(stream.skip(count))),
        }
    }

    // =========================================================================
    // Predicate Windows
    // =========================================================================

    /// Yields elements while `predicate` holds, ending at the first
    /// element that fails it.
    ///
    /// The failing element is consumed from the source (the predicate had
    /// to see it) but is not yielded, and nothing after it is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable([1, 2, 5, 1]).take_while(|x| *x < 3);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn take_while<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        match self.source {
            Source::Iterator(iterator) => {
                Self::from_boxed_iterator(Box::new(iterator.take_while(predicate)))
            }
            Source::Stream(stream) => Self::from_boxed_stream(Box::pin(
                stream.take_while(move |element| future::ready(predicate(element))),
            )),
        }
    }

    /// Like [`take_while`](Self::take_while) with an asynchronous
    /// predicate. The result is always asynchronous.
    #[must_use]
    pub fn take_while_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        Self::from_boxed_stream(Box::pin(self.into_stream().take_while(predicate)))
    }

    /// Discards elements while `predicate` holds, then yields everything
    /// from the first failing element onward.
    ///
    /// The predicate is retired after its first failure: later elements
    /// are yielded without being tested, even if they would satisfy it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable([1, 2, 5, 1]).drop_while(|x| *x < 3);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![5, 1]);
    /// ```
    #[must_use]
    pub fn drop_while<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        match self.source {
            Source::Iterator(iterator) => {
                Self::from_boxed_iterator(Box::new(iterator.skip_while(predicate)))
            }
            Source::Stream(stream) => Self::from_boxed_stream(Box::pin(
                stream.skip_while(move |element| future::ready(predicate(element))),
            )),
        }
    }

    /// Like [`drop_while`](Self::drop_while) with an asynchronous
    /// predicate. The result is always asynchronous.
    #[must_use]
    pub fn drop_while_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        Self::from_boxed_stream(Box::pin(self.into_stream().skip_while(predicate)))
    }

    // =========================================================================
    // Extension
    // =========================================================================

    /// Yields every element of the sequence, then `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable([1, 2]).append(9);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![1, 2, 9]);
    /// ```
    #[must_use]
    pub fn append(self, value: T) -> Self {
        match self.source {
            Source::Iterator(iterator) => {
                Self::from_boxed_iterator(Box::new(iterator.chain(std::iter::once(value))))
            }
            Source::Stream(stream) => Self::from_boxed_stream(Box::pin(
                stream.chain(stream::once(future::ready(value))),
            )),
        }
    }

    /// Appends the output of `future`, polled only after the sequence is
    /// exhausted. The result is always asynchronous.
    #[must_use]
    pub fn append_future<F>(self, future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        Self::from_boxed_stream(Box::pin(self.into_stream().chain(stream::once(future))))
    }

    /// Yields `value`, then every element of the sequence.
    ///
    /// The source is not pulled until after the prepended value has been
    /// consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable([1, 2]).prepend(0);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![0, 1, 2]);
    /// ```
    #[must_use]
    pub fn prepend(self, value: T) -> Self {
        match self.source {
            Source::Iterator(iterator) => {
                Self::from_boxed_iterator(Box::new(std::iter::once(value).chain(iterator)))
            }
            Source::Stream(stream) => Self::from_boxed_stream(Box::pin(
                stream::once(future::ready(value)).chain(stream),
            )),
        }
    }

    /// Prepends the output of `future`, resolved when the first element
    /// is pulled. The result is always asynchronous.
    #[must_use]
    pub fn prepend_future<F>(self, future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        Self::from_boxed_stream(Box::pin(stream::once(future).chain(self.into_stream())))
    }

    /// Yields every element of this sequence, then every element of
    /// `other`.
    ///
    /// Two synchronous sequences chain into a synchronous sequence. If
    /// either side is asynchronous the result is asynchronous, and the
    /// synchronous side still yields each element exactly when it is
    /// pulled: this sequence is drained completely before `other` is
    /// polled at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::{Evaluation, LazySequence};
    /// use futures::executor::block_on;
    ///
    /// let sync_pair = LazySequence::from_iterable([1, 2])
    ///     .chain(LazySequence::from_iterable([3, 4]));
    /// assert_eq!(sync_pair.evaluation(), Evaluation::Sync);
    /// assert_eq!(sync_pair.try_into_vec().unwrap(), vec![1, 2, 3, 4]);
    ///
    /// let mixed = LazySequence::from_iterable([1, 2])
    ///     .chain(LazySequence::from_stream(futures::stream::iter([3, 4])));
    /// assert_eq!(mixed.evaluation(), Evaluation::Async);
    /// assert_eq!(block_on(mixed.into_vec()), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn chain(self, other: Self) -> Self {
        match (self.source, other.source) {
            (Source::Iterator(first), Source::Iterator(second)) => {
                Self::from_boxed_iterator(Box::new(first.chain(second)))
            }
            (first, second) => {
                let first = Self { source: first }.into_stream();
                let second = Self { source: second }.into_stream();
                Self::from_boxed_stream(Box::pin(first.chain(second)))
            }
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to each element as it is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable([1, 2, 3]).map(|x| x * 10);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<U, F>(self, function: F) -> LazySequence<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        match self.source {
            Source::Iterator(iterator) => {
                LazySequence::from_boxed_iterator(Box::new(iterator.map(function)))
            }
            Source::Stream(stream) => {
                LazySequence::from_boxed_stream(Box::pin(stream.map(function)))
            }
        }
    }

    /// Applies an asynchronous `function` to each element, one element in
    /// flight at a time. The result is always asynchronous.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    /// use futures::executor::block_on;
    ///
    /// let sequence = LazySequence::from_iterable([1, 2, 3])
    ///     .map_async(|x| async move { x + 100 });
    /// assert_eq!(block_on(sequence.into_vec()), vec![101, 102, 103]);
    /// ```
    #[must_use]
    pub fn map_async<U, F, Fut>(self, function: F) -> LazySequence<U>
    where
        U: 'static,
        F: FnMut(T) -> Fut + 'static,
        Fut: Future<Output = U> + 'static,
    {
        LazySequence::from_boxed_stream(Box::pin(self.into_stream().then(function)))
    }

    /// Yields only the elements for which `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::stream::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterable(1..=6).filter(|x| x % 2 == 0);
    /// assert_eq!(sequence.try_into_vec().unwrap(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        match self.source {
            Source::Iterator(iterator) => {
                Self::from_boxed_iterator(Box::new(iterator.filter(predicate)))
            }
            Source::Stream(stream) => Self::from_boxed_stream(Box::pin(
                stream.filter(move |element| future::ready(predicate(element))),
            )),
        }
    }
}
