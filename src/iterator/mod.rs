/// Iterator module for lazyseq
///
/// Provides a single-method pull protocol and the stream adapters built on
/// top of it. Adapters wrap (and own) their upstream iterators, so a
/// pipeline is just a nest of structs:
///
/// ```text
/// limit(3, ...)
///     ↓
/// Limit
///     └─→ Map
///         └─→ Filter
///             └─→ FromIter (base source)
/// ```
///
/// ## Key Design Principles
///
/// 1. **Lazy Evaluation**: constructing a pipeline does no work; every
///    element is produced by a `next()` call on the outermost adapter
/// 2. **Single Owner**: adapters take their upstream by value
/// 3. **Absence Ends the Stream**: `None` is the only exhaustion signal
///
/// Sequences may be infinite (`from_fn`), so no adapter ever buffers or
/// materializes its upstream.
use std::sync::Arc;

use crate::{statistics::Statistics, util::Result};

/// Pull-based iterator
///
/// # Lifecycle
///
/// ```ignore
/// let mut iter = lazyseq::from_iter(vec![1, 2, 3]).map(|x| x * 2);
/// while let Some(v) = iter.next() {
///     println!("{v}");
/// }
/// ```
///
/// Once `next()` has returned `None` the iterator is exhausted. Adapters in
/// this crate keep returning `None` afterwards; they never resurrect
/// elements.
pub trait Iterator {
    type Item;

    /// Produce the next element, or `None` when the sequence is exhausted
    fn next(&mut self) -> Option<Self::Item>;

    /// Attach a zero-based index to every element
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Apply `transform` to every element
    fn map<R, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        Map::new(self, transform)
    }

    /// Keep only elements matching `predicate`
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yield at most `n` elements
    fn limit(self, n: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit::new(self, n)
    }

    /// Drop the first `n` elements
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Yield every `n`-th element, starting with the first
    ///
    /// Fails with `InvalidArgument` if `n == 0`.
    fn step(self, n: usize) -> Result<Step<Self>>
    where
        Self: Sized,
    {
        Step::new(self, n)
    }

    /// Yield all of `self`, then all of `last`
    fn concat<U>(self, last: U) -> Concat<Self, U>
    where
        Self: Sized,
        U: Iterator<Item = Self::Item>,
    {
        Concat::new(self, last)
    }

    /// Record every pull into `stats`
    fn instrument(self, stats: Arc<Statistics>) -> Instrumented<Self>
    where
        Self: Sized,
    {
        Instrumented::new(self, stats)
    }

    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Drain the iterator and return how many elements it produced
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), item| f(item));
    }

    /// Drain the iterator into a `Vec`
    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Vec::new(), |mut out, item| {
            out.push(item);
            out
        })
    }

    /// Bridge into `std::iter::Iterator`
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }
}

impl<I: Iterator + ?Sized> Iterator for &mut I {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<I: Iterator + ?Sized> Iterator for Box<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

mod concat;
mod enumerate;
mod filter;
mod instrumented;
mod limit;
mod map;
mod skip;
mod source;
mod step;

pub use concat::Concat;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use instrumented::Instrumented;
pub use limit::{Limit, LimitMode};
pub use map::Map;
pub use skip::Skip;
pub use source::{Empty, FromFn, FromIter, IntoStd, empty, from_fn, from_iter};
pub use step::Step;

/// Add a zero-based index to each element of `it`
pub fn enumerate<I: Iterator>(it: I) -> Enumerate<I> {
    Enumerate::new(it)
}

/// Map every element of `it` through `transform`
pub fn map<I, R, F>(transform: F, it: I) -> Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    Map::new(it, transform)
}

/// Keep the elements of `it` for which `predicate` holds
pub fn filter<I, P>(predicate: P, it: I) -> Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter::new(it, predicate)
}

/// Truncate `it` to at most `n` elements, using the default `LimitMode`
pub fn limit<I: Iterator>(n: usize, it: I) -> Limit<I> {
    Limit::new(it, n)
}

pub fn limit_with_mode<I: Iterator>(n: usize, mode: LimitMode, it: I) -> Limit<I> {
    Limit::with_mode(it, n, mode)
}

/// Discard the first `n` elements of `it`
pub fn skip<I: Iterator>(n: usize, it: I) -> Skip<I> {
    Skip::new(it, n)
}

/// Keep upstream positions 0, n, 2n, ...
pub fn step<I: Iterator>(n: usize, it: I) -> Result<Step<I>> {
    Step::new(it, n)
}

/// Chain `left` and `right`
pub fn concat<A, B>(left: A, right: B) -> Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    Concat::new(left, right)
}

pub fn instrument<I: Iterator>(it: I, stats: Arc<Statistics>) -> Instrumented<I> {
    Instrumented::new(it, stats)
}
