use std::marker::PhantomData;

use crate::iterator::Iterator;

/// Base iterator over anything implementing `IntoIterator`
pub struct FromIter<I> {
    inner: I,
}

impl<I: std::iter::Iterator> Iterator for FromIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

/// Pull from a std collection or iterator
pub fn from_iter<S: IntoIterator>(source: S) -> FromIter<S::IntoIter> {
    FromIter {
        inner: source.into_iter(),
    }
}

/// Iterator driven by a closure; `None` ends the sequence
///
/// The closure is only called from `next()`, so an endless generator is
/// fine as long as something downstream bounds it.
pub struct FromFn<F> {
    f: F,
}

impl<T, F: FnMut() -> Option<T>> Iterator for FromFn<F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        (self.f)()
    }
}

pub fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> FromFn<F> {
    FromFn { f }
}

/// Iterator that is exhausted from the start
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty {
            _marker: PhantomData,
        }
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty::default()
}

/// Adapts a pipeline to `std::iter::Iterator`
pub struct IntoStd<I> {
    inner: I,
}

impl<I: Iterator> IntoStd<I> {
    pub fn new(inner: I) -> Self {
        IntoStd { inner }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> std::iter::Iterator for IntoStd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}
