use crate::iterator::Iterator;

/// Applies a transform to each upstream element
///
/// Exactly one upstream pull per `next()`; nothing is buffered.
pub struct Map<I, F> {
    iter: I,
    transform: F,
}

impl<I, F> Map<I, F> {
    pub fn new(iter: I, transform: F) -> Self {
        Map { iter, transform }
    }
}

impl<I, R, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.iter.next().map(&mut self.transform)
    }
}
