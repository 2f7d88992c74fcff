use crate::{iterator::Iterator, util::Pair};

/// Pairs each upstream element with its zero-based position
///
/// The index only advances on a successful pull, so an exhausted upstream
/// leaves it untouched.
pub struct Enumerate<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> Enumerate<I> {
    pub fn new(iter: I) -> Self {
        Enumerate { iter, index: 0 }
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = Pair<usize, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some(Pair::new(index, value))
    }
}
