use crate::iterator::Iterator;

/// Discards the first `n` upstream elements, then passes everything through
pub struct Skip<I> {
    iter: I,
    n: usize,
    skipped: usize,
}

impl<I: Iterator> Skip<I> {
    pub fn new(iter: I, n: usize) -> Self {
        Skip { iter, n, skipped: 0 }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.skipped < self.n {
            self.iter.next()?;
            self.skipped += 1;
        }
        self.iter.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::from_iter;

    #[test]
    fn test_skip_basic() {
        let out = Skip::new(from_iter(vec![1, 2, 3, 4, 5]), 2).collect_vec();
        assert_eq!(out, vec![3, 4, 5]);
    }

    #[test]
    fn test_skip_zero() {
        let out = Skip::new(from_iter(vec![1, 2]), 0).collect_vec();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_skip_past_end() {
        let mut it = Skip::new(from_iter(vec![1, 2, 3]), 5);
        assert!(it.next().is_none());
        assert_eq!(it.skipped, 3);
    }

    #[test]
    fn test_skip_only_once() {
        let mut it = Skip::new(from_iter(1..=6), 2);
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next(), Some(5));
    }
}
