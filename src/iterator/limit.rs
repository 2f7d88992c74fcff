use crate::iterator::Iterator;

/// What `Limit` does with upstream once it has emitted `n` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitMode {
    /// Pull (and discard) one more upstream element on the call that
    /// observes the limit, then stop. Drained, the adapter consumes
    /// `min(n + 1, len)` upstream elements.
    #[default]
    Overpull,
    /// Stop at the limit without touching upstream again.
    Exact,
}

/// Truncates upstream to at most `limit` elements
///
/// The adapter is fused: after the first `None` it never pulls upstream
/// again.
pub struct Limit<I> {
    iter: I,
    limit: usize,
    taken: usize,
    mode: LimitMode,
    done: bool,
}

impl<I: Iterator> Limit<I> {
    pub fn new(iter: I, limit: usize) -> Self {
        Self::with_mode(iter, limit, LimitMode::default())
    }

    pub fn with_mode(iter: I, limit: usize, mode: LimitMode) -> Self {
        Limit {
            iter,
            limit,
            taken: 0,
            mode,
            done: false,
        }
    }

    pub fn mode(&self) -> LimitMode {
        self.mode
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }

        if self.taken < self.limit {
            let value = self.iter.next();
            match value {
                Some(_) => self.taken += 1,
                None => self.done = true,
            }
            return value;
        }

        if self.mode == LimitMode::Overpull {
            let _ = self.iter.next();
        }
        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{from_fn, from_iter};

    #[test]
    fn test_limit_basic() {
        let out = Limit::new(from_iter(vec![1, 2, 3, 4, 5]), 3).collect_vec();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_limit_longer_than_source() {
        let out = Limit::new(from_iter(vec![1, 2]), 10).collect_vec();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_limit_zero() {
        let mut it = Limit::new(from_iter(vec![1, 2]), 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn test_limit_overpull_consumes_one_extra() {
        let mut base = from_iter(vec![1, 2, 3, 4, 5]);
        {
            let it = Limit::new(&mut base, 2);
            assert_eq!(it.mode(), LimitMode::Overpull);
            assert_eq!(it.collect_vec(), vec![1, 2]);
        }
        // 3 was pulled and discarded
        assert_eq!(base.next(), Some(4));
    }

    #[test]
    fn test_limit_overpull_is_fused() {
        let mut base = from_iter(vec![1, 2, 3, 4, 5]);
        {
            let mut it = Limit::new(&mut base, 1);
            assert_eq!(it.next(), Some(1));
            assert!(it.next().is_none());
            assert!(it.next().is_none());
            assert!(it.next().is_none());
        }
        assert_eq!(base.next(), Some(3));
    }

    #[test]
    fn test_limit_exact_leaves_upstream_alone() {
        let mut base = from_iter(vec![1, 2, 3, 4, 5]);
        {
            let it = Limit::with_mode(&mut base, 2, LimitMode::Exact);
            assert_eq!(it.collect_vec(), vec![1, 2]);
        }
        assert_eq!(base.next(), Some(3));
    }

    #[test]
    fn test_limit_over_infinite_source() {
        let mut n = 0u64;
        let it = Limit::new(
            from_fn(|| {
                n += 1;
                Some(n)
            }),
            4,
        );
        assert_eq!(it.collect_vec(), vec![1, 2, 3, 4]);
    }
}
