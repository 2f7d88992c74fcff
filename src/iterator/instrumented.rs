use std::sync::Arc;

use crate::{iterator::Iterator, statistics::Statistics};

/// Pass-through adapter that records each pull into a shared `Statistics`
///
/// Place it directly above a source to see how many elements the rest of
/// the pipeline actually consumed.
pub struct Instrumented<I> {
    iter: I,
    stats: Arc<Statistics>,
}

impl<I: Iterator> Instrumented<I> {
    pub fn new(iter: I, stats: Arc<Statistics>) -> Self {
        Instrumented { iter, stats }
    }

    pub fn statistics(&self) -> &Arc<Statistics> {
        &self.stats
    }
}

impl<I: Iterator> Iterator for Instrumented<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let value = self.iter.next();
        if value.is_some() {
            self.stats.record_item();
        } else {
            self.stats.record_exhausted();
        }
        value
    }
}
