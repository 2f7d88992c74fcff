use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::util::Result;

/// Pull statistics for an instrumented pipeline stage
///
/// Thread-safe counters updated by `Instrumented`. Uses atomic counters so an
/// `Arc<Statistics>` can be read by whoever built the pipeline while it runs.
#[derive(Debug, Default)]
pub struct Statistics {
    pub num_pulls: AtomicU64,
    pub num_items: AtomicU64,
    pub num_exhausted: AtomicU64,
}

/// Point-in-time copy of `Statistics`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatisticsSnapshot {
    pub num_pulls: u64,
    pub num_items: u64,
    pub num_exhausted: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A pull that produced an element
    #[inline]
    pub fn record_item(&self) {
        self.num_pulls.fetch_add(1, Ordering::Relaxed);
        self.num_items.fetch_add(1, Ordering::Relaxed);
    }

    /// A pull that observed exhaustion
    #[inline]
    pub fn record_exhausted(&self) {
        self.num_pulls.fetch_add(1, Ordering::Relaxed);
        self.num_exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn num_pulls(&self) -> u64 {
        self.num_pulls.load(Ordering::Relaxed)
    }

    pub fn num_items(&self) -> u64 {
        self.num_items.load(Ordering::Relaxed)
    }

    pub fn num_exhausted(&self) -> u64 {
        self.num_exhausted.load(Ordering::Relaxed)
    }

    /// Fraction of pulls that produced an element
    pub fn yield_rate(&self) -> f64 {
        let pulls = self.num_pulls();
        if pulls == 0 {
            0.0
        } else {
            self.num_items() as f64 / pulls as f64
        }
    }

    /// Reset all statistics to zero
    pub fn reset(&self) {
        self.num_pulls.store(0, Ordering::Relaxed);
        self.num_items.store(0, Ordering::Relaxed);
        self.num_exhausted.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            num_pulls: self.num_pulls(),
            num_items: self.num_items(),
            num_exhausted: self.num_exhausted(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Get a formatted statistics report
    pub fn report(&self) -> String {
        format!(
            "Pipeline Statistics:\n\
            - Pulls:         {}\n\
            - Items:         {}\n\
            - Exhausted:     {}\n\
            - Yield rate:    {:.2}%",
            self.num_pulls(),
            self.num_items(),
            self.num_exhausted(),
            self.yield_rate() * 100.0,
        )
    }
}
