//! Sliding-window sample queue for one named time series.
//!
//! Samples are kept newest-first. Eviction is lazy: it only happens when a
//! sample is pushed (or when `prune` is called explicitly), so an idle
//! series keeps its last contents until the next write. Length is bounded
//! by traffic rate times retention.

use std::collections::VecDeque;
use std::time::Duration;

use crate::sample::{Sample, Timestamp};

#[derive(Debug, Clone)]
pub struct SlidingWindow {
    retention: Duration,
    items: VecDeque<Sample>,
}

impl SlidingWindow {
    /// Build a window holding `first`, unless `first` is already older than
    /// `retention` relative to `now`, in which case the window starts empty.
    pub fn new(retention: Duration, first: Sample, now: Timestamp) -> Self {
        let mut items = VecDeque::with_capacity(1);
        if !first.is_before(cutoff(now, retention)) {
            items.push_back(first);
        }
        Self { retention, items }
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent sample, if any.
    pub fn newest(&self) -> Option<&Sample> {
        self.items.front()
    }

    /// Evict everything older than `now - retention`, then prepend `sample`.
    ///
    /// A sample already outside the window is discarded. A sample stamped
    /// earlier than the current newest one (clock stepped backwards) takes
    /// the newest timestamp so the sequence stays non-increasing.
    /// Returns the number of evicted samples.
    pub fn push(&mut self, sample: Sample, now: Timestamp) -> usize {
        let cutoff = cutoff(now, self.retention);
        let evicted = self.evict_before(cutoff);

        if sample.is_before(cutoff) {
            return evicted;
        }

        let stamped = match self.items.front() {
            Some(newest) if sample.timestamp < newest.timestamp => {
                tracing::debug!(
                    given = sample.timestamp,
                    newest = newest.timestamp,
                    "sample stamp behind newest; clamping"
                );
                Sample::new(newest.timestamp, sample.value)
            }
            _ => sample,
        };
        self.items.push_front(stamped);
        evicted
    }

    /// Evict expired samples without inserting. Returns the evicted count.
    pub fn prune(&mut self, now: Timestamp) -> usize {
        self.evict_before(cutoff(now, self.retention))
    }

    /// Export contents newest-first as `(timestamp, value)` pairs.
    pub fn to_list(&self) -> Vec<(Timestamp, f64)> {
        self.items.iter().map(|s| (*s).into()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.items.iter()
    }

    // Oldest samples sit at the back.
    fn evict_before(&mut self, cutoff: Timestamp) -> usize {
        let before = self.items.len();
        while self.items.back().is_some_and(|s| s.is_before(cutoff)) {
            self.items.pop_back();
        }
        before - self.items.len()
    }
}

fn cutoff(now: Timestamp, retention: Duration) -> Timestamp {
    let retention_ms = u64::try_from(retention.as_millis()).unwrap_or(u64::MAX);
    now.saturating_sub(retention_ms)
}
