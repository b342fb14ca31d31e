use std::collections::VecDeque;
use std::time::Instant;

/// One timestamped reachability measurement.
///
/// `latency_ms` only carries meaning when `reachable` is true and the value
/// is non-zero; `latency()` encodes that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub timestamp: Instant,
    pub reachable: bool,
    pub latency_ms: u64,
}

impl Sample {
    pub fn reachable(timestamp: Instant, latency_ms: u64) -> Self {
        Self {
            timestamp,
            reachable: true,
            latency_ms,
        }
    }

    pub fn unreachable(timestamp: Instant) -> Self {
        Self {
            timestamp,
            reachable: false,
            latency_ms: 0,
        }
    }

    /// The measured latency, or `None` for unreachable or zero-latency samples
    pub fn latency(&self) -> Option<u64> {
        (self.reachable && self.latency_ms > 0).then_some(self.latency_ms)
    }
}

/// Fixed-capacity, insertion-ordered ring buffer of samples.
///
/// Appending at capacity evicts the oldest sample. Timestamps are
/// non-decreasing because samples are appended in probe order.
#[derive(Debug, Clone)]
pub struct History {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// O(1) amortized append with FIFO eviction at capacity
    pub fn append(&mut self, sample: Sample) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// The most recent `limit` samples, oldest-first. All samples when
    /// `limit` is `None` or exceeds the current length. Read-only: callers
    /// never mutate history through a snapshot.
    pub fn snapshot(&self, limit: Option<usize>) -> Vec<Sample> {
        let len = self.samples.len();
        let take = limit.map_or(len, |l| l.min(len));
        self.samples.iter().skip(len - take).copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_evicts_oldest_at_capacity() {
        let mut history = History::new(3);
        let t = Instant::now();
        for ms in [10, 20, 30, 40] {
            history.append(Sample::reachable(t, ms));
        }
        assert_eq!(history.len(), 3);
        let latencies: Vec<u64> = history.iter().map(|s| s.latency_ms).collect();
        assert_eq!(latencies, vec![20, 30, 40]);
    }

    #[test]
    fn test_snapshot_limit_and_order() {
        let mut history = History::new(10);
        let t = Instant::now();
        for ms in 1..=5 {
            history.append(Sample::reachable(t, ms));
        }
        let recent = history.snapshot(Some(3));
        assert_eq!(
            recent.iter().map(|s| s.latency_ms).collect::<Vec<_>>(),
            vec![3, 4, 5]
        );
        // Limit beyond length returns everything
        assert_eq!(history.snapshot(Some(100)).len(), 5);
        assert_eq!(history.snapshot(None).len(), 5);
    }

    #[test]
    fn test_latency_absent_for_unreachable_or_zero() {
        let t = Instant::now();
        assert_eq!(Sample::reachable(t, 25).latency(), Some(25));
        assert_eq!(Sample::reachable(t, 0).latency(), None);
        assert_eq!(Sample::unreachable(t).latency(), None);
    }
}
