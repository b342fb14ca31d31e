//! Rolling statistics over the sample history.
//!
//! Averages distinguish "no qualifying data" (`None`) from a measured value;
//! the display layer renders the former as `--`.

use crate::monitor::constants::TIME_WINDOWS;
use crate::monitor::history::History;
use std::time::{Duration, Instant};
use tracing::debug;

/// Aggregate statistics over the full history
#[derive(Debug, Clone, PartialEq)]
pub struct OverallStats {
    /// Percentage of reachable samples, in [0, 100]; 0 for an empty history
    pub uptime_pct: f64,
    /// Mean latency over reachable samples with latency > 0
    pub avg_latency_ms: Option<f64>,
    pub total: usize,
}

/// Uptime, average latency, and total count over the whole history
pub fn overall(history: &History) -> OverallStats {
    let total = history.len();
    if total == 0 {
        return OverallStats {
            uptime_pct: 0.0,
            avg_latency_ms: None,
            total: 0,
        };
    }

    let connected = history.iter().filter(|s| s.reachable).count();
    let uptime_pct = (connected as f64 / total as f64) * 100.0;

    let latencies: Vec<u64> = history.iter().filter_map(|s| s.latency()).collect();
    let avg_latency_ms = if latencies.is_empty() {
        None
    } else {
        Some(latencies.iter().sum::<u64>() as f64 / latencies.len() as f64)
    };

    debug!(
        total = total,
        connected = connected,
        uptime_pct = uptime_pct,
        "Computed overall statistics"
    );

    OverallStats {
        uptime_pct,
        avg_latency_ms,
        total,
    }
}

/// Per-window average latency in fixed display order.
///
/// A sample qualifies for a window when it is reachable with latency > 0 and
/// `now - timestamp` is within the window. Each window re-scans the history;
/// O(windows x len) is fine at this scale.
pub fn windowed(history: &History, now: Instant) -> Vec<(&'static str, Option<f64>)> {
    TIME_WINDOWS
        .iter()
        .map(|&(name, secs)| {
            let window = Duration::from_secs(secs);
            let mut sum = 0u64;
            let mut count = 0usize;
            for sample in history.iter() {
                if let Some(latency) = sample.latency() {
                    if now.saturating_duration_since(sample.timestamp) <= window {
                        sum += latency;
                        count += 1;
                    }
                }
            }
            let avg = (count > 0).then(|| sum as f64 / count as f64);
            (name, avg)
        })
        .collect()
}

/// Minimum and maximum latency across all reachable-with-latency samples
pub fn latency_range(history: &History) -> Option<(u64, u64)> {
    let mut range: Option<(u64, u64)> = None;
    for latency in history.iter().filter_map(|s| s.latency()) {
        range = Some(match range {
            None => (latency, latency),
            Some((min, max)) => (min.min(latency), max.max(latency)),
        });
    }
    range
}
