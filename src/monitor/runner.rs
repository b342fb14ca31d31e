//! The run loop: timed probing, history append, and periodic redraw with
//! cooperative shutdown.

use crate::monitor::config::Config;
use crate::monitor::constants::REFRESH_SLICE_MS;
use crate::monitor::display::DisplayComposer;
use crate::monitor::error::Result;
use crate::monitor::graph::TrendGraph;
use crate::monitor::history::{History, Sample};
use crate::monitor::probe::{Probe, ProbeOutcome};
use crate::monitor::sink::RenderSink;
use crate::monitor::stats;
use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics carried out of the run loop for the final summary
#[derive(Debug, Clone)]
pub struct FinalStats {
    pub total: usize,
    pub uptime_pct: f64,
    pub avg_latency_ms: Option<f64>,
    /// All reachable latencies, probe order, for the distribution report
    pub latencies: Vec<u64>,
}

/// Owned monitor state driving the probe/append/repaint cycle.
///
/// The history is owned here and handed out read-only per tick, so a frame
/// never observes a partially-appended sample.
pub struct Monitor {
    history: History,
    composer: DisplayComposer,
    interval: Duration,
}

impl Monitor {
    pub fn new(config: &Config) -> Self {
        Self {
            history: History::new(config.capacity),
            composer: DisplayComposer::new(
                TrendGraph::new(config.graph_width, config.graph_height),
                config.strip_len,
            ),
            interval: config.interval(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Run until the shutdown flag is set.
    ///
    /// Each iteration: one blocking probe (bounded by the probe's own
    /// timeout), append, repaint, then sleep the probe interval in short
    /// slices. The frame is repainted every slice so the clock stays live at
    /// roughly 1 Hz, and the flag is re-checked between slices so shutdown
    /// is deterministic. A failed probe is recorded as an unreachable
    /// sample; the loop never exits on probe failure.
    pub fn run<P: Probe, S: RenderSink>(
        &mut self,
        probe: &mut P,
        sink: &mut S,
        shutdown: &AtomicBool,
    ) -> Result<FinalStats> {
        info!(interval_secs = self.interval.as_secs(), "Monitoring started");

        while !shutdown.load(Ordering::Relaxed) {
            let outcome = probe.check();
            let sample = match outcome {
                ProbeOutcome::Reachable { latency_ms } => {
                    Sample::reachable(Instant::now(), latency_ms)
                }
                ProbeOutcome::Unreachable => Sample::unreachable(Instant::now()),
            };
            debug!(
                reachable = sample.reachable,
                latency_ms = sample.latency_ms,
                "Recorded sample"
            );
            self.history.append(sample);

            self.repaint(sink)?;

            let mut remaining = self.interval;
            let slice = Duration::from_millis(REFRESH_SLICE_MS);
            while !remaining.is_zero() && !shutdown.load(Ordering::Relaxed) {
                let nap = remaining.min(slice);
                thread::sleep(nap);
                remaining -= nap;
                if !remaining.is_zero() && !shutdown.load(Ordering::Relaxed) {
                    self.repaint(sink)?;
                }
            }
        }

        info!(total = self.history.len(), "Monitoring stopped");
        Ok(self.final_stats())
    }

    fn repaint<S: RenderSink>(&self, sink: &mut S) -> Result<()> {
        let frame = self
            .composer
            .compose(&self.history, Instant::now(), Local::now());
        sink.paint(&frame)
    }

    fn final_stats(&self) -> FinalStats {
        let overall = stats::overall(&self.history);
        FinalStats {
            total: overall.total,
            uptime_pct: overall.uptime_pct,
            avg_latency_ms: overall.avg_latency_ms,
            latencies: self.history.iter().filter_map(|s| s.latency()).collect(),
        }
    }
}
