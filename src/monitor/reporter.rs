use crate::monitor::constants::{
    HISTOGRAM_HIGH_BOUND_MS, HISTOGRAM_LOW_BOUND_MS, HISTOGRAM_SIGNIFICANT_DIGITS,
};
use crate::monitor::error::{MonitorError, Result};
use crate::monitor::runner::FinalStats;
use colored::*;
use hdrhistogram::Histogram;
use tracing::{debug, info};

/// Reporter for the end-of-session summary.
///
/// Prints to stdout after the live dashboard region has been torn down, so
/// the summary survives in the scrollback.
pub struct Reporter;

impl Reporter {
    pub fn print_summary(&self, stats: &FinalStats) -> Result<()> {
        debug!(total = stats.total, "Printing final summary");

        println!();
        println!("{}", "Monitoring stopped.".yellow());
        println!();
        println!("{}", "┌─────────────────────────────┐".cyan());
        println!("{}", "│  netpulse session summary   │".cyan());
        println!("{}", "└─────────────────────────────┘".cyan());
        println!();
        println!("Total checks: {}", stats.total);
        println!("Uptime:       {:.1}%", stats.uptime_pct);
        if let Some(avg) = stats.avg_latency_ms {
            println!("Average:      {:.0}ms", avg);
        }

        if !stats.latencies.is_empty() {
            self.print_distribution(&stats.latencies)?;
        }

        info!(
            total = stats.total,
            uptime_pct = stats.uptime_pct,
            "Final summary reported"
        );
        Ok(())
    }

    /// Percentile distribution over reachable latencies
    fn print_distribution(&self, latencies: &[u64]) -> Result<()> {
        let mut hist = Histogram::<u64>::new_with_bounds(
            HISTOGRAM_LOW_BOUND_MS,
            HISTOGRAM_HIGH_BOUND_MS,
            HISTOGRAM_SIGNIFICANT_DIGITS,
        )
        .map_err(|e| MonitorError::Render(format!("Failed to create histogram: {}", e)))?;

        // Track real extremes before clamping to histogram bounds
        let mut real_min = u64::MAX;
        let mut real_max = 0u64;
        for &latency in latencies {
            real_min = real_min.min(latency);
            real_max = real_max.max(latency);
            hist.record(latency.clamp(HISTOGRAM_LOW_BOUND_MS, HISTOGRAM_HIGH_BOUND_MS))
                .map_err(|e| MonitorError::Render(format!("Failed to record latency: {}", e)))?;
        }

        println!();
        println!("Latency distribution (round-trip time):");
        println!("  Min:   {:>6}ms", real_min);
        println!("  Max:   {:>6}ms", real_max);
        println!("  P50:   {:>6}ms", hist.value_at_quantile(0.5));
        println!("  P90:   {:>6}ms", hist.value_at_quantile(0.9));
        println!("  P99:   {:>6}ms", hist.value_at_quantile(0.99));
        Ok(())
    }
}
