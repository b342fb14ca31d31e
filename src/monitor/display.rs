//! Display composer: assembles the full dashboard frame from the history
//! and the current clock, in a fixed section order.

use crate::monitor::graph::TrendGraph;
use crate::monitor::history::{History, Sample};
use crate::monitor::stats;
use crate::monitor::styled::{Severity, StyleToken, StyledText};
use chrono::{DateTime, Local};
use std::time::Instant;

/// Builds one dashboard frame per refresh tick.
///
/// Section order is the dashboard's visible contract: header, status and
/// averages, graph, legend, recent strip, footer hint.
#[derive(Debug, Clone)]
pub struct DisplayComposer {
    graph: TrendGraph,
    strip_len: usize,
}

impl DisplayComposer {
    pub fn new(graph: TrendGraph, strip_len: usize) -> Self {
        Self { graph, strip_len }
    }

    /// Compose a frame from the current history, monotonic `now` (window
    /// filtering), and wall clock (header)
    pub fn compose(&self, history: &History, now: Instant, clock: DateTime<Local>) -> StyledText {
        let mut frame = StyledText::new();

        // Header
        frame.push("netpulse", StyleToken::Title);
        frame.push(
            format!(" - {}", clock.format("%H:%M:%S")),
            StyleToken::Dim,
        );
        frame.newline();
        frame.newline();

        // Status + averages block
        let overall = stats::overall(history);
        self.push_status_line(&mut frame, history.last(), overall.uptime_pct);
        frame.newline();
        self.push_averages_line(&mut frame, history, now);
        frame.newline();
        frame.newline();

        // Graph section
        frame.push("Response Time Trend (Last 3 minutes)", StyleToken::Emphasis);
        if let Some((min, max)) = stats::latency_range(history) {
            frame.push(format!(" ({}-{}ms)", min, max), StyleToken::Dim);
        }
        frame.newline();
        let window = history.snapshot(Some(self.graph.width()));
        frame.extend(self.graph.render(&window));
        frame.newline();
        frame.newline();

        self.push_legend(&mut frame);
        frame.newline();
        frame.newline();

        self.push_recent_strip(&mut frame, history, overall.total);
        frame.newline();
        frame.newline();
        frame.push("Press Ctrl+C to stop", StyleToken::Dim);

        frame
    }

    /// Classify the most recent sample into one of six mutually exclusive
    /// states and append it with the overall uptime
    fn push_status_line(&self, frame: &mut StyledText, last: Option<&Sample>, uptime_pct: f64) {
        frame.push("Status: ", StyleToken::Plain);
        match last {
            None => frame.push("Checking...", StyleToken::Notice),
            Some(sample) if sample.reachable => {
                let band = Severity::classify(sample.latency_ms);
                frame.push(
                    format!("✓ {} ({}ms)", band.label(), sample.latency_ms),
                    StyleToken::Band(band),
                );
            }
            Some(_) => frame.push("✗ Disconnected", StyleToken::Disconnected),
        }
        frame.push(format!("  Uptime: {:.1}%", uptime_pct), StyleToken::Plain);
    }

    fn push_averages_line(&self, frame: &mut StyledText, history: &History, now: Instant) {
        frame.push("Averages: ", StyleToken::Plain);
        for (name, avg) in stats::windowed(history, now) {
            match avg {
                Some(ms) => frame.push(format!("{}:{:.0}ms  ", name, ms), StyleToken::Plain),
                None => frame.push(format!("{}:--  ", name), StyleToken::Dim),
            }
        }
    }

    /// Static legend: identical regardless of data
    fn push_legend(&self, frame: &mut StyledText) {
        frame.push("Legend: ", StyleToken::Plain);
        for band in Severity::ALL {
            frame.push("●", StyleToken::Band(band));
            frame.push(format!(" {}  ", band.range_label()), StyleToken::Plain);
        }
        frame.push("×", StyleToken::Disconnected);
        frame.push(" Disconnected", StyleToken::Plain);
    }

    /// One glyph per recent sample under the graph's severity/gap rules
    fn push_recent_strip(&self, frame: &mut StyledText, history: &History, total: usize) {
        frame.push("Recent: ", StyleToken::Plain);
        if history.is_empty() {
            frame.push("No data", StyleToken::Dim);
            return;
        }
        for sample in history.snapshot(Some(self.strip_len)) {
            if sample.reachable {
                let band = Severity::classify(sample.latency_ms);
                frame.push("●", StyleToken::Band(band));
            } else {
                frame.push("×", StyleToken::Disconnected);
            }
        }
        frame.push(format!(" ({} checks)", total), StyleToken::Plain);
    }
}
