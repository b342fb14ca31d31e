//! Trend renderer: quantizes recent samples into a fixed-height, row-major
//! sparkline with gap markers and a short-jump connector heuristic.

use crate::monitor::constants::{FLAT_RANGE_MS, RANGE_WIDEN_MS};
use crate::monitor::history::Sample;
use crate::monitor::styled::{Severity, StyleToken, StyledText};

/// Renders the most recent samples as a multi-row ASCII latency graph.
///
/// Input wider than `width` is clamped to the trailing `width` samples; that
/// clamp is part of the contract, one column per plotted sample.
#[derive(Debug, Clone, Copy)]
pub struct TrendGraph {
    width: usize,
    height: usize,
}

impl TrendGraph {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render `samples` (oldest-first). Degenerate input never panics:
    /// fewer than two samples or an all-gap window yield placeholders.
    pub fn render(&self, samples: &[Sample]) -> StyledText {
        let mut text = StyledText::new();

        let start = samples.len().saturating_sub(self.width);
        let samples = &samples[start..];

        if samples.len() < 2 {
            text.push("No data yet...", StyleToken::Dim);
            return text;
        }

        // A gap column is an unreachable or invalid-latency sample
        let points: Vec<Option<u64>> = samples.iter().map(|s| s.latency()).collect();

        let mut range: Option<(u64, u64)> = None;
        for value in points.iter().flatten() {
            range = Some(match range {
                None => (*value, *value),
                Some((min, max)) => (min.min(*value), max.max(*value)),
            });
        }
        let Some((min_rt, mut max_rt)) = range else {
            text.push("All connections failed", StyleToken::Disconnected);
            return text;
        };

        // Widen near-flat ranges so the graph keeps vertical resolution and
        // the normalization below never divides by zero
        if max_rt - min_rt < FLAT_RANGE_MS {
            max_rt = min_rt + RANGE_WIDEN_MS;
        }

        // Quantize each value to a target row counted from the bottom
        let plotted: Vec<Option<(usize, u64)>> = points
            .iter()
            .map(|point| {
                point.map(|value| {
                    let normalized = if max_rt > min_rt {
                        (value - min_rt) as f64 / (max_rt - min_rt) as f64
                    } else {
                        0.5
                    };
                    let row = (normalized * (self.height - 1) as f64).round() as usize;
                    (row, value)
                })
            })
            .collect();

        for i in 0..self.height {
            let y_value =
                max_rt as f64 - i as f64 * (max_rt - min_rt) as f64 / (self.height - 1) as f64;
            text.push(format!("{:3}ms ┤", y_value as u64), StyleToken::Dim);

            let row_from_bottom = self.height - 1 - i;
            for (j, plot) in plotted.iter().enumerate() {
                match plot {
                    None => {
                        // Gap marker only on the vertical-center row
                        if i == self.height / 2 {
                            text.push("×", StyleToken::Disconnected);
                        } else {
                            text.push(" ", StyleToken::Plain);
                        }
                    }
                    Some((row, value)) => {
                        if *row == row_from_bottom {
                            let band = Severity::classify(*value);
                            text.push("●", StyleToken::Band(band));
                        } else if j > 0
                            && plotted[j - 1]
                                .map_or(false, |(prev, _)| prev.abs_diff(row_from_bottom) <= 1)
                        {
                            // Connect only nearby consecutive points; larger
                            // jumps stay unconnected
                            text.push("─", StyleToken::Dim);
                        } else {
                            text.push(" ", StyleToken::Plain);
                        }
                    }
                }
            }
            text.newline();
        }

        // X-axis baseline
        text.push("     └", StyleToken::Dim);
        text.push("─".repeat(plotted.len()), StyleToken::Dim);
        text.newline();

        // Time labels: elapsed span under the left edge, "now" on the right
        let span_secs = samples[samples.len() - 1]
            .timestamp
            .saturating_duration_since(samples[0].timestamp)
            .as_secs();
        let start_label = if span_secs < 60 {
            format!("{}s ago", span_secs)
        } else {
            format!("{}m ago", span_secs / 60)
        };
        text.push("      ", StyleToken::Plain);
        let padding = plotted.len().saturating_sub(start_label.len() + 3);
        text.push(start_label, StyleToken::Dim);
        if padding > 0 {
            text.push(" ".repeat(padding), StyleToken::Plain);
        }
        text.push("now", StyleToken::Dim);

        text
    }
}
