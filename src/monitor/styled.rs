//! Structured styled text: runs of text paired with opaque style tokens.
//!
//! The statistics and graph code only ever attaches tokens; interpreting a
//! token as a concrete color or weight is the render sink's job.

use crate::monitor::constants::{EXCELLENT_MS, FAIR_MS, GOOD_MS, SLOW_MS};

/// Latency severity band. Five ordered bands, exhaustive over all
/// non-negative latencies, upper-exclusive boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Excellent,
    Good,
    Fair,
    Slow,
    VerySlow,
}

impl Severity {
    /// Map a latency to its band. Total: every latency lands in exactly one.
    pub fn classify(latency_ms: u64) -> Self {
        if latency_ms < EXCELLENT_MS {
            Severity::Excellent
        } else if latency_ms < GOOD_MS {
            Severity::Good
        } else if latency_ms < FAIR_MS {
            Severity::Fair
        } else if latency_ms < SLOW_MS {
            Severity::Slow
        } else {
            Severity::VerySlow
        }
    }

    /// Human-readable tier name for the status line
    pub fn label(self) -> &'static str {
        match self {
            Severity::Excellent => "Excellent",
            Severity::Good => "Good",
            Severity::Fair => "Fair",
            Severity::Slow => "Slow",
            Severity::VerySlow => "Very Slow",
        }
    }

    /// Latency range label used by the legend
    pub fn range_label(self) -> &'static str {
        match self {
            Severity::Excellent => "<30ms",
            Severity::Good => "30-50ms",
            Severity::Fair => "50-100ms",
            Severity::Slow => "100-300ms",
            Severity::VerySlow => ">300ms",
        }
    }

    pub const ALL: [Severity; 5] = [
        Severity::Excellent,
        Severity::Good,
        Severity::Fair,
        Severity::Slow,
        Severity::VerySlow,
    ];
}

/// Opaque style token attached to a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Plain,
    Dim,
    /// Dashboard title
    Title,
    /// Section emphasis (bold, uncolored)
    Emphasis,
    /// Transient notices ("Checking...")
    Notice,
    /// Unreachable samples and gap glyphs
    Disconnected,
    /// One of the five latency severity bands
    Band(Severity),
}

/// A single run of identically-styled text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub token: StyleToken,
}

/// A renderable block: an ordered sequence of styled runs with explicit
/// newlines. Rebuilt wholesale every refresh tick, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    runs: Vec<Run>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a styled run. Empty text is dropped.
    pub fn push(&mut self, text: impl Into<String>, token: StyleToken) {
        let text = text.into();
        if !text.is_empty() {
            self.runs.push(Run { text, token });
        }
    }

    /// Append a line break
    pub fn newline(&mut self) {
        self.runs.push(Run {
            text: "\n".to_string(),
            token: StyleToken::Plain,
        });
    }

    /// Append all runs of another block
    pub fn extend(&mut self, other: StyledText) {
        self.runs.extend(other.runs);
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text with style tokens stripped
    pub fn to_plain(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}
