//! Monitor module for the netpulse reachability dashboard

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod graph;
pub mod history;
pub mod logging;
pub mod probe;
pub mod reporter;
pub mod runner;
pub mod sink;
pub mod stats;
pub mod styled;

pub use config::Config;
pub use constants::*;
pub use display::DisplayComposer;
pub use error::{MonitorError, Result};
pub use graph::TrendGraph;
pub use history::{History, Sample};
pub use logging::init_logging;
pub use probe::{Probe, ProbeOutcome, TcpProbe};
pub use reporter::Reporter;
pub use runner::{FinalStats, Monitor};
pub use sink::{NullSink, RenderSink, TerminalSink};
pub use stats::{latency_range, overall, windowed, OverallStats};
pub use styled::{Severity, StyleToken, StyledText};
