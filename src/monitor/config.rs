use crate::monitor::constants::*;
use crate::monitor::error::{MonitorError, Result};
use clap::Parser;
use std::time::Duration;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "netpulse")]
#[command(about = "Continuous network reachability monitor with a live terminal dashboard")]
pub struct Config {
    /// Target host to probe
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// TCP port used for the connect probe
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Seconds between probes
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval_secs: u64,

    /// Probe timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Number of samples retained in history
    #[arg(long, default_value_t = HISTORY_CAPACITY)]
    pub capacity: usize,

    /// Graph width in columns (one column per sample)
    #[arg(long, default_value_t = GRAPH_WIDTH)]
    pub graph_width: usize,

    /// Graph height in rows
    #[arg(long, default_value_t = GRAPH_HEIGHT)]
    pub graph_height: usize,

    /// Number of samples in the recent status strip
    #[arg(long, default_value_t = STRIP_LEN)]
    pub strip_len: usize,

    /// Disable the live dashboard (probe and log only)
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log format (text or json)
    #[arg(long, default_value = "text")]
    pub log_format: String,
}

impl Config {
    /// Returns the configured probe interval as a Duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Returns the configured probe timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_json_format(&self) -> bool {
        self.log_format == "json"
    }

    /// Validates the configuration values
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        if self.interval_secs == 0 {
            return Err(MonitorError::Config("interval must be > 0".into()));
        }
        if self.timeout_secs == 0 {
            return Err(MonitorError::Config("timeout must be > 0".into()));
        }
        if self.capacity == 0 {
            return Err(MonitorError::Config("capacity must be > 0".into()));
        }
        if self.graph_width < 2 || self.graph_height < 2 {
            return Err(MonitorError::Config(
                "graph dimensions must be at least 2".into(),
            ));
        }
        if self.strip_len == 0 {
            return Err(MonitorError::Config("strip length must be > 0".into()));
        }
        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(MonitorError::Config(format!(
                "unknown log format: {}",
                self.log_format
            )));
        }
        debug!("Configuration validated successfully");
        Ok(())
    }
}
