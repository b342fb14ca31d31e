//! Constants used throughout the monitor

/// Default probe target host
pub const DEFAULT_HOST: &str = "8.8.8.8";

/// Default TCP port for the connect probe (DNS, open on public resolvers)
pub const DEFAULT_PORT: u16 = 53;

/// Default seconds between probes
pub const DEFAULT_INTERVAL_SECS: u64 = 2;

/// Default probe timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Default history capacity (15 minutes at a 2s probe interval)
pub const HISTORY_CAPACITY: usize = 450;

/// Default graph width in columns, one sample per column (3 minutes at 2s)
pub const GRAPH_WIDTH: usize = 90;

/// Default graph height in rows
pub const GRAPH_HEIGHT: usize = 8;

/// Default number of samples shown in the recent status strip
pub const STRIP_LEN: usize = 20;

/// Dashboard refresh slice in milliseconds (clock updates between probes)
pub const REFRESH_SLICE_MS: u64 = 1000;

/// Upper bound of the Excellent latency band (exclusive), milliseconds
pub const EXCELLENT_MS: u64 = 30;

/// Upper bound of the Good latency band (exclusive), milliseconds
pub const GOOD_MS: u64 = 50;

/// Upper bound of the Fair latency band (exclusive), milliseconds
pub const FAIR_MS: u64 = 100;

/// Upper bound of the Slow latency band (exclusive), milliseconds
pub const SLOW_MS: u64 = 300;

/// Latency spans narrower than this are widened before quantization, ms
pub const FLAT_RANGE_MS: u64 = 50;

/// Amount added above the minimum when widening a flat range, ms
pub const RANGE_WIDEN_MS: u64 = 100;

/// Rolling-average windows in display order: name and trailing seconds
pub const TIME_WINDOWS: [(&str, u64); 4] =
    [("1m", 60), ("5m", 300), ("15m", 900), ("30m", 1800)];

/// Summary histogram lower bound in milliseconds
pub const HISTOGRAM_LOW_BOUND_MS: u64 = 1;

/// Summary histogram upper bound in milliseconds
pub const HISTOGRAM_HIGH_BOUND_MS: u64 = 60_000;

/// Summary histogram significant digits for precision
pub const HISTOGRAM_SIGNIFICANT_DIGITS: u8 = 3;
