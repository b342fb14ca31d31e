use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging with configurable level and format.
///
/// The level from the config is the default; `RUST_LOG` overrides it when set.
/// Examples:
/// - `RUST_LOG=debug` - Debug level and above
/// - `RUST_LOG=netpulse=debug` - Debug level for this crate only
///
/// Log lines go to stderr so they never land inside the live dashboard
/// region on stdout.
pub fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_line_number(true)
                    .with_file(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
