use anyhow::{Context, Result};
use clap::Parser;
use netpulse::monitor::{
    init_logging, Config, Monitor, NullSink, Reporter, TcpProbe, TerminalSink,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments
    let config = Config::parse();

    // Initialize structured logging with config options
    init_logging(&config.log_level, config.is_json_format());

    // Validate configuration
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        error!(error = %e, "Monitor failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    // Interrupt -> shutdown flag, observed at loop slice boundaries
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::Relaxed);
    })
    .context("Failed to install interrupt handler")?;

    info!(
        host = %config.host,
        port = config.port,
        interval_secs = config.interval_secs,
        quiet = config.quiet,
        "Starting reachability monitor"
    );

    let mut probe = TcpProbe::new(config.host.clone(), config.port, config.timeout());
    let mut monitor = Monitor::new(&config);

    let stats = if config.quiet {
        monitor.run(&mut probe, &mut NullSink, &shutdown)?
    } else {
        let mut sink = TerminalSink::new().context("Failed to initialize terminal")?;
        let stats = monitor.run(&mut probe, &mut sink, &shutdown)?;
        // Leave the alternate screen before printing the summary so it lands
        // on the normal screen's scrollback
        sink.restore().context("Failed to restore terminal")?;
        stats
    };

    Reporter.print_summary(&stats)?;
    Ok(())
}
