use netpulse::monitor::{
    Config, History, Monitor, Probe, ProbeOutcome, RenderSink, Result, Sample, StyledText,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Test helper: probe that replays a fixed script of outcomes and raises the
/// shutdown flag once the script is exhausted
struct ScriptedProbe {
    outcomes: VecDeque<ProbeOutcome>,
    shutdown: Arc<AtomicBool>,
}

impl ScriptedProbe {
    fn new(outcomes: Vec<ProbeOutcome>, shutdown: Arc<AtomicBool>) -> Self {
        Self {
            outcomes: outcomes.into(),
            shutdown,
        }
    }
}

impl Probe for ScriptedProbe {
    fn check(&mut self) -> ProbeOutcome {
        let outcome = self.outcomes.pop_front().unwrap_or(ProbeOutcome::Unreachable);
        if self.outcomes.is_empty() {
            self.shutdown.store(true, Ordering::Relaxed);
        }
        outcome
    }
}

/// Test helper: sink that keeps every painted frame as plain text
#[derive(Default)]
struct CollectSink {
    frames: Vec<String>,
}

impl RenderSink for CollectSink {
    fn paint(&mut self, frame: &StyledText) -> Result<()> {
        self.frames.push(frame.to_plain());
        Ok(())
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 53,
        interval_secs: 0,
        timeout_secs: 1,
        capacity: 450,
        graph_width: 90,
        graph_height: 8,
        strip_len: 20,
        quiet: false,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

fn reachable(latency_ms: u64) -> ProbeOutcome {
    ProbeOutcome::Reachable { latency_ms }
}

#[test]
fn test_config_validation() {
    let mut config = test_config();
    // Zero interval must fail validation
    assert!(config.validate().is_err());

    config.interval_secs = 2;
    assert!(config.validate().is_ok());

    config.capacity = 0;
    assert!(config.validate().is_err());
    config.capacity = 450;

    config.graph_height = 1;
    assert!(config.validate().is_err());
    config.graph_height = 8;

    config.log_format = "xml".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_end_to_end_scenario() -> Result<()> {
    // The canonical five-sample scenario: reachable 20/25ms, one failure,
    // then 200ms and 30ms
    let shutdown = Arc::new(AtomicBool::new(false));
    let mut probe = ScriptedProbe::new(
        vec![
            reachable(20),
            reachable(25),
            ProbeOutcome::Unreachable,
            reachable(200),
            reachable(30),
        ],
        Arc::clone(&shutdown),
    );
    let mut sink = CollectSink::default();

    let mut monitor = Monitor::new(&test_config());
    let stats = monitor.run(&mut probe, &mut sink, &shutdown)?;

    assert_eq!(stats.total, 5);
    assert_eq!(stats.uptime_pct, 80.0);
    assert_eq!(stats.avg_latency_ms, Some(68.75));
    assert_eq!(stats.latencies, vec![20, 25, 200, 30]);

    // One frame per probe; the last one reflects the whole scenario
    assert_eq!(sink.frames.len(), 5);
    let last = sink.frames.last().unwrap();
    assert!(last.contains("Uptime: 80.0%"));
    // Five strip glyphs in probe order, the third disconnected
    assert!(last.contains("Recent: ●●×●● (5 checks)"));
    // Last sample is 30ms: Good tier, upper-exclusive band boundary
    assert!(last.contains("✓ Good (30ms)"));
    assert!(last.contains("(20-200ms)"));
    Ok(())
}

#[test]
fn test_all_failures_dashboard_still_renders() -> Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));
    let mut probe = ScriptedProbe::new(
        vec![ProbeOutcome::Unreachable; 3],
        Arc::clone(&shutdown),
    );
    let mut sink = CollectSink::default();

    let mut monitor = Monitor::new(&test_config());
    let stats = monitor.run(&mut probe, &mut sink, &shutdown)?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.uptime_pct, 0.0);
    assert_eq!(stats.avg_latency_ms, None);

    let last = sink.frames.last().unwrap();
    assert!(last.contains("✗ Disconnected"));
    assert!(last.contains("All connections failed"));
    assert!(last.contains("Recent: ×××"));
    Ok(())
}

#[test]
fn test_history_eviction_over_long_run() -> Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));
    let outcomes: Vec<ProbeOutcome> = (0..40).map(|i| reachable(10 + i)).collect();
    let mut probe = ScriptedProbe::new(outcomes, Arc::clone(&shutdown));
    let mut sink = CollectSink::default();

    let mut config = test_config();
    config.capacity = 10;
    let mut monitor = Monitor::new(&config);
    let stats = monitor.run(&mut probe, &mut sink, &shutdown)?;

    // All 40 probes painted, but only the newest 10 samples survive
    assert_eq!(sink.frames.len(), 40);
    assert_eq!(stats.total, 10);
    assert_eq!(monitor.history().len(), 10);
    let oldest = monitor.history().snapshot(None)[0];
    assert_eq!(oldest.latency_ms, 40);
    Ok(())
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut history = History::new(4);
    let t = Instant::now();
    history.append(Sample::reachable(t, 12));
    let snap = history.snapshot(None);
    history.append(Sample::unreachable(t));
    // The earlier snapshot is unaffected by later mutation
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].latency_ms, 12);
}
