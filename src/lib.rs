//! netpulse - continuous network reachability monitor
//!
//! Probes a target host at a fixed cadence, keeps a bounded sliding history
//! of timestamped samples, and renders a live terminal dashboard with
//! rolling statistics and a quantized latency trend graph.

pub mod monitor;
