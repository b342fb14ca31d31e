use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result of a single reachability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Round trip completed; latency in whole milliseconds (floor-rounded)
    Reachable { latency_ms: u64 },
    /// Transport error, timeout, or resolution failure
    Unreachable,
}

impl ProbeOutcome {
    pub fn latency_ms(&self) -> Option<u64> {
        match self {
            ProbeOutcome::Reachable { latency_ms } => Some(*latency_ms),
            ProbeOutcome::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }
}

/// Trait for reachability probes.
///
/// A probe performs one network round trip per call, blocking at most its
/// own timeout. It never errors: every transport failure is normalized to
/// `ProbeOutcome::Unreachable`.
pub trait Probe: Send {
    fn check(&mut self) -> ProbeOutcome;
}

/// TCP connect-time probe.
///
/// Measures the wall time of a TCP handshake against `host:port`, the way
/// tcping does. Needs no raw sockets or elevated privileges.
#[derive(Debug)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    fn resolve(&self) -> Option<SocketAddr> {
        match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(mut addrs) => addrs.next(),
            Err(e) => {
                warn!(host = %self.host, error = %e, "Failed to resolve probe target");
                None
            }
        }
    }
}

impl Probe for TcpProbe {
    fn check(&mut self) -> ProbeOutcome {
        let Some(addr) = self.resolve() else {
            return ProbeOutcome::Unreachable;
        };

        let started = Instant::now();
        match TcpStream::connect_timeout(&addr, self.timeout) {
            Ok(_) => {
                // as_millis floors the sub-millisecond remainder
                let latency_ms = started.elapsed().as_millis() as u64;
                debug!(addr = %addr, latency_ms = latency_ms, "Probe completed");
                ProbeOutcome::Reachable { latency_ms }
            }
            Err(e) => {
                debug!(addr = %addr, error = %e, "Probe failed");
                ProbeOutcome::Unreachable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::net::TcpListener;

    mock! {
        pub Probe {}

        impl Probe for Probe {
            fn check(&mut self) -> ProbeOutcome;
        }
    }

    #[test]
    fn test_outcome_latency_accessor() {
        assert_eq!(
            ProbeOutcome::Reachable { latency_ms: 12 }.latency_ms(),
            Some(12)
        );
        assert_eq!(ProbeOutcome::Unreachable.latency_ms(), None);
        assert!(!ProbeOutcome::Unreachable.is_reachable());
    }

    #[test]
    fn test_tcp_probe_reaches_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
        let port = listener.local_addr().unwrap().port();

        let mut probe = TcpProbe::new("127.0.0.1", port, Duration::from_secs(1));
        assert!(probe.check().is_reachable());
    }

    #[test]
    fn test_tcp_probe_normalizes_refusal_to_unreachable() {
        // Bind then drop to get a port with nothing listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let mut probe = TcpProbe::new("127.0.0.1", port, Duration::from_millis(200));
        assert_eq!(probe.check(), ProbeOutcome::Unreachable);
    }

    #[test]
    fn test_tcp_probe_normalizes_resolution_failure() {
        let mut probe = TcpProbe::new(
            "nonexistent.invalid",
            53,
            Duration::from_millis(200),
        );
        assert_eq!(probe.check(), ProbeOutcome::Unreachable);
    }
}

#[cfg(test)]
pub use tests::MockProbe;
