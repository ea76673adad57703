//! Prober module - runs the probe loop.
//!
//! Targets are probed one at a time, host-major, each attempt awaited
//! before the next starts. Every attempt yields exactly one result, which
//! is reported before moving on.

pub mod tcp;
pub mod traits;
pub mod udp;

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::output::Reporter;
use crate::platform::os_label;
use crate::types::Protocol;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

pub use tcp::TcpProber;
pub use traits::{BoxedProber, Connection, ProbeResult, Prober};
pub use udp::{UdpProber, UDP_PAYLOAD};

/// Create the prober for a protocol.
///
/// Returns `None` for unsupported protocols; no socket is ever opened for them.
pub fn create_prober(protocol: &Protocol, timeout: Duration) -> Option<BoxedProber> {
    match protocol {
        Protocol::Tcp => Some(Box::new(TcpProber::new(timeout))),
        Protocol::Udp => Some(Box::new(UdpProber::new(timeout))),
        Protocol::Unsupported(_) => None,
    }
}

/// Probe every configured target and report each result.
///
/// Returns the number of results written. Probe failures are part of the
/// report; only a failure to write output is an error.
pub async fn run_probes<W: Write>(
    config: &ProbeConfig,
    reporter: &mut Reporter<W>,
) -> io::Result<usize> {
    let prober = create_prober(&config.protocol, config.timeout);
    run_with_prober(config, prober.as_deref(), reporter).await
}

/// Probe loop with an explicit prober. `None` reports every target as
/// an unsupported protocol.
pub async fn run_with_prober<W: Write>(
    config: &ProbeConfig,
    prober: Option<&dyn Prober>,
    reporter: &mut Reporter<W>,
) -> io::Result<usize> {
    let os = os_label();
    let label = config.label();

    info!(
        hosts = config.hosts.len(),
        targets = config.target_count(),
        protocol = %config.protocol,
        timeout_ms = config.timeout.as_millis() as u64,
        "starting probe run"
    );
    if prober.is_none() {
        warn!(protocol = %config.protocol, "unsupported protocol, no probes will be sent");
    }

    let mut written = 0;
    for target in config.targets() {
        debug!(addr = %target, "probing");

        let outcome = match prober {
            Some(prober) => prober.probe(&target).await,
            None => Err(ProbeError::UnsupportedProtocol),
        };

        match &outcome {
            Ok(_) => debug!(addr = %target, "connected"),
            Err(e) => debug!(addr = %target, kind = e.kind(), error = %e, "not connected"),
        }

        let result = ProbeResult::new(
            label,
            target,
            config.protocol.clone(),
            os.as_str(),
            outcome,
        );
        reporter.report(&result)?;
        written += 1;
    }

    info!(results = written, "probe run complete");
    Ok(written)
}
