//! Prober trait abstraction.
//!
//! Defines a common interface for the TCP and UDP probes, plus the
//! per-attempt result record.

use crate::config::ReportLabel;
use crate::error::AttemptResult;
use crate::types::{Port, Protocol, Target};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

/// What a successful attempt established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    /// TCP handshake completed.
    Tcp {
        local_addr: SocketAddr,
        remote_addr: SocketAddr,
    },
    /// UDP datagram left the local socket. Says nothing about the peer.
    Udp { host: String, port: Port },
}

/// Result of probing a single target.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub label: ReportLabel,
    pub target: Target,
    pub protocol: Protocol,
    pub os: String,
    pub outcome: AttemptResult<Connection>,
}

impl ProbeResult {
    /// Create a new probe result.
    pub fn new(
        label: ReportLabel,
        target: Target,
        protocol: Protocol,
        os: impl Into<String>,
        outcome: AttemptResult<Connection>,
    ) -> Self {
        Self {
            label,
            target,
            protocol,
            os: os.into(),
            outcome,
        }
    }

    pub fn connected(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Trait for probe implementations.
///
/// One call is one attempt: any socket opened inside `probe` is dropped
/// before it returns, whatever the outcome.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Protocol this prober speaks.
    fn protocol(&self) -> Protocol;

    /// Per-attempt timeout.
    fn timeout(&self) -> Duration;

    /// Probe a single target.
    async fn probe(&self, target: &Target) -> AttemptResult<Connection>;
}

/// A boxed prober for dynamic dispatch.
pub type BoxedProber = Box<dyn Prober>;
