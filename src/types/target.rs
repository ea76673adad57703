//! Probe target: a host paired with a port.

use super::Port;
use std::fmt;

/// A single (host, port) pair to probe.
///
/// The host is kept exactly as configured, a DNS name or an IP literal.
/// Resolution happens inside each probe attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub host: String,
    pub port: Port,
}

impl Target {
    pub fn new(host: impl Into<String>, port: Port) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The `(host, port)` pair accepted by tokio's address resolution.
    pub fn addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port.as_u16())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
