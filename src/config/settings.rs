//! Probe run configuration.
//!
//! Defaults are compiled in; the command line can override each field.
//! There is no configuration file.

use crate::types::{Port, PortList, Protocol, Target};
use std::fmt;
use std::time::Duration;

/// Default hosts probed when none are given.
pub const DEFAULT_HOSTS: &[&str] = &["host1.example.com", "host2.example.com"];

/// Default port for the single-port run.
pub const DEFAULT_PORT: Port = Port::new_unchecked(8089);

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Label printed at the start of each result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLabel {
    /// Single-port run.
    ConnectTest,
    /// Multi-port run. Used for UDP as well.
    TcpConnect,
}

impl ReportLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConnectTest => "connect_test",
            Self::TcpConnect => "tcp_connect",
        }
    }
}

impl fmt::Display for ReportLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which ports each host is probed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSelection {
    Single(Port),
    List(PortList),
}

impl PortSelection {
    /// Ports in probe order.
    pub fn ports(&self) -> &[Port] {
        match self {
            Self::Single(port) => std::slice::from_ref(port),
            Self::List(list) => list.as_slice(),
        }
    }

    pub fn label(&self) -> ReportLabel {
        match self {
            Self::Single(_) => ReportLabel::ConnectTest,
            Self::List(_) => ReportLabel::TcpConnect,
        }
    }
}

/// Configuration for a probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Hosts to probe, in order.
    pub hosts: Vec<String>,
    /// Ports probed on every host.
    pub ports: PortSelection,
    /// Transport protocol.
    pub protocol: Protocol,
    /// Per-attempt timeout.
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            hosts: DEFAULT_HOSTS.iter().map(|h| h.to_string()).collect(),
            ports: PortSelection::Single(DEFAULT_PORT),
            protocol: Protocol::Tcp,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// Set the hosts.
    pub fn with_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Probe a single port per host.
    pub fn with_port(mut self, port: Port) -> Self {
        self.ports = PortSelection::Single(port);
        self
    }

    /// Probe a list of ports per host.
    pub fn with_ports(mut self, ports: impl Into<PortList>) -> Self {
        self.ports = PortSelection::List(ports.into());
        self
    }

    /// Set the protocol.
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Label for every line of this run.
    pub fn label(&self) -> ReportLabel {
        self.ports.label()
    }

    /// Every (host, port) pair, host-major.
    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.hosts.iter().flat_map(move |host| {
            self.ports
                .ports()
                .iter()
                .map(move |&port| Target::new(host.as_str(), port))
        })
    }

    /// Number of attempts this run will make, one per target.
    pub fn target_count(&self) -> usize {
        self.hosts.len() * self.ports.ports().len()
    }
}
