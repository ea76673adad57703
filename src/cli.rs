//! Command-line interface definitions for connprobe.
//!
//! Uses `clap` derive macros for declarative argument parsing. Every flag
//! is optional; anything left out falls back to the built-in defaults.

use crate::config::ProbeConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use crate::types::{Port, PortList, Protocol};
use clap::Parser;
use std::time::Duration;

/// Probe hosts over TCP or UDP and print one status line per attempt.
#[derive(Parser, Debug)]
#[command(name = "connprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sequential TCP/UDP reachability check", long_about = None)]
pub struct Args {
    /// Host to probe; repeat or comma-separate for several (default: built-in list)
    #[arg(short = 'H', long = "host", value_name = "HOST", value_delimiter = ',')]
    pub hosts: Vec<String>,

    /// Single port to probe on every host (default: 8089)
    #[arg(short, long, conflicts_with = "ports")]
    pub port: Option<Port>,

    /// Ports to probe on every host, in order (e.g. "80,443,8000-8002")
    #[arg(short = 'P', long)]
    pub ports: Option<PortList>,

    /// Transport protocol: tcp or udp (anything else is reported as unsupported)
    #[arg(short = 's', long, default_value = "tcp")]
    pub protocol: Protocol,

    /// Seconds to wait per attempt
    #[arg(short = 't', long, default_value_t = 3.0)]
    pub timeout: f64,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the run configuration, starting from the defaults.
    pub fn to_config(&self) -> CliResult<ProbeConfig> {
        let mut config = ProbeConfig::default()
            .with_protocol(self.protocol.clone())
            .with_timeout(parse_timeout(self.timeout)?);

        if !self.hosts.is_empty() {
            let hosts: Vec<String> = self
                .hosts
                .iter()
                .map(|h| h.trim())
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect();
            if hosts.is_empty() {
                return Err(CliError::NoHosts);
            }
            config = config.with_hosts(hosts);
        }

        if let Some(port) = self.port {
            config = config.with_port(port);
        } else if let Some(ports) = &self.ports {
            config = config.with_ports(ports.clone());
        }

        Ok(config)
    }
}

/// Convert a timeout in seconds into a `Duration`.
fn parse_timeout(secs: f64) -> CliResult<Duration> {
    if secs.is_nan() || secs <= 0.0 {
        return Err(CliError::InvalidTimeout(format!(
            "{} (must be greater than zero)",
            secs
        )));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| CliError::InvalidTimeout(e.to_string()))
}
