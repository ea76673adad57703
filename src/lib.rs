//! # connprobe - Sequential TCP/UDP Reachability Checks
//!
//! connprobe walks a list of hosts and ports, makes one attempt per pair
//! and prints one `key=value` status line per attempt.
//!
//! ## Features
//!
//! - **TCP**: full connect with timeout, reporting local and remote addresses
//! - **UDP**: sends a 4-byte `test` datagram; success means the local send worked
//! - **Failure isolation**: a failed attempt is a reported outcome, never fatal
//! - **Output**: plain `key=value` lines or JSON lines, flushed per attempt
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use connprobe::config::ProbeConfig;
//! use connprobe::output::{OutputFormat, Reporter};
//! use connprobe::prober::run_probes;
//! use connprobe::types::Port;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::io::Result<()> {
//!     let config = ProbeConfig::default()
//!         .with_hosts(["localhost"])
//!         .with_port(Port::new(80).unwrap());
//!
//!     let mut reporter = Reporter::new(std::io::stdout(), OutputFormat::Plain);
//!     run_probes(&config, &mut reporter).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - `Port`, `PortList`, `Protocol` and `Target`
//! - [`config`] - Run configuration and its compiled-in defaults
//! - [`prober`] - The `Prober` trait, TCP/UDP implementations and the probe loop
//! - [`output`] - Line rendering and the per-attempt reporter
//! - [`platform`] - OS label for the `os=` field
//! - [`error`] - Error types
//! - [`cli`] - Command-line arguments

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod platform;
pub mod prober;
pub mod types;

// Re-export commonly used types
pub use config::ProbeConfig;
pub use error::{CliError, ProbeError};
pub use prober::{run_probes, Connection, ProbeResult, Prober};
pub use types::{Port, PortList, Protocol, Target};
