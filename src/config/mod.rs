//! Configuration for a probe run.
//!
//! Holds the compiled-in defaults and the builder used by the CLI layer.

mod settings;

pub use settings::{
    PortSelection, ProbeConfig, ReportLabel, DEFAULT_HOSTS, DEFAULT_PORT, DEFAULT_TIMEOUT,
};
