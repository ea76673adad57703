//! Error types for connprobe.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::io;
use thiserror::Error;

/// Failure of a single probe attempt.
///
/// Every variant is reported the same way: its message is embedded in the
/// result line. None of them stops the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("timed out")]
    Timeout,

    #[error("{0}")]
    ConnectionRefused(String),

    #[error("{0}")]
    NetworkUnreachable(String),

    #[error("{0}")]
    HostUnreachable(String),

    #[error("{0}")]
    DnsResolution(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Io(String),

    #[error("Unsupported protocol")]
    UnsupportedProtocol,
}

impl ProbeError {
    /// Short machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::ConnectionRefused(_) => "connection_refused",
            Self::NetworkUnreachable(_) => "network_unreachable",
            Self::HostUnreachable(_) => "host_unreachable",
            Self::DnsResolution(_) => "dns_resolution",
            Self::PermissionDenied(_) => "permission_denied",
            Self::Io(_) => "io",
            Self::UnsupportedProtocol => "unsupported_protocol",
        }
    }
}

impl From<io::Error> for ProbeError {
    fn from(e: io::Error) -> Self {
        let message = e.to_string();
        match e.kind() {
            io::ErrorKind::ConnectionRefused => Self::ConnectionRefused(message),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(message),
            io::ErrorKind::TimedOut => Self::Timeout,
            _ => {
                let lower = message.to_lowercase();
                if lower.contains("no route to host") {
                    Self::HostUnreachable(message)
                } else if lower.contains("unreachable") {
                    if lower.contains("host") {
                        Self::HostUnreachable(message)
                    } else {
                        Self::NetworkUnreachable(message)
                    }
                } else if lower.contains("lookup address")
                    || lower.contains("name or service not known")
                    || lower.contains("nodename nor servname")
                    || lower.contains("no such host")
                    || lower.contains("no addresses")
                    || lower.contains("could not resolve")
                {
                    Self::DnsResolution(message)
                } else {
                    Self::Io(message)
                }
            }
        }
    }
}

/// Result type alias for a single probe attempt.
pub type AttemptResult<T> = Result<T, ProbeError>;

/// Errors raised while turning command-line arguments into a run.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("at least one host is required")]
    NoHosts,
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refused_keeps_os_message() {
        let err: ProbeError = io::Error::from(io::ErrorKind::ConnectionRefused).into();
        assert!(matches!(err, ProbeError::ConnectionRefused(_)));
        assert!(!err.to_string().is_empty());
        assert_eq!(err.kind(), "connection_refused");
    }

    #[test]
    fn test_timed_out_maps_to_timeout() {
        let err: ProbeError = io::Error::from(io::ErrorKind::TimedOut).into();
        assert_eq!(err, ProbeError::Timeout);
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn test_message_classification() {
        let err: ProbeError = io::Error::new(
            io::ErrorKind::Other,
            "failed to lookup address information: Name or service not known",
        )
        .into();
        assert!(matches!(err, ProbeError::DnsResolution(_)));

        let err: ProbeError = io::Error::new(io::ErrorKind::Other, "Network is unreachable").into();
        assert!(matches!(err, ProbeError::NetworkUnreachable(_)));

        let err: ProbeError = io::Error::new(io::ErrorKind::Other, "No route to host").into();
        assert!(matches!(err, ProbeError::HostUnreachable(_)));

        let err: ProbeError = io::Error::new(io::ErrorKind::Other, "something else").into();
        assert_eq!(err, ProbeError::Io("something else".to_string()));
    }

    #[test]
    fn test_unsupported_message() {
        assert_eq!(
            ProbeError::UnsupportedProtocol.to_string(),
            "Unsupported protocol"
        );
    }
}
