//! Transport protocol selector.

use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Transport protocol used for a probe.
///
/// Parsing is case-insensitive and never fails: anything other than
/// `tcp` or `udp` becomes [`Protocol::Unsupported`] so it can be reported
/// per target instead of aborting the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Connection-oriented probe (full TCP handshake).
    #[default]
    Tcp,
    /// Send-only datagram probe.
    Udp,
    /// Any other name, kept as written.
    Unsupported(String),
}

impl FromStr for Protocol {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Ok(match name.to_lowercase().as_str() {
            "tcp" => Self::Tcp,
            "udp" => Self::Udp,
            _ => Self::Unsupported(name.to_string()),
        })
    }
}

/// Upper-cased name, as shown in the `protocol=` field.
impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "TCP"),
            Self::Udp => write!(f, "UDP"),
            Self::Unsupported(name) => write!(f, "{}", name.to_uppercase()),
        }
    }
}

impl Serialize for Protocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
