//! TCP connect probe.
//!
//! Completes a full handshake through the operating system's socket API
//! and reports both ends of the connection. The stream is closed as soon
//! as the addresses are read.

use crate::error::{AttemptResult, ProbeError};
use crate::prober::traits::{Connection, Prober};
use crate::types::{Protocol, Target};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// TCP connect prober.
///
/// The timeout covers name resolution and the connect itself.
/// Does not require elevated privileges.
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Attempt to connect to the target.
    async fn attempt_connect(&self, target: &Target) -> AttemptResult<TcpStream> {
        match timeout(self.timeout, TcpStream::connect(target.addr())).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(e)) => {
                trace!(addr = %target, error = %e, "connect failed");
                Err(ProbeError::from(e))
            }
            Err(_) => Err(ProbeError::Timeout),
        }
    }
}

#[async_trait]
impl Prober for TcpProber {
    fn protocol(&self) -> Protocol {
        Protocol::Tcp
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn probe(&self, target: &Target) -> AttemptResult<Connection> {
        let stream = self.attempt_connect(target).await?;
        let local_addr = stream.local_addr()?;
        let remote_addr = stream.peer_addr()?;

        Ok(Connection::Tcp {
            local_addr,
            remote_addr,
        })
    }
}
