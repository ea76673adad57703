//! UDP send probe.
//!
//! UDP is connectionless, so the probe only checks that one datagram
//! leaves the local socket without an OS error. No reply is awaited and a
//! successful probe says nothing about whether the peer received it.

use crate::error::{AttemptResult, ProbeError};
use crate::prober::traits::{Connection, Prober};
use crate::types::{Protocol, Target};
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use tokio::time::timeout;

/// Payload sent to every UDP target.
pub const UDP_PAYLOAD: &[u8] = b"test";

/// UDP send prober.
pub struct UdpProber {
    timeout: Duration,
}

impl UdpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve, bind and send one datagram.
    async fn send_probe(&self, target: &Target) -> AttemptResult<Connection> {
        let addr = resolve_one(target).await?;

        let socket = UdpSocket::bind(unspecified_for(&addr)).await?;
        socket.send_to(UDP_PAYLOAD, addr).await?;

        Ok(Connection::Udp {
            host: target.host.clone(),
            port: target.port,
        })
    }
}

#[async_trait]
impl Prober for UdpProber {
    fn protocol(&self) -> Protocol {
        Protocol::Udp
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn probe(&self, target: &Target) -> AttemptResult<Connection> {
        match timeout(self.timeout, self.send_probe(target)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout),
        }
    }
}

/// Resolve the target, preferring an IPv4 address.
async fn resolve_one(target: &Target) -> AttemptResult<SocketAddr> {
    let addrs: Vec<SocketAddr> = lookup_host(target.addr()).await?.collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| {
            ProbeError::DnsResolution(format!("no addresses found for {}", target.host))
        })
}

/// Wildcard bind address in the same family as `addr`.
fn unspecified_for(addr: &SocketAddr) -> SocketAddr {
    if addr.is_ipv4() {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    }
}
