//! JSON-lines output formatting.

use super::plain::addr_token;
use crate::prober::{Connection, ProbeResult};
use crate::types::{Port, Protocol};
use serde::Serialize;

/// One JSON object per attempt.
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    label: &'a str,
    host: &'a str,
    port: Port,
    protocol: &'a Protocol,
    connected: bool,
    os: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sent_udp_probe_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
}

impl<'a> From<&'a ProbeResult> for JsonRecord<'a> {
    fn from(result: &'a ProbeResult) -> Self {
        let mut record = Self {
            label: result.label.as_str(),
            host: &result.target.host,
            port: result.target.port,
            protocol: &result.protocol,
            connected: result.connected(),
            os: &result.os,
            local_addr: None,
            remote_addr: None,
            sent_udp_probe_to: None,
            error: None,
            error_kind: None,
        };

        match &result.outcome {
            Ok(Connection::Tcp {
                local_addr,
                remote_addr,
            }) => {
                record.local_addr = Some(addr_token(local_addr));
                record.remote_addr = Some(addr_token(remote_addr));
            }
            Ok(Connection::Udp { host, port }) => {
                record.sent_udp_probe_to = Some(format!("{}:{}", host, port));
            }
            Err(e) => {
                record.error = Some(e.to_string());
                record.error_kind = Some(e.kind());
            }
        }

        record
    }
}

/// Render a result as a compact JSON object, without the trailing newline.
pub fn format_json(result: &ProbeResult) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord::from(result))
}
