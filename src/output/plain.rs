//! Plain key=value output.
//!
//! One line per attempt:
//! `<label> connected_host=<host> port=<port> protocol=<PROTO> connected=<Yes|No> os=<os> <extra>`

use crate::prober::{Connection, ProbeResult};
use std::net::SocketAddr;

/// Render a result as a single line, without the trailing newline.
pub fn format_line(result: &ProbeResult) -> String {
    let extra = match &result.outcome {
        Ok(Connection::Tcp {
            local_addr,
            remote_addr,
        }) => format!(
            "local_addr={} remote_addr={}",
            addr_token(local_addr),
            addr_token(remote_addr)
        ),
        Ok(Connection::Udp { host, port }) => format!("sent_udp_probe_to={}:{}", host, port),
        Err(e) => format!("error=\"{}\"", escape_quoted(&e.to_string())),
    };

    format!(
        "{} connected_host={} port={} protocol={} connected={} os={} {}",
        result.label,
        result.target.host,
        result.target.port,
        result.protocol,
        yes_no(result.connected()),
        result.os,
        extra,
    )
}

fn yes_no(connected: bool) -> &'static str {
    if connected {
        "Yes"
    } else {
        "No"
    }
}

/// `ip:port` without brackets, for IPv6 as well.
pub(crate) fn addr_token(addr: &SocketAddr) -> String {
    format!("{}:{}", addr.ip(), addr.port())
}

/// Keep the quoted error value on one line and unambiguous.
fn escape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}
