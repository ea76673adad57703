//! End-to-end probe runs against local listeners.

use connprobe::config::ProbeConfig;
use connprobe::output::{OutputFormat, Reporter};
use connprobe::prober::run_probes;
use connprobe::types::{Port, PortList, Protocol};
use std::time::{Duration, Instant};
use tokio::net::{TcpListener, UdpSocket};

fn port(n: u16) -> Port {
    Port::new(n).unwrap()
}

/// A loopback port with nothing listening on it.
async fn closed_tcp_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

async fn run(config: &ProbeConfig) -> Vec<String> {
    let mut reporter = Reporter::new(Vec::new(), OutputFormat::Plain);
    let written = run_probes(config, &mut reporter).await.unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<String> = out.lines().map(str::to_string).collect();
    assert_eq!(lines.len(), written);
    lines
}

/// Value of a `key=value` token in a line.
fn field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{}=", key);
    line.split(' ')
        .find_map(|token| token.strip_prefix(prefix.as_str()))
}

fn is_ip_port(token: &str) -> bool {
    match token.rsplit_once(':') {
        Some((ip, port)) => {
            ip.parse::<std::net::IpAddr>().is_ok() && port.parse::<u16>().is_ok()
        }
        None => false,
    }
}

#[tokio::test]
async fn tcp_reachable_target_reports_addresses() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open = listener.local_addr().unwrap().port();

    let config = ProbeConfig::default()
        .with_hosts(["127.0.0.1"])
        .with_port(port(open))
        .with_timeout(Duration::from_secs(2));

    let lines = run(&config).await;
    assert_eq!(lines.len(), 1);
    let line = &lines[0];

    assert!(line.starts_with("connect_test connected_host=127.0.0.1 "));
    assert_eq!(field(line, "port"), Some(open.to_string().as_str()));
    assert_eq!(field(line, "protocol"), Some("TCP"));
    assert_eq!(field(line, "connected"), Some("Yes"));

    let local = field(line, "local_addr").unwrap();
    let remote = field(line, "remote_addr").unwrap();
    assert!(is_ip_port(local), "bad local_addr in {line}");
    assert!(is_ip_port(remote), "bad remote_addr in {line}");
    assert_eq!(remote, format!("127.0.0.1:{}", open));
}

#[tokio::test]
async fn tcp_refused_target_reports_error() {
    let closed = closed_tcp_port().await;
    let config = ProbeConfig::default()
        .with_hosts(["127.0.0.1"])
        .with_port(port(closed))
        .with_timeout(Duration::from_secs(2));

    let lines = run(&config).await;
    let line = &lines[0];

    assert_eq!(field(line, "connected"), Some("No"));
    let error = line.split_once("error=\"").map(|(_, rest)| rest).unwrap();
    assert!(error.len() > 1, "empty error in {line}");
    assert!(line.ends_with('"'));
}

#[tokio::test]
async fn lines_follow_host_major_order() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open = listener.local_addr().unwrap().port();
    let closed = closed_tcp_port().await;

    let config = ProbeConfig::default()
        .with_hosts(["127.0.0.1", "localhost"])
        .with_ports(PortList::from(vec![port(open), port(closed)]))
        .with_timeout(Duration::from_secs(2));

    let lines = run(&config).await;
    assert_eq!(lines.len(), 4);

    let pairs: Vec<(String, String)> = lines
        .iter()
        .map(|l| {
            assert!(l.starts_with("tcp_connect "));
            (
                field(l, "connected_host").unwrap().to_string(),
                field(l, "port").unwrap().to_string(),
            )
        })
        .collect();

    let expected: Vec<(String, String)> = ["127.0.0.1", "localhost"]
        .iter()
        .flat_map(|h| [open, closed].map(|p| (h.to_string(), p.to_string())))
        .collect();
    assert_eq!(pairs, expected);
    assert_eq!(field(&lines[1], "connected"), Some("No"));
}

#[tokio::test]
async fn udp_send_counts_as_connected() {
    let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let udp_port = receiver.local_addr().unwrap().port();

    let config = ProbeConfig::default()
        .with_hosts(["127.0.0.1"])
        .with_ports(PortList::from(vec![port(udp_port)]))
        .with_protocol(Protocol::Udp)
        .with_timeout(Duration::from_secs(2));

    let lines = run(&config).await;
    let line = &lines[0];

    assert!(line.starts_with("tcp_connect "));
    assert_eq!(field(line, "protocol"), Some("UDP"));
    assert_eq!(field(line, "connected"), Some("Yes"));
    assert_eq!(
        field(line, "sent_udp_probe_to"),
        Some(format!("127.0.0.1:{}", udp_port).as_str())
    );
}

// Sending to the broadcast address without SO_BROADCAST fails locally on Linux.
#[cfg(target_os = "linux")]
#[tokio::test]
async fn udp_send_failure_is_reported_and_run_continues() {
    let config = ProbeConfig::default()
        .with_hosts(["255.255.255.255", "127.0.0.1"])
        .with_port(port(9))
        .with_protocol(Protocol::Udp)
        .with_timeout(Duration::from_secs(2));

    let lines = run(&config).await;
    assert_eq!(lines.len(), 2);

    let failed = &lines[0];
    assert_eq!(field(failed, "connected_host"), Some("255.255.255.255"));
    assert_eq!(field(failed, "connected"), Some("No"));
    assert!(field(failed, "sent_udp_probe_to").is_none());
    let error = failed.split_once("error=\"").map(|(_, rest)| rest).unwrap();
    assert!(error.len() > 1, "empty error in {failed}");
    assert!(failed.ends_with('"'));

    let next = &lines[1];
    assert_eq!(field(next, "connected_host"), Some("127.0.0.1"));
    assert_eq!(field(next, "connected"), Some("Yes"));
    assert_eq!(field(next, "sent_udp_probe_to"), Some("127.0.0.1:9"));
}

#[tokio::test]
async fn unsupported_protocol_never_touches_the_network() {
    let config = ProbeConfig::default()
        .with_hosts(["host1.example.com", "host2.example.com"])
        .with_protocol("icmp".parse().unwrap())
        .with_timeout(Duration::from_secs(3));

    let start = Instant::now();
    let lines = run(&config).await;
    assert!(start.elapsed() < Duration::from_secs(1));

    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(field(line, "protocol"), Some("ICMP"));
        assert_eq!(field(line, "connected"), Some("No"));
        assert!(line.ends_with("error=\"Unsupported protocol\""));
    }
}

#[tokio::test]
async fn json_lines_output() {
    let closed = closed_tcp_port().await;
    let config = ProbeConfig::default()
        .with_hosts(["127.0.0.1"])
        .with_port(port(closed))
        .with_timeout(Duration::from_secs(2));

    let mut reporter = Reporter::new(Vec::new(), OutputFormat::Json);
    run_probes(&config, &mut reporter).await.unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();

    let v: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(v["label"], "connect_test");
    assert_eq!(v["connected"], false);
    assert!(!v["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "needs a network where 10.255.255.1 is silently dropped"]
async fn non_routable_target_times_out() {
    let config = ProbeConfig::default()
        .with_hosts(["10.255.255.1"])
        .with_port(port(8089))
        .with_timeout(Duration::from_secs(1));

    let start = Instant::now();
    let lines = run(&config).await;
    let elapsed = start.elapsed();

    assert_eq!(field(&lines[0], "connected"), Some("No"));
    assert!(lines[0].ends_with("error=\"timed out\""));
    assert!(elapsed >= Duration::from_millis(900));
    assert!(elapsed < Duration::from_secs(3));
}
