//! Shared utilities for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use ping_pong::config::{NodeEnv, PeerConfig};
use ping_pong::relay::{HttpTransport, NodeIdentity, PeerDirectory, PeerTransport, RelayError, RelayNode};

/// A request as seen by a mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Start a programmable mock backend on an ephemeral port.
///
/// Every request is recorded, then answered with whatever `f` returns.
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, Arc<Mutex<Vec<RecordedRequest>>>)
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let log = recorded.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        log.lock().unwrap().push(request.clone());

                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, recorded)
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();
    Some(RecordedRequest { method, path, headers, body })
}

/// One outbound call made by a relay node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCall {
    pub url: String,
    pub message: String,
    pub request_id: String,
}

/// Records every call; fails the ones whose URL contains a `fail_on` pattern.
#[derive(Default)]
pub struct RecordingTransport {
    pub calls: Mutex<Vec<OutboundCall>>,
    pub fail_on: Vec<String>,
}

impl RecordingTransport {
    pub fn failing_on(patterns: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<OutboundCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PeerTransport for RecordingTransport {
    async fn post(&self, url: &str, message: &str, request_id: &str) -> Result<(), RelayError> {
        self.calls.lock().unwrap().push(OutboundCall {
            url: url.to_string(),
            message: message.to_string(),
            request_id: request_id.to_string(),
        });

        if self.fail_on.iter().any(|pattern| url.contains(pattern.as_str())) {
            return Err(RelayError::Status {
                url: url.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

/// Sends `http://<prefix>-<n>.…/path` to a real local server for ordinal `n`.
///
/// Ordinals without a registered address are unreachable, which is how a
/// test chain ends.
pub struct LoopbackTransport {
    pub inner: HttpTransport,
    pub nodes: Mutex<HashMap<u32, SocketAddr>>,
    pub calls: Mutex<Vec<OutboundCall>>,
}

impl LoopbackTransport {
    pub fn new() -> Self {
        Self {
            inner: HttpTransport::new(Duration::from_secs(5)).unwrap(),
            nodes: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn register(&self, ordinal: u32, addr: SocketAddr) {
        self.nodes.lock().unwrap().insert(ordinal, addr);
    }

    pub fn calls(&self) -> Vec<OutboundCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PeerTransport for LoopbackTransport {
    async fn post(&self, url: &str, message: &str, request_id: &str) -> Result<(), RelayError> {
        self.calls.lock().unwrap().push(OutboundCall {
            url: url.to_string(),
            message: message.to_string(),
            request_id: request_id.to_string(),
        });

        // http://app-<n>.svc.ns.svc.cluster.local:8080/<path>
        let rest = url.strip_prefix("http://").unwrap();
        let (host, path) = rest.split_at(rest.find('/').unwrap());
        let pod = host.split('.').next().unwrap();
        let ordinal: u32 = pod.rsplit_once('-').unwrap().1.parse().unwrap();

        let target = self.nodes.lock().unwrap().get(&ordinal).copied();
        match target {
            Some(addr) => {
                self.inner
                    .post(&format!("http://{}{}", addr, path), message, request_id)
                    .await
            }
            None => Err(RelayError::Unreachable {
                url: url.to_string(),
                reason: "no such pod".to_string(),
            }),
        }
    }
}

/// Build a relay node in namespace `ns`, service `svc`, with no hop delay
/// and a 1024-byte body cap.
pub fn relay_node(pod_name: &str, transport: Arc<dyn PeerTransport>) -> Arc<RelayNode> {
    relay_node_with(pod_name, transport, Duration::ZERO, 1024)
}

pub fn relay_node_with(
    pod_name: &str,
    transport: Arc<dyn PeerTransport>,
    hop_delay: Duration,
    max_message_bytes: usize,
) -> Arc<RelayNode> {
    let env = NodeEnv {
        pod_name: pod_name.to_string(),
        namespace: "ns".to_string(),
        service_name: "svc".to_string(),
    };
    let identity = NodeIdentity::parse(pod_name).unwrap();
    let peers = PeerDirectory::new(&identity, &env, &PeerConfig::default());
    Arc::new(RelayNode::new(identity, peers, transport, hop_delay, max_message_bytes))
}
