//! Loopback HTTP stub for exercising the remote source.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use flightscribe::config::{ApiConfig, Config};

/// A one-shot HTTP server on 127.0.0.1.
pub struct StubServer {
    /// Base URL to point the client at.
    pub base_url: String,
    /// Receives the raw request head once the request has been read.
    pub request: oneshot::Receiver<String>,
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// Serve exactly one response with `status` and `body`.
pub async fn serve_once(status: u16, body: &str) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    let body = body.to_string();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

        // 204 responses carry no body framing headers
        let framing = if status == 204 {
            String::new()
        } else {
            format!("Content-Type: application/json\r\nContent-Length: {}\r\n", body.len())
        };
        let response = format!(
            "HTTP/1.1 {status} {}\r\n{framing}Connection: close\r\n\r\n{body}",
            reason(status)
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    StubServer {
        base_url: format!("http://{addr}"),
        request: rx,
    }
}

/// Configuration pointing the remote source at `base_url`.
pub fn config_for(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..ApiConfig::default()
        },
        ..Config::default()
    }
}
