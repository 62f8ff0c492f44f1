//! Common test utilities and helpers
#![allow(dead_code)]

use hyperliquid_top_traders::config::Env;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const ADDRESS_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const ADDRESS_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
pub const ADDRESS_C: &str = "0xcccccccccccccccccccccccccccccccccccccccc";

/// Request as seen by the mock server
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl Request {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

pub type RequestLog = Arc<Mutex<Vec<Request>>>;

/// Env pointing at a mock server, with short timeouts
pub fn test_env(base_url: &str, data_file: PathBuf) -> Env {
    Env {
        leaderboard_url: format!("{}/leaderboard", base_url),
        info_url: format!("{}/info", base_url),
        data_file,
        leaderboard_timeout_ms: 5_000,
        positions_timeout_ms: 5_000,
        ..Env::default()
    }
}

/// Start a local HTTP server answering every request with `handler`.
/// Returns the base URL and a log of received requests.
pub async fn spawn_server<F>(handler: F) -> (String, RequestLog)
where
    F: Fn(&Request) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Mock server has no address");
    let handler = Arc::new(handler);
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let server_log = log.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let handler = handler.clone();
            let log = server_log.clone();
            tokio::spawn(async move {
                let Some(request) = read_request(&mut socket).await else {
                    return;
                };
                let (status, body) = handler(&request);
                log.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}", addr), log)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

async fn read_request(socket: &mut TcpStream) -> Option<Request> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();
    let header = |name: &str| {
        headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    };
    let content_length = header("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(Request {
        method,
        path,
        content_type: header("content-type"),
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    })
}

/// Leaderboard row with string-encoded decimals, like the live API
pub fn trader_row(address: &str, display_name: Option<&str>, day_pnl: &str, week_pnl: &str) -> Value {
    json!({
        "ethAddress": address,
        "accountValue": "125000.5",
        "displayName": display_name,
        "windowPerformances": [
            ["day", {"pnl": day_pnl, "roi": "0.0125", "vlm": "250000.0"}],
            ["week", {"pnl": week_pnl, "roi": "0.0834", "vlm": "1800000.0"}],
            ["month", {"pnl": "9000.0", "roi": "0.2", "vlm": "5000000.0"}],
            ["allTime", {"pnl": "42000.0", "roi": "1.5", "vlm": "90000000.0"}]
        ],
        "prize": 0
    })
}

pub fn leaderboard_body(rows: Vec<Value>) -> String {
    json!({ "leaderboardRows": rows }).to_string()
}

/// `assetPositions` entry as returned by `clearinghouseState`
pub fn asset_position(coin: &str, szi: &str) -> Value {
    json!({
        "type": "oneWay",
        "position": {
            "coin": coin,
            "szi": szi,
            "leverage": {"type": "isolated", "value": 20, "rawUsd": "-1000.0"},
            "entryPx": "64000.5",
            "positionValue": "96000.75",
            "unrealizedPnl": "-15.2",
            "returnOnEquity": "-0.0031",
            "liquidationPx": "60123.4",
            "marginUsed": "4800.0",
            "maxLeverage": 40
        }
    })
}

pub fn clearinghouse_body(asset_positions: Vec<Value>) -> String {
    json!({
        "assetPositions": asset_positions,
        "marginSummary": {"accountValue": "100000.0"},
        "withdrawable": "5000.0"
    })
    .to_string()
}
