#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Loads a bundled fixture by its logical path, e.g. `/compute/servers.json`.
/// Panics (test-fatal) when the fixture does not exist.
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name.trim_start_matches('/'));
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("missing fixture {}: {err}", path.display()))
}

/// The most recently dispatched request, as seen on the wire.
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn body_utf8(&self) -> String {
        String::from_utf8(self.body.clone()).expect("request body is not utf-8")
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not json")
    }
}

/// Programmable HTTP responder: responses are served strictly FIFO, one per
/// connection, and every inbound request is captured for `take_request`.
pub struct MockApi {
    base_url: String,
    responses: mpsc::Sender<String>,
    requests: mpsc::Receiver<CapturedRequest>,
}

impl MockApi {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (resp_tx, resp_rx) = mpsc::channel::<String>();
        let (req_tx, req_rx) = mpsc::channel();
        thread::spawn(move || {
            while let Ok((mut stream, _)) = listener.accept() {
                let req = read_request(&mut stream);
                if req_tx.send(req).is_err() {
                    return;
                }
                // An empty queue here is a test-setup error: answer with a
                // marker 500 so the facade call, and the test, fail fast.
                let response = resp_rx
                    .recv_timeout(Duration::from_millis(100))
                    .unwrap_or_else(|_| {
                        raw_response("500 Internal Server Error", &[], "no response enqueued")
                    });
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Self {
            base_url: format!("http://{}", addr),
            responses: resp_tx,
            requests: req_rx,
        }
    }

    /// Base URL with `suffix` appended, e.g. `url("/v2.1")`.
    pub fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    /// Enqueues a 200 response whose body is the named fixture.
    pub fn respond_with_fixture(&self, name: &str) {
        self.enqueue(json_response(200, &fixture(name)));
    }

    /// Enqueues a response with the given status and JSON body.
    pub fn respond_with(&self, status: u16, body: &str) {
        self.enqueue(json_response(status, body));
    }

    /// Enqueues a body-less response with the given status.
    pub fn respond_with_status(&self, status: u16) {
        self.enqueue(empty_response(status));
    }

    /// Receives the request captured for the most recent dispatch.
    pub fn take_request(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(RECV_TIMEOUT)
            .expect("no request captured")
    }

    fn enqueue(&self, response: String) {
        self.responses.send(response).expect("mock server stopped");
    }
}

pub fn json_response(status: u16, body: &str) -> String {
    raw_response(
        &status_line(status),
        &[("Content-Type", "application/json")],
        body,
    )
}

pub fn empty_response(status: u16) -> String {
    raw_response(&status_line(status), &[], "")
}

fn raw_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {status}\r\n");
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    // One request per connection; reqwest must not pool this socket.
    response.push_str("Connection: close\r\n");
    response.push_str(&format!("Content-Length: {}\r\n\r\n{}", body.len(), body));
    response
}

fn status_line(status: u16) -> String {
    let reason = match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    format!("{status} {reason}")
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = stream.read(&mut chunk).unwrap_or(0);
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let header_end = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| pos + 4)
        .unwrap_or(buf.len());
    let header_str = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = header_str.split("\r\n");
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let full_path = parts.next().unwrap_or("");

    let mut path_parts = full_path.splitn(2, '?');
    let path = path_parts.next().unwrap_or("").to_string();
    let query_str = path_parts.next().unwrap_or("");
    let mut query = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query_str.as_bytes()) {
        query.insert(key.to_string(), value.to_string());
    }

    let mut headers = Vec::new();
    let mut content_length: usize = 0;
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("Content-Length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name.to_string(), value.to_string()));
        }
    }
    assert!(
        content_length <= MAX_BODY_BYTES,
        "request body too large: {content_length} > {MAX_BODY_BYTES} bytes"
    );

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut chunk).unwrap_or(0);
        if read == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..read]);
    }
    body.truncate(content_length);

    CapturedRequest {
        method,
        path,
        headers,
        query,
        body,
    }
}

