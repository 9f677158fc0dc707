use std::io::Cursor;

use log::{info, warn};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::handlers;
use crate::state::SharedState;

pub type HttpResponse = Response<Cursor<Vec<u8>>>;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn header(name: &str, value: &str) -> Header {
    // Only called with ASCII names and values, which tiny_http always accepts.
    Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap()
}

fn bytes_response(status: u16, content_type: &str, body: Vec<u8>, extra: Vec<Header>) -> HttpResponse {
    let len = body.len();
    let mut headers = vec![header("Content-Type", content_type)];
    headers.extend(extra);
    Response::new(StatusCode(status), headers, Cursor::new(body), Some(len), None)
}

pub fn json_response(status: u16, body: String) -> HttpResponse {
    bytes_response(status, "application/json", body.into_bytes(), Vec::new())
}

/// Raw pixel reply; the dimensions travel in headers since the body is bare bytes.
pub fn pixels_response(pixels: Vec<u8>, width: u32, height: u32) -> HttpResponse {
    bytes_response(
        200,
        "application/octet-stream",
        pixels,
        vec![
            header("X-Image-Width", &width.to_string()),
            header("X-Image-Height", &height.to_string()),
        ],
    )
}

pub fn error_response(status: u16, kind: &str, message: &str) -> HttpResponse {
    let body = serde_json::json!({ "error": kind, "message": message });
    json_response(status, body.to_string())
}

pub fn not_found(path: &str) -> HttpResponse {
    error_response(404, "not_found", &format!("no route for {}", path))
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Message,
    Grayscale,
    Status,
    NotFound,
}

/// Picks the handler for a method and path (query string already removed).
pub fn route(method: &Method, path: &str) -> Route {
    match (method, path) {
        (Method::Post, "/message")   => Route::Message,
        (Method::Post, "/grayscale") => Route::Grayscale,
        (Method::Get,  "/status")    => Route::Status,
        _ => Route::NotFound,
    }
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Routes one request, responds, and logs the outcome.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url = request.url().to_owned();

    let (path, query) = match url.split_once('?') {
        Some((p, q)) => (p.to_owned(), q.to_owned()),
        None => (url.clone(), String::new()),
    };

    let response = match route(&method, &path) {
        Route::Message   => handlers::message::handle(&mut request, &state),
        Route::Grayscale => handlers::raw::handle(&mut request, &query, &state),
        Route::Status    => handlers::status::handle(&state),
        Route::NotFound  => not_found(&path),
    };

    info!("{} {} -> {}", method, path, response.status_code().0);
    if let Err(e) = request.respond(response) {
        warn!("could not send response for {} {}: {}", method, path, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::sync::Arc;

    use tiny_http::Server;

    use crate::config::ServiceConfig;
    use crate::state::ServiceState;

    struct Reply {
        status: u16,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    }

    impl Reply {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }

        fn json(&self) -> serde_json::Value {
            serde_json::from_slice(&self.body).unwrap()
        }
    }

    /// Serves exactly `count` requests on an ephemeral port.
    fn spawn_server(count: usize, max_body_bytes: usize) -> (SocketAddr, SharedState) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let state: SharedState = Arc::new(ServiceState::new(ServiceConfig {
            max_body_bytes,
            ..ServiceConfig::default()
        }));
        let server_state = state.clone();
        std::thread::spawn(move || {
            for request in server.incoming_requests().take(count) {
                dispatch(request, server_state.clone());
            }
        });
        (addr, state)
    }

    fn send(addr: SocketAddr, method: &str, target: &str, content_type: &str, body: &[u8]) -> Reply {
        let mut stream = TcpStream::connect(addr).unwrap();
        let head = format!(
            "{} {} HTTP/1.1\r\nHost: {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            method, target, addr, content_type, body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).unwrap();
        parse_reply(&raw)
    }

    fn parse_reply(raw: &[u8]) -> Reply {
        let split = raw.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
        let head = String::from_utf8_lossy(&raw[..split]).into_owned();
        let mut lines = head.split("\r\n");
        let status = lines.next().unwrap().split(' ').nth(1).unwrap().parse().unwrap();
        let headers = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_owned(), v.trim().to_owned()))
            .collect();
        Reply { status, headers, body: raw[split + 4..].to_vec() }
    }

    #[test]
    fn route_table() {
        assert_eq!(route(&Method::Post, "/message"), Route::Message);
        assert_eq!(route(&Method::Post, "/grayscale"), Route::Grayscale);
        assert_eq!(route(&Method::Get, "/status"), Route::Status);
        assert_eq!(route(&Method::Get, "/message"), Route::NotFound);
        assert_eq!(route(&Method::Post, "/status"), Route::NotFound);
        assert_eq!(route(&Method::Get, "/"), Route::NotFound);
    }

    #[test]
    fn raw_endpoint_returns_pixels_with_dimension_headers() {
        let (addr, _) = spawn_server(1, 1024);
        let reply = send(
            addr,
            "POST",
            "/grayscale?width=2&height=1",
            "application/octet-stream",
            &[30, 60, 90, 255, 255, 255, 255, 0],
        );
        assert_eq!(reply.status, 200);
        assert_eq!(reply.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(reply.header("X-Image-Width"), Some("2"));
        assert_eq!(reply.header("X-Image-Height"), Some("1"));
        assert_eq!(reply.body, vec![60, 60, 60, 255, 255, 255, 255, 0]);
    }

    #[test]
    fn message_endpoint_speaks_json() {
        let (addr, state) = spawn_server(2, 1024);
        let body = br#"{"Command":"Load","Pixels":[30,60,90,255],"Height":1,"Width":1}"#;
        let reply = send(addr, "POST", "/message", "application/json", body);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.header("Content-Type"), Some("application/json"));
        assert_eq!(
            reply.json(),
            serde_json::json!({"Pixels": [60, 60, 60, 255], "Height": 1, "Width": 1})
        );

        let bad = br#"{"Command":"Blur","Pixels":[0,0,0,0],"Height":1,"Width":1}"#;
        let reply = send(addr, "POST", "/message", "application/json", bad);
        assert_eq!(reply.status, 400);
        assert_eq!(reply.json()["error"], "unknown_command");
        assert_eq!(state.stats.snapshot().rejected, 1);
    }

    #[test]
    fn unknown_paths_and_wrong_methods_are_404() {
        let (addr, _) = spawn_server(2, 1024);
        let reply = send(addr, "GET", "/nowhere", "text/plain", b"");
        assert_eq!(reply.status, 404);
        assert_eq!(reply.json()["error"], "not_found");

        let reply = send(addr, "GET", "/grayscale?width=1&height=1", "text/plain", b"");
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn oversized_body_is_413() {
        let (addr, _) = spawn_server(1, 16);
        let reply = send(addr, "POST", "/grayscale?width=8&height=1", "application/octet-stream", &[0; 32]);
        assert_eq!(reply.status, 413);
        assert_eq!(reply.header("Content-Type"), Some("application/json"));
        assert_eq!(reply.json()["error"], "payload_too_large");
    }

    #[test]
    fn status_reports_counters() {
        let (addr, _) = spawn_server(2, 1024);
        send(addr, "POST", "/grayscale?width=1&height=1", "application/octet-stream", &[1, 2, 3, 4]);
        let reply = send(addr, "GET", "/status", "text/plain", b"");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.json()["stats"]["converted"], 1);
        assert_eq!(reply.json()["max_body_bytes"], 1024);
    }
}
