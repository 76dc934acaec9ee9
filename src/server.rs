//! Metrics HTTP endpoint
//!
//! Small synchronous HTTP server: one handler thread per connection, three
//! routes (the metrics path, a landing page at `/`, 404 otherwise). Each
//! metrics request drives a full scrape cycle through `Registry::gather`.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use prometheus::{Encoder, Registry, TextEncoder};
use tracing::{debug, warn};

use crate::utils::Result;

/// Read/write deadline for client connections
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Serves the metrics text format and a landing page
pub struct MetricsServer {
    listener: TcpListener,
    registry: Registry,
    metrics_path: String,
}

impl MetricsServer {
    /// Bind the listen address; failure here is fatal for the process
    pub fn bind(addr: SocketAddr, metrics_path: String, registry: Registry) -> Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self {
            listener,
            registry,
            metrics_path,
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the process exits
    pub fn serve(&self) -> Result<()> {
        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(s) => s,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    continue;
                }
            };
            let registry = self.registry.clone();
            let metrics_path = self.metrics_path.clone();
            thread::spawn(move || handle_connection(stream, registry, &metrics_path));
        }
        Ok(())
    }
}

fn handle_connection(stream: TcpStream, registry: Registry, metrics_path: &str) {
    stream.set_read_timeout(Some(CLIENT_TIMEOUT)).ok();
    stream.set_write_timeout(Some(CLIENT_TIMEOUT)).ok();

    let peer = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let path = match read_request_path(&stream) {
        Some(path) => path,
        None => return,
    };
    debug!("Request for {} from {}", path, peer);

    let response = if path == metrics_path {
        metrics_response(&registry)
    } else if path == "/" {
        landing_response(metrics_path)
    } else {
        plain_response("404 Not Found", "text/plain; charset=utf-8", b"not found\n")
    };

    let mut writer = BufWriter::new(stream);
    if let Err(e) = writer.write_all(&response).and_then(|_| writer.flush()) {
        warn!("Failed to write response to {}: {}", peer, e);
    }
}

/// Read the request line and drain headers; returns the requested path with
/// any query string stripped
fn read_request_path(stream: &TcpStream) -> Option<String> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut header = String::new();
    loop {
        header.clear();
        match reader.read_line(&mut header) {
            Ok(0) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => continue,
            Err(_) => return None,
        }
    }

    let mut parts = request_line.split_whitespace();
    let _method = parts.next()?;
    let target = parts.next()?;
    // Scrapers may attach query parameters; routing goes by path alone
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    Some(path.to_string())
}

fn metrics_response(registry: &Registry) -> Vec<u8> {
    let families = registry.gather();
    let encoder = TextEncoder::new();
    let mut body = Vec::new();
    if let Err(e) = encoder.encode(&families, &mut body) {
        warn!("Failed to encode metrics: {}", e);
        return plain_response(
            "500 Internal Server Error",
            "text/plain; charset=utf-8",
            b"encoding error\n",
        );
    }
    plain_response("200 OK", encoder.format_type(), &body)
}

fn landing_response(metrics_path: &str) -> Vec<u8> {
    let body = format!(
        "<html>\n<head><title>Elasticsearch Exporter</title></head>\n<body>\n\
         <h1>Elasticsearch Exporter</h1>\n<p><a href='{}'>Metrics</a></p>\n\
         </body>\n</html>\n",
        metrics_path
    );
    plain_response("200 OK", "text/html; charset=utf-8", body.as_bytes())
}

fn plain_response(status: &str, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Gauge;
    use std::io::Read;

    fn serve_registry(registry: Registry) -> SocketAddr {
        let server = MetricsServer::bind(
            "127.0.0.1:0".parse().unwrap(),
            "/metrics".to_string(),
            registry,
        )
        .unwrap();
        let addr = server.local_addr().unwrap();
        thread::spawn(move || server.serve().ok());
        addr
    }

    fn request(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        write!(stream, "GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn test_metrics_route_serves_text_format() {
        let registry = Registry::new();
        let gauge = Gauge::new("test_gauge", "A test gauge").unwrap();
        gauge.set(3.0);
        registry.register(Box::new(gauge)).unwrap();

        let addr = serve_registry(registry);
        let response = request(addr, "/metrics");
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("test_gauge 3"));
    }

    #[test]
    fn test_metrics_route_ignores_query_string() {
        let registry = Registry::new();
        let gauge = Gauge::new("test_gauge", "A test gauge").unwrap();
        gauge.set(3.0);
        registry.register(Box::new(gauge)).unwrap();

        let addr = serve_registry(registry);
        let response = request(addr, "/metrics?debug=1");
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("test_gauge 3"));
    }

    #[test]
    fn test_landing_page_links_metrics_path() {
        let addr = serve_registry(Registry::new());
        let response = request(addr, "/");
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("href='/metrics'"));
    }

    #[test]
    fn test_unknown_path_is_404() {
        let addr = serve_registry(Registry::new());
        let response = request(addr, "/nope");
        assert!(response.starts_with("HTTP/1.1 404"));
    }
}
