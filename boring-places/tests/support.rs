//! One-shot HTTP server serving a canned Nearby Search body.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// A server that answers exactly one request.
pub struct CannedServer {
    /// Base URL to configure the provider with.
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl CannedServer {
    /// Start serving `body` with HTTP status `status`.
    pub fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let port = listener.local_addr().expect("listener address").port();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request_line = String::new();
            reader
                .read_line(&mut request_line)
                .expect("read request line");
            loop {
                let mut header = String::new();
                let read = reader.read_line(&mut header).expect("read header");
                if read == 0 || header == "\r\n" {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            request_line
        });
        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
        }
    }

    /// Wait for the request and return its request line.
    pub fn request_line(self) -> String {
        self.handle.join().expect("server thread panicked")
    }
}
