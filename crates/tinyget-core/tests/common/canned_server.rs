//! Minimal TCP server for integration tests.
//!
//! Accepts connections, reads one request head (up to the blank line),
//! records it, answers with a fixed byte string written in small pieces and
//! then closes the connection.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct CannedServerOptions {
    /// Bytes per `write` call when sending the response.
    pub chunk_size: usize,
    /// Pause between chunks so the client sees several reads.
    pub chunk_delay: Duration,
}

impl Default for CannedServerOptions {
    fn default() -> Self {
        Self {
            chunk_size: 7,
            chunk_delay: Duration::from_millis(2),
        }
    }
}

/// Running server: its port and a channel yielding each request head it read.
pub struct CannedServer {
    pub port: u16,
    pub requests: mpsc::Receiver<Vec<u8>>,
}

/// Starts a server in a background thread answering every connection with `response`.
/// The server runs until the process exits.
pub fn start(response: Vec<u8>) -> CannedServer {
    start_with_options(response, CannedServerOptions::default())
}

pub fn start_with_options(response: Vec<u8>, opts: CannedServerOptions) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let tx = tx.clone();
            let response = response.clone();
            thread::spawn(move || handle(stream, &response, opts, &tx));
        }
    });
    CannedServer { port, requests: rx }
}

fn handle(mut stream: TcpStream, response: &[u8], opts: CannedServerOptions, tx: &mpsc::Sender<Vec<u8>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 512];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let _ = tx.send(request);
    for chunk in response.chunks(opts.chunk_size.max(1)) {
        if stream.write_all(chunk).is_err() {
            return;
        }
        let _ = stream.flush();
        thread::sleep(opts.chunk_delay);
    }
}
