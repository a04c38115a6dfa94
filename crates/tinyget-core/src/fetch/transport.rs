//! Transport capability used by the fetcher.
//!
//! The fetcher only needs "give me a connected byte stream to host:port".
//! Name resolution and socket setup live behind this trait so tests can
//! substitute scripted connections.

use std::io::{self, Read, Write};
use std::net::TcpStream;

/// Opens bidirectional byte streams to a remote peer.
///
/// A returned connection follows `std::io` conventions: `read` returning
/// `Ok(0)` is end-of-stream, and dropping the connection closes it.
pub trait TransportConnector {
    type Connection: Read + Write;

    fn connect(&self, host: &str, port: u16) -> io::Result<Self::Connection>;
}

/// Connector backed by system DNS resolution and a blocking TCP socket.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl TransportConnector for TcpConnector {
    type Connection = TcpStream;

    fn connect(&self, host: &str, port: u16) -> io::Result<TcpStream> {
        TcpStream::connect((host, port))
    }
}
