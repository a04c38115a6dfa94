//! Plain HTTP/1.0 GET over a transport connection.
//!
//! One call opens one connection, writes the request, reads until the peer
//! closes and returns every byte received (status line, headers and body,
//! unparsed). There are no retries, timeouts or redirects; the first failure
//! is returned and whatever was read so far is dropped.

mod error;
mod request;
mod transport;

pub use error::FetchError;
pub use transport::{TcpConnector, TransportConnector};

use std::io::{self, Read, Write};

use crate::url_model::Url;

/// Default size of the per-read receive buffer.
pub const DEFAULT_READ_BUFFER_BYTES: usize = 1024;

/// Knobs for a fetch. `Default` gives the well-known port and a 1 KiB buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Size of the buffer handed to each `read`. Values below 1 are treated as 1.
    pub read_buffer_bytes: usize,
    /// Connect to this port instead of the scheme's default (local test servers).
    pub port_override: Option<u16>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
            port_override: None,
        }
    }
}

/// Fetches `url` with default options. See [`fetch_with_options`].
pub fn fetch<C: TransportConnector>(url: &Url, connector: &C) -> Result<Vec<u8>, FetchError> {
    fetch_with_options(url, connector, &FetchOptions::default())
}

/// Performs a GET for `url` over a connection obtained from `connector`.
///
/// Only `http` URLs are fetched; every other scheme is rejected with
/// [`FetchError::UnsupportedScheme`] before any connection is attempted.
/// The connection is owned by this call and closed (dropped) on every return
/// path.
pub fn fetch_with_options<C: TransportConnector>(
    url: &Url,
    connector: &C,
    options: &FetchOptions,
) -> Result<Vec<u8>, FetchError> {
    let scheme = url.scheme();
    if !scheme.is_plaintext_network() {
        return Err(FetchError::UnsupportedScheme(scheme));
    }
    let port = options
        .port_override
        .or_else(|| scheme.default_port())
        .ok_or(FetchError::UnsupportedScheme(scheme))?;
    let host = url.host();

    tracing::debug!(host, port, "connecting");
    let mut conn = connector.connect(host, port).map_err(|source| {
        tracing::warn!(host, port, error = %source, "connect failed");
        FetchError::Transport {
            host: host.to_string(),
            port,
            source,
        }
    })?;

    let request = request::build_get(url);
    send(&mut conn, &request)?;
    tracing::debug!(bytes = request.len(), path = url.path(), "request sent");

    let response = receive(&mut conn, options.read_buffer_bytes)?;
    drop(conn);

    tracing::info!(host, path = url.path(), bytes = response.len(), "fetch complete");
    Ok(response)
}

/// Writes the whole request. `write_all` loops over short writes, so a
/// connection that accepts only part of the buffer per call still gets every byte.
fn send<W: Write>(conn: &mut W, request: &[u8]) -> Result<(), FetchError> {
    conn.write_all(request)
        .and_then(|()| conn.flush())
        .map_err(|e| {
            tracing::warn!(error = %e, "send failed");
            FetchError::Send(e)
        })
}

/// Reads until end-of-stream, appending exactly the byte count each read reports.
fn receive<R: Read>(conn: &mut R, buffer_bytes: usize) -> Result<Vec<u8>, FetchError> {
    let mut response = Vec::new();
    let mut buf = vec![0u8; buffer_bytes.max(1)];
    loop {
        let n = match conn.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(received = response.len(), error = %e, "receive failed");
                return Err(FetchError::Receive(e));
            }
        };
        let chunk = buf.get(..n).ok_or_else(|| {
            FetchError::Receive(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("read reported {} bytes into a {}-byte buffer", n, buf.len()),
            ))
        })?;
        tracing::trace!(n, "received chunk");
        response.extend_from_slice(chunk);
    }
    Ok(response)
}
