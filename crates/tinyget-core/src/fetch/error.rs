//! Fetch error type.

use std::io;
use thiserror::Error;

use crate::url_model::Scheme;

/// Failure of a single fetch. Each variant marks the step that failed and
/// keeps the underlying I/O error as its source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The scheme has no plain-TCP transport (e.g. `https` without TLS).
    #[error("cannot fetch `{0}` URLs: no plaintext transport for this scheme")]
    UnsupportedScheme(Scheme),
    /// Connecting (including name resolution) failed.
    #[error("cannot connect to {host}:{port}")]
    Transport {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
    /// Writing the request failed.
    #[error("failed to send request")]
    Send(#[source] io::Error),
    /// Reading the response failed.
    #[error("failed to receive response")]
    Receive(#[source] io::Error),
}
