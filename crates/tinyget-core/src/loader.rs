//! Scheme dispatch: turns a parsed URL into bytes.
//!
//! `http` goes over the network through the fetcher, `file` reads from the
//! local filesystem and `data` returns its inline payload. Everything else
//! has no loader.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::{self, FetchError, FetchOptions, TransportConnector};
use crate::url_model::{Scheme, Url};

/// Hosts a `file` URL may name; anything else would be a remote file.
const LOCAL_FILE_HOSTS: [&str; 2] = ["", "localhost"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cannot read {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file URL names remote host `{0}`; only local files can be read")]
    RemoteFileHost(String),
    #[error("malformed data URL: missing `,` before the payload")]
    MissingDataSeparator,
}

/// True when [`load`] knows how to produce bytes for `scheme`.
pub fn has_loader(scheme: Scheme) -> bool {
    matches!(scheme, Scheme::File | Scheme::Data) || scheme.is_plaintext_network()
}

/// Loads the resource `url` names.
pub fn load<C: TransportConnector>(
    url: &Url,
    connector: &C,
    options: &FetchOptions,
) -> Result<Vec<u8>, LoadError> {
    match url.scheme() {
        Scheme::File => load_file(url),
        Scheme::Data => data_payload(url).map(|payload| payload.into_bytes()),
        _ => Ok(fetch::fetch_with_options(url, connector, options)?),
    }
}

fn load_file(url: &Url) -> Result<Vec<u8>, LoadError> {
    if !LOCAL_FILE_HOSTS.contains(&url.host()) {
        return Err(LoadError::RemoteFileHost(url.host().to_string()));
    }
    let path = PathBuf::from(url.path());
    tracing::debug!(path = %path.display(), "reading local file");
    fs::read(&path).map_err(|source| LoadError::File { path, source })
}

/// Payload of a `data:<media type>,<payload>` URL: everything after the first `,`.
///
/// The parser splits the remainder at its first `/` and always re-adds a
/// leading `/` to the path, so the remainder is rebuilt as `host + path`
/// unless the path is the bare root. That makes `data:a,b` and `data:a,b/`
/// indistinguishable; both yield `b`.
fn data_payload(url: &Url) -> Result<String, LoadError> {
    let remainder = match url.path() {
        "/" => url.host().to_string(),
        path => format!("{}{}", url.host(), path),
    };
    let (media_type, payload) = remainder
        .split_once(',')
        .ok_or(LoadError::MissingDataSeparator)?;
    tracing::debug!(media_type, bytes = payload.len(), "inline data URL");
    Ok(payload.to_string())
}
