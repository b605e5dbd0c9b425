//! Address resolution and connection establishment.
//!
//! Resolution may yield several candidate addresses across address
//! families; candidates are tried in resolution order and the first
//! stream that connects wins.

use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use tracing::debug;

use crate::error::ClientError;

/// Opens a TCP connection to `host:port`.
///
/// # Errors
///
/// Returns [`ClientError::Resolution`] if the host/port pair cannot be
/// resolved, and [`ClientError::Connection`] if resolution produced no
/// usable address or no candidate accepted the connection (carrying the
/// last underlying error). A candidate that fails leaves no open handle
/// behind before the next one is tried.
pub fn connect(host: &str, port: &str) -> Result<TcpStream, ClientError> {
    let candidates = resolve(host, port)?;
    connect_any(&candidates).map_err(|source| ClientError::Connection {
        host: host.to_string(),
        port: port.to_string(),
        source,
    })
}

/// Resolves `host:port` to its candidate socket addresses.
fn resolve(host: &str, port: &str) -> Result<Vec<SocketAddr>, ClientError> {
    let authority = format!("{host}:{port}");
    let candidates: Vec<SocketAddr> = authority
        .to_socket_addrs()
        .map_err(|source| ClientError::Resolution {
            host: host.to_string(),
            port: port.to_string(),
            source,
        })?
        .collect();
    debug!(authority = %authority, candidates = candidates.len(), "resolved");
    Ok(candidates)
}

/// Attempts each candidate in order, returning the first connected
/// stream. On total failure the last error is returned.
fn connect_any(candidates: &[SocketAddr]) -> Result<TcpStream, io::Error> {
    let mut last_err: Option<io::Error> = None;
    for addr in candidates {
        match TcpStream::connect(addr) {
            Ok(stream) => {
                debug!(%addr, "connected");
                return Ok(stream);
            },
            Err(err) => {
                debug!(%addr, error = %err, "candidate failed");
                last_err = Some(err);
            },
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "resolution produced no addresses",
        )
    }))
}
