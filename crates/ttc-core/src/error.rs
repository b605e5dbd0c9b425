//! Error types for the single-shot client session.

use std::io;

use thiserror::Error;

/// Errors from one client session, one variant per protocol phase.
///
/// Every variant is fatal for the session: there is no retry or partial
/// recovery, and no distinction between transient and permanent transport
/// failures. The connection, if one was opened, is closed before the
/// error reaches the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The host/port pair could not be resolved to any socket address.
    #[error("failed to resolve {host}:{port}: {source}")]
    Resolution {
        /// Host as configured.
        host: String,
        /// Port as configured.
        port: String,
        /// Underlying resolver error.
        #[source]
        source: io::Error,
    },

    /// No resolved candidate address accepted the connection.
    #[error("failed to connect to {host}:{port}: {source}")]
    Connection {
        /// Host as configured.
        host: String,
        /// Port as configured.
        port: String,
        /// Last error observed while trying candidates.
        #[source]
        source: io::Error,
    },

    /// Writing the request to an established connection failed.
    #[error("send failed: {0}")]
    Send(#[source] io::Error),

    /// Reading the response from an established connection failed.
    #[error("receive failed: {0}")]
    Receive(#[source] io::Error),
}
