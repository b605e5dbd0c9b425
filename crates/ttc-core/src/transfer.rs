//! Send and receive loops over the `std::io` traits.
//!
//! Both loops take the transport as a trait bound rather than a concrete
//! socket, so tests can stand in transports with partial writes,
//! fragmented reads, and injected failures.

use std::borrow::Cow;
use std::io::{self, Read, Write};

use tracing::trace;

use crate::error::ClientError;

/// Why the receive loop stopped accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveOutcome {
    /// The peer closed the connection; the response is complete.
    PeerClosed,
    /// The usable buffer capacity filled before a close was observed;
    /// anything further the peer sent was left unread.
    CapacityReached,
}

/// A received response: the accumulated bytes and why reading stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Accumulated payload, at most the usable capacity.
    pub body: Vec<u8>,
    /// Stop condition of the receive loop.
    pub outcome: ReceiveOutcome,
}

impl Response {
    /// The response rendered as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Writes the full request payload to the connection.
///
/// Repeatedly hands the remaining bytes (`total - sent`) to the transport
/// until the whole payload has been written, in order, exactly once.
/// Interrupted writes are retried; that is the only retry the transport
/// gets.
///
/// # Errors
///
/// Returns [`ClientError::Send`] if a write fails or the transport stops
/// accepting bytes before the payload is complete. A send failure is
/// fatal for the session; there is no redelivery.
pub fn send_request<W: Write>(conn: &mut W, payload: &[u8]) -> Result<(), ClientError> {
    let mut sent = 0;
    while sent < payload.len() {
        match conn.write(&payload[sent..]) {
            Ok(0) => {
                return Err(ClientError::Send(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "connection stopped accepting bytes mid-request",
                )));
            },
            Ok(n) => {
                sent += n;
                trace!(sent, total = payload.len(), "request bytes written");
            },
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {},
            Err(err) => return Err(ClientError::Send(err)),
        }
    }
    Ok(())
}

/// Reads the response into a bounded buffer of `capacity` bytes.
///
/// Of those, `capacity - 1` are usable payload; the last slot is reserved
/// as the terminator position of the wire contract. Reading stops when
/// the usable capacity fills ([`ReceiveOutcome::CapacityReached`]), when
/// the peer closes the connection ([`ReceiveOutcome::PeerClosed`]), or on
/// a transport error.
///
/// A peer that sends more than the usable capacity without closing gets
/// silently truncated: the excess is never read and no error is raised.
/// That is inherited protocol behavior, surfaced to callers only through
/// the outcome. A reply that exactly fills the capacity also reports
/// `CapacityReached`, since the close (if any) is never observed.
///
/// # Errors
///
/// Returns [`ClientError::Receive`] if a read fails, regardless of how
/// much data had already accumulated; no partial response survives an
/// error.
pub fn receive_response<R: Read>(conn: &mut R, capacity: usize) -> Result<Response, ClientError> {
    let usable = capacity.saturating_sub(1);
    let mut body = vec![0u8; usable];
    let mut filled = 0;

    let outcome = loop {
        if filled == usable {
            break ReceiveOutcome::CapacityReached;
        }
        match conn.read(&mut body[filled..]) {
            Ok(0) => break ReceiveOutcome::PeerClosed,
            Ok(n) => {
                filled += n;
                trace!(filled, usable, "response bytes read");
            },
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {},
            Err(err) => return Err(ClientError::Receive(err)),
        }
    };

    body.truncate(filled);
    Ok(Response { body, outcome })
}
