//! Session driver: one connect → send → receive → close sequence.

use tracing::debug;

use crate::config::{ClientConfig, RECV_BUFFER_SIZE};
use crate::connect;
use crate::error::ClientError;
use crate::request;
use crate::transfer::{self, Response};

/// Runs one full client session.
///
/// The steps are strictly sequential: frame the request, connect, send it
/// to completion, accumulate the reply, close. The first failing step
/// aborts the rest; the connection, once opened, closes when it leaves
/// scope on every path, success and failure alike.
///
/// All I/O is blocking with no timeout. The protocol has no response
/// terminator other than the peer closing the connection (or the receive
/// buffer filling), so connect, send, and receive each block for as long
/// as the transport does.
///
/// # Errors
///
/// Propagates the failing phase as a [`ClientError`]. No partial response
/// is returned on failure.
pub fn run(config: &ClientConfig) -> Result<Response, ClientError> {
    let payload = request::encode(config.action, &config.message);
    debug!(action = %config.action, message_len = config.message.len(), "request framed");

    let mut stream = connect::connect(&config.host, &config.port)?;
    transfer::send_request(&mut stream, payload.as_bytes())?;
    let response = transfer::receive_response(&mut stream, RECV_BUFFER_SIZE)?;
    debug!(
        bytes = response.body.len(),
        outcome = ?response.outcome,
        "response received"
    );
    Ok(response)
}
