//! Wire framing of the request.

use crate::config::Action;

/// Encodes a request as `"<action> <length> <message>"`.
///
/// The length field is the byte length of the original message, computed
/// before framing, so the server can validate and strip the framing
/// deterministically. Spaces inside the message are not escaped; the
/// server re-splits on the first two separators only, so an embedded
/// space is carried through intact. Pure function: no I/O, no state.
#[must_use]
pub fn encode(action: Action, message: &str) -> String {
    format!("{} {} {}", action, message.len(), message)
}
