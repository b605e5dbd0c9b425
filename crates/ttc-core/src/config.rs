//! Configuration record, action vocabulary, and protocol defaults.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default server host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port, kept as decimal text the way it travels from the
/// command line into address resolution.
pub const DEFAULT_PORT: &str = "8080";

/// Receive buffer capacity in bytes, including the terminator slot.
///
/// At most `RECV_BUFFER_SIZE - 1` bytes of response payload are stored;
/// see [`crate::transfer::receive_response`].
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Text transform requested of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Uppercase the message.
    Uppercase,
    /// Lowercase the message.
    Lowercase,
    /// Reverse the message.
    Reverse,
    /// Shuffle the message characters.
    Shuffle,
    /// Apply a transform of the server's choosing.
    Random,
}

impl Action {
    /// All supported actions, in the order the server documents them.
    pub const ALL: [Self; 5] = [
        Self::Uppercase,
        Self::Lowercase,
        Self::Reverse,
        Self::Shuffle,
        Self::Random,
    ];

    /// Wire name of the action, as it appears in the request framing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Reverse => "reverse",
            Self::Shuffle => "shuffle",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, Error)]
#[error("invalid action '{0}' (expected uppercase, lowercase, reverse, shuffle, or random)")]
pub struct UnknownAction(String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// One session's worth of validated configuration.
///
/// Built by the CLI layer before the core is invoked: `port` is
/// guaranteed to be all-digit text and `action` a member of the supported
/// set. Immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server hostname or address.
    pub host: String,
    /// Server port as decimal text.
    pub port: String,
    /// Transform to request.
    pub action: Action,
    /// Message to send, may be empty.
    pub message: String,
}
