//! ttc-core - client library for the text-transform TCP service.
//!
//! The service accepts one framed request per connection, shaped
//! `"<action> <length> <message>"`, applies the requested transform to the
//! message, and replies with raw bytes terminated by closing the
//! connection. This crate implements the client side of that exchange.
//!
//! Everything here is synchronous, blocking, and single-threaded: one
//! connection, one send loop, one receive loop, strictly in sequence. The
//! CLI binary (`ttc`) layers argument parsing and logging setup on top.
//!
//! # Modules
//!
//! - [`config`]: Configuration record, action vocabulary, and defaults
//! - [`connect`]: Address resolution and connection establishment
//! - [`error`]: Per-phase error types for the single-shot session
//! - [`request`]: Wire framing of the request
//! - [`session`]: The connect → send → receive → close driver
//! - [`transfer`]: Send and receive loops over the `std::io` traits

pub mod config;
pub mod connect;
pub mod error;
pub mod request;
pub mod session;
pub mod transfer;

pub use config::{Action, ClientConfig, DEFAULT_HOST, DEFAULT_PORT, RECV_BUFFER_SIZE};
pub use error::ClientError;
pub use transfer::{ReceiveOutcome, Response};
