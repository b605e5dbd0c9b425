//! End-to-end sessions against a local single-shot fixture server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use ttc_core::config::{Action, ClientConfig};
use ttc_core::error::ClientError;
use ttc_core::session;
use ttc_core::transfer::ReceiveOutcome;

/// Spawns a server on an ephemeral loopback port that accepts one
/// connection, reads one request, replies with `reply(request)`, and
/// closes. Returns the port and a handle yielding the observed request.
fn spawn_fixture<F>(reply: F) -> (u16, thread::JoinHandle<Vec<u8>>)
where
    F: FnOnce(&[u8]) -> Vec<u8> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
    let port = listener.local_addr().expect("fixture addr").port();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = vec![0u8; 4096];
        let n = stream.read(&mut request).expect("read request");
        request.truncate(n);
        let body = reply(&request);
        stream.write_all(&body).expect("write reply");
        request
    });

    (port, handle)
}

fn config(port: u16, action: Action, message: &str) -> ClientConfig {
    ClientConfig {
        host: "127.0.0.1".to_string(),
        port: port.to_string(),
        action,
        message: message.to_string(),
    }
}

#[test]
fn uppercase_round_trip() {
    let (port, server) = spawn_fixture(|request| {
        // The server splits the framing on the first two spaces and
        // transforms the remainder.
        let text = std::str::from_utf8(request).expect("request is text");
        let message = text.splitn(3, ' ').nth(2).expect("message field");
        message.to_uppercase().into_bytes()
    });

    let response = session::run(&config(port, Action::Uppercase, "hi")).expect("session succeeds");

    assert_eq!(response.as_text(), "HI");
    assert_eq!(response.outcome, ReceiveOutcome::PeerClosed);

    let observed = server.join().expect("fixture thread");
    assert_eq!(observed, b"uppercase 2 hi");
}

#[test]
fn empty_reply_yields_empty_response() {
    let (port, server) = spawn_fixture(|_| Vec::new());

    let response = session::run(&config(port, Action::Reverse, "abc")).expect("session succeeds");

    assert!(response.body.is_empty());
    assert_eq!(response.outcome, ReceiveOutcome::PeerClosed);

    let observed = server.join().expect("fixture thread");
    assert_eq!(observed, b"reverse 3 abc");
}

#[test]
fn fragmented_reply_accumulates() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
    let port = listener.local_addr().expect("fixture addr").port();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = [0u8; 256];
        let _ = stream.read(&mut request).expect("read request");
        for fragment in [b"HE".as_slice(), b"L", b"LO"] {
            stream.write_all(fragment).expect("write fragment");
            stream.flush().expect("flush");
            thread::sleep(Duration::from_millis(10));
        }
    });

    let response = session::run(&config(port, Action::Uppercase, "hello")).expect("session succeeds");

    assert_eq!(response.as_text(), "HELLO");
    assert_eq!(response.outcome, ReceiveOutcome::PeerClosed);
    server.join().expect("fixture thread");
}

#[test]
fn over_capacity_reply_is_truncated_at_usable_size() {
    // 2000 bytes is well past the 1023 usable bytes of the default
    // buffer; the client stops at capacity and never errors.
    let (port, server) = spawn_fixture(|_| vec![b'x'; 2000]);

    let response = session::run(&config(port, Action::Random, "hi")).expect("session succeeds");

    assert_eq!(response.body.len(), 1023);
    assert!(response.body.iter().all(|&b| b == b'x'));
    assert_eq!(response.outcome, ReceiveOutcome::CapacityReached);
    server.join().expect("fixture thread");
}

#[test]
fn refused_connection_fails_before_send() {
    // Bind then drop to get a loopback port that refuses connections.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let err = session::run(&config(port, Action::Uppercase, "hi")).unwrap_err();
    assert!(matches!(err, ClientError::Connection { .. }));
}

#[test]
fn unresolvable_port_fails_resolution() {
    // All-digit but out of range for a port.
    let config = ClientConfig {
        host: "localhost".to_string(),
        port: "99999".to_string(),
        action: Action::Uppercase,
        message: "hi".to_string(),
    };

    let err = session::run(&config).unwrap_err();
    assert!(matches!(err, ClientError::Resolution { .. }));
}
