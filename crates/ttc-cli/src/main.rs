//! ttc - text transform client
//!
//! Sends one framed transform request to the server and prints the reply.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ttc_core::config::{Action, ClientConfig, DEFAULT_HOST, DEFAULT_PORT};
use ttc_core::session;

/// ttc - text transform client
#[derive(Parser, Debug)]
#[command(name = "ttc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Server hostname
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(short, long, default_value = DEFAULT_PORT, value_parser = parse_port)]
    port: String,

    /// Log at trace verbosity
    #[arg(short, long)]
    verbose: bool,

    /// Transform to request: uppercase, lowercase, reverse, shuffle, or random
    #[arg(value_parser = Action::from_str)]
    action: Action,

    /// Message to send to the server
    message: String,
}

/// Validates that the port is all-digit decimal text.
fn parse_port(value: &str) -> Result<String, String> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' is not a valid port"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default error-only filter
    // to trace.
    let filter = if cli.verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::new("error")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ClientConfig {
        host: cli.host,
        port: cli.port,
        action: cli.action,
        message: cli.message,
    };

    let response = session::run(&config)
        .with_context(|| format!("request to {}:{} failed", config.host, config.port))?;

    println!("{}", response.as_text());
    Ok(())
}
