//! Poll-based chat room server.
//!
//! Registers participants, stores public and private messages, and
//! evicts participants that stop sending heartbeats.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin sala-server
//! ```

use std::time::Duration;

use clap::Parser;

use sala::{logger::setup_logger, ui::ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "sala-server", about = "Poll-based chat room server")]
struct Args {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Inactivity timeout before a participant is evicted (milliseconds)
    #[arg(long, default_value_t = 10_000)]
    idle_timeout_ms: i64,

    /// Seconds between idle sweep passes
    #[arg(long, default_value_t = 15)]
    sweep_interval_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        idle_timeout_ms: args.idle_timeout_ms,
        sweep_interval: Duration::from_secs(args.sweep_interval_secs),
    };

    // Run the server
    if let Err(e) = sala::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
