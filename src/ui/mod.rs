//! HTTP transport layer for the chat room server.

pub mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{router, run_server, ServerConfig};
