//! Poll-based chat room server library.
//!
//! Participants register a name, post public or private messages, and
//! send heartbeats to stay present; an idle sweep evicts participants
//! that stop polling. Clients read the room by polling, there is no push.

pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
