//! UseCase layer error definitions.
//!
//! Every outcome is surfaced as a distinct variant; the transport layer
//! decides status codes and retry policy, the use cases never retry.

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Errors returned by participant registration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Name already held by an active participant
    #[error("participant '{0}' is already in the room")]
    DuplicateName(String),

    /// Name violates the 1–40 length bound
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// Storage gateway failure
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Errors returned by the heartbeat operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    /// Heartbeat for a name that is not currently active
    #[error("participant '{0}' is not in the room")]
    UnknownParticipant(String),

    /// Storage gateway failure
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Errors returned by message posting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostMessageError {
    /// Sender is not an active participant
    #[error("sender '{0}' is not in the room")]
    UnauthorizedSender(String),

    /// Type other than "message" / "private_message"
    #[error("invalid message type '{0}'")]
    InvalidMessageType(String),

    /// Recipient or text violates its length bound
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// Storage gateway failure
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
