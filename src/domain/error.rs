//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("participant name cannot be empty")]
    NameEmpty,

    /// ParticipantName too long error
    #[error("participant name cannot exceed {max} characters (got {actual})")]
    NameTooLong { max: usize, actual: usize },

    /// Recipient validation error
    #[error("recipient cannot be empty")]
    RecipientEmpty,

    /// Recipient too long error
    #[error("recipient cannot exceed {max} characters (got {actual})")]
    RecipientTooLong { max: usize, actual: usize },

    /// MessageText validation error
    #[error("message text cannot be empty")]
    TextEmpty,

    /// MessageText too long error
    #[error("message text cannot exceed {max} characters (got {actual})")]
    TextTooLong { max: usize, actual: usize },
}

/// Errors surfaced by the storage gateway.
///
/// The in-memory backend never fails, but the trait keeps the storage
/// outcome explicit so that a durable backend can report transient
/// unavailability without changing any caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Storage backend unreachable or timed out
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
