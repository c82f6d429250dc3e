//! Storage gateway trait owned by the domain layer.
//!
//! UseCase 層はこの trait に依存し、具体的なストレージ実装
//! （インフラ層）には直接依存しません（依存性の逆転）。
//!
//! The gateway exposes the three collections of the data model
//! (participants, messages, known names) as plain async operations.
//! There are no cross-collection transactions: registration's dual
//! write (participant insert + arrival message append) is not atomic,
//! and a crash between the two leaves an active participant without an
//! arrival notice. That degraded state is accepted by design of the
//! storage model.

use async_trait::async_trait;

use super::{
    entity::{KnownName, Message, Participant},
    error::RepositoryError,
};

/// Storage gateway for the chat room collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Insert a participant if no active participant holds the name.
    ///
    /// Returns `false` when the name is already active (the insert is
    /// rejected, nothing is overwritten). Check and insert are a single
    /// storage operation so concurrent registrations cannot both win.
    async fn insert_participant(
        &self,
        participant: Participant,
    ) -> Result<bool, RepositoryError>;

    /// Look up an active participant by name.
    async fn find_participant(&self, name: &str) -> Result<Option<Participant>, RepositoryError>;

    /// Snapshot of the active participant set, order-irrelevant.
    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Set a participant's `last_seen`. Returns `false` if the name is
    /// not currently active.
    async fn update_last_seen(&self, name: &str, last_seen: i64) -> Result<bool, RepositoryError>;

    /// Remove a participant only if its stored `last_seen` is still older
    /// than `cutoff` (exclusive). Returns whether a removal happened.
    ///
    /// The recheck makes the idle sweep safe against a heartbeat landing
    /// between the sweep's read and its delete: the fresher `last_seen`
    /// wins and the participant stays.
    async fn remove_participant_if_idle(
        &self,
        name: &str,
        cutoff: i64,
    ) -> Result<bool, RepositoryError>;

    /// Record a name in the durable known-name roster. Idempotent; the
    /// roster is never pruned.
    async fn record_known_name(&self, known: KnownName) -> Result<(), RepositoryError>;

    /// Append a message to the room log. Insertion order is preserved.
    async fn append_message(&self, message: Message) -> Result<(), RepositoryError>;

    /// All messages in insertion order.
    async fn list_messages(&self) -> Result<Vec<Message>, RepositoryError>;
}
