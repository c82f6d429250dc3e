//! Domain layer for the chat room.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{KnownName, Message, MessageKind, Participant, BROADCAST_RECIPIENT};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::ChatRepository;
pub use value_object::{MessageText, ParticipantName, Recipient};
