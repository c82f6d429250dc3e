//! In-memory storage backend.

pub mod chat;

pub use chat::InMemoryChatRepository;
