//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};

use super::value_object::{MessageText, ParticipantName, Recipient};

/// Reserved recipient value meaning "all participants"
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// Status text appended when a participant enters the room
pub const ARRIVAL_TEXT: &str = "entra na sala...";

/// Status text appended when a participant leaves the room
pub const DEPARTURE_TEXT: &str = "sai da sala...";

/// Represents a participant currently present in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique display name
    pub name: ParticipantName,
    /// Unix timestamp (milliseconds) of the last registration, heartbeat
    /// or posted message; the idle sweep evicts on this field
    pub last_seen: i64,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_seen: i64) -> Self {
        Self { name, last_seen }
    }
}

/// Durable record of a name that has ever been registered.
///
/// Distinct from the active participant set: the idle sweep never touches
/// known names, so the collection is a superset of all current and past
/// participant names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnownName {
    pub name: String,
}

impl KnownName {
    /// Record a registered name
    pub fn new(name: &ParticipantName) -> Self {
        Self {
            name: name.as_str().to_string(),
        }
    }
}

/// Kind of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Public message, visible to everyone
    Message,
    /// Private message, visible to sender and recipient only
    PrivateMessage,
    /// System-generated arrival/departure notice, always visible
    Status,
}

impl MessageKind {
    /// Parse the wire representation of a message kind.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "message" => Some(Self::Message),
            "private_message" => Some(Self::PrivateMessage),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Wire representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }
}

/// Represents a chat event in the room log.
///
/// Messages are immutable once created and their insertion order defines
/// the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sender's participant name
    pub from: ParticipantName,
    /// Recipient: broadcast or a specific participant
    pub to: Recipient,
    /// Message body
    pub text: MessageText,
    /// Message kind
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Clock string ("HH:mm:ss") stamped at creation
    pub time: String,
}

impl Message {
    /// Create a new chat message
    pub fn new(
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        time: String,
    ) -> Self {
        Self {
            from,
            to,
            text,
            kind,
            time,
        }
    }

    /// Build the arrival status message emitted on registration.
    pub fn arrival(name: ParticipantName, time: String) -> Self {
        Self {
            from: name,
            to: Recipient::broadcast(),
            // ARRIVAL_TEXT is a compile-time constant within bounds
            text: MessageText::new(ARRIVAL_TEXT.to_string()).expect("arrival text within bounds"),
            kind: MessageKind::Status,
            time,
        }
    }

    /// Build the departure status message emitted by the idle sweep.
    pub fn departure(name: ParticipantName, time: String) -> Self {
        Self {
            from: name,
            to: Recipient::broadcast(),
            text: MessageText::new(DEPARTURE_TEXT.to_string())
                .expect("departure text within bounds"),
            kind: MessageKind::Status,
            time,
        }
    }

    /// Visibility rule of the message log.
    ///
    /// A message is visible to `user` iff it is a status notice, a public
    /// message, or a message the user sent or received.
    pub fn visible_to(&self, user: &str) -> bool {
        matches!(self.kind, MessageKind::Status | MessageKind::Message)
            || self.from.as_str() == user
            || self.to.as_str() == user
    }
}
