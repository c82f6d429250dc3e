//! HTTP API request/response DTOs for the chat room.

use serde::{Deserialize, Serialize};

use crate::domain::Message;

/// Registration request body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterParticipantDto {
    pub name: String,
}

/// Participant entry for the participant list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub name: String,
}

/// Message post request body; sender comes from the `User` header
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageDto {
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Message entry for the message list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String, // "HH:mm:ss"
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            from: message.from.into_string(),
            to: message.to.into_string(),
            text: message.text.into_string(),
            kind: message.kind.as_str().to_string(),
            time: message.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageKind, MessageText, ParticipantName, Recipient};

    #[test]
    fn test_message_dto_from_domain_message() {
        // テスト項目: ドメインの Message から MessageDto へ変換できる
        // given (前提条件):
        let message = Message::new(
            ParticipantName::new("alice".to_string()).unwrap(),
            Recipient::new("bob".to_string()).unwrap(),
            MessageText::new("oi".to_string()).unwrap(),
            MessageKind::PrivateMessage,
            "09:15:00".to_string(),
        );

        // when (操作):
        let dto = MessageDto::from(message);

        // then (期待する結果):
        assert_eq!(dto.from, "alice");
        assert_eq!(dto.to, "bob");
        assert_eq!(dto.text, "oi");
        assert_eq!(dto.kind, "private_message");
        assert_eq!(dto.time, "09:15:00");
    }

    #[test]
    fn test_post_message_dto_accepts_type_field() {
        // テスト項目: リクエストボディの "type" フィールドが kind に対応付けられる
        // given (前提条件):
        let body = r#"{"to":"Todos","text":"hi","type":"message"}"#;

        // when (操作):
        let dto: PostMessageDto = serde_json::from_str(body).unwrap();

        // then (期待する結果):
        assert_eq!(dto.to, "Todos");
        assert_eq!(dto.text, "hi");
        assert_eq!(dto.kind, "message");
    }
}
