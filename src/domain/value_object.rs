//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a participant name (bytes)
pub const MAX_NAME_LEN: usize = 40;

/// Maximum length of a message recipient (bytes)
pub const MAX_RECIPIENT_LEN: usize = 40;

/// Maximum length of a message text (bytes)
pub const MAX_TEXT_LEN: usize = 250;

/// Participant name value object.
///
/// Represents the unique display name a participant registers with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName.
    ///
    /// # Returns
    ///
    /// A Result containing the ParticipantName or an error if the 1–40
    /// length bound is violated
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::NameEmpty);
        }
        let len = name.len();
        if len > MAX_NAME_LEN {
            return Err(ValueObjectError::NameTooLong {
                max: MAX_NAME_LEN,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValueObjectError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message recipient value object.
///
/// Either the reserved broadcast value (`"Todos"`) or a participant name.
/// The recipient is not required to be currently registered: private
/// messages may address a participant that has already left.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipient(String);

impl Recipient {
    /// Create a new Recipient.
    pub fn new(to: String) -> Result<Self, ValueObjectError> {
        if to.is_empty() {
            return Err(ValueObjectError::RecipientEmpty);
        }
        let len = to.len();
        if len > MAX_RECIPIENT_LEN {
            return Err(ValueObjectError::RecipientTooLong {
                max: MAX_RECIPIENT_LEN,
                actual: len,
            });
        }
        Ok(Self(to))
    }

    /// The reserved recipient addressing every participant.
    pub fn broadcast() -> Self {
        Self(super::entity::BROADCAST_RECIPIENT.to_string())
    }

    /// Whether this recipient is the broadcast value.
    pub fn is_broadcast(&self) -> bool {
        self.0 == super::entity::BROADCAST_RECIPIENT
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Recipient {
    type Error = ValueObjectError;

    fn try_from(to: String) -> Result<Self, Self::Error> {
        Self::new(to)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message text value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText.
    ///
    /// # Returns
    ///
    /// A Result containing the MessageText or an error if the 1–250
    /// length bound is violated
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        if text.is_empty() {
            return Err(ValueObjectError::TextEmpty);
        }
        let len = text.len();
        if len > MAX_TEXT_LEN {
            return Err(ValueObjectError::TextTooLong {
                max: MAX_TEXT_LEN,
                actual: len,
            });
        }
        Ok(Self(text))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_name_new_success() {
        // テスト項目: 有効な参加者名を作成できる
        // given (前提条件):
        let name = "alice".to_string();

        // when (操作):
        let result = ParticipantName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_participant_name_new_empty_fails() {
        // テスト項目: 空の参加者名は作成できない
        // when (操作):
        let result = ParticipantName::new("".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::NameEmpty);
    }

    #[test]
    fn test_participant_name_new_too_long_fails() {
        // テスト項目: 41 文字以上の参加者名は作成できない
        // given (前提条件):
        let name = "a".repeat(41);

        // when (操作):
        let result = ParticipantName::new(name);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::NameTooLong {
                max: 40,
                actual: 41
            }
        );
    }

    #[test]
    fn test_participant_name_max_length_ok() {
        // テスト項目: ちょうど 40 文字の参加者名は有効
        // when (操作):
        let result = ParticipantName::new("a".repeat(40));

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_participant_name_equality() {
        // テスト項目: 同じ値を持つ ParticipantName は等価
        // given (前提条件):
        let name1 = ParticipantName::new("alice".to_string()).unwrap();
        let name2 = ParticipantName::new("alice".to_string()).unwrap();
        let name3 = ParticipantName::new("bob".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }

    #[test]
    fn test_recipient_broadcast() {
        // テスト項目: broadcast() は予約された宛先 "Todos" を返す
        // when (操作):
        let recipient = Recipient::broadcast();

        // then (期待する結果):
        assert_eq!(recipient.as_str(), "Todos");
        assert!(recipient.is_broadcast());
    }

    #[test]
    fn test_recipient_specific_participant() {
        // テスト項目: 個別の参加者を宛先にできる
        // when (操作):
        let recipient = Recipient::new("bob".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(recipient.as_str(), "bob");
        assert!(!recipient.is_broadcast());
    }

    #[test]
    fn test_recipient_empty_fails() {
        // テスト項目: 空の宛先は作成できない
        // when (操作):
        let result = Recipient::new("".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::RecipientEmpty);
    }

    #[test]
    fn test_message_text_new_success() {
        // テスト項目: 有効なメッセージ本文を作成できる
        // when (操作):
        let result = MessageText::new("Hello, world!".to_string());

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Hello, world!");
    }

    #[test]
    fn test_message_text_new_empty_fails() {
        // テスト項目: 空のメッセージ本文は作成できない
        // when (操作):
        let result = MessageText::new("".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::TextEmpty);
    }

    #[test]
    fn test_message_text_new_too_long_fails() {
        // テスト項目: 251 文字以上のメッセージ本文は作成できない
        // given (前提条件):
        let text = "a".repeat(251);

        // when (操作):
        let result = MessageText::new(text);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::TextTooLong {
                max: 250,
                actual: 251
            }
        );
    }
}
