//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する ChatRepository trait の具体的な実装。
//! HashMap / Vec / HashSet をインメモリ DB として使用します。
//!
//! ## 技術的負債
//!
//! 現在、ドメインモデル（`Participant`, `Message`）を直接ストレージとして
//! 使用しています。これは InMemory 実装では許容される妥協ですが、将来
//! ドキュメント DB などの永続バックエンドを実装する際は、以下の変換層が
//! 必要になります：
//!
//! ```text
//! DB Row/JSON → Record (DTO) → ドメインモデル
//! ```

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatRepository, KnownName, Message, Participant, RepositoryError};

/// インメモリ Chat Repository 実装
///
/// 3 つのコレクション（participants / messages / known_names）を
/// それぞれ独立した Mutex で保持します。コレクションをまたぐ
/// トランザクションは提供しません。
#[derive(Default)]
pub struct InMemoryChatRepository {
    /// 在室中の参加者（name → Participant）
    participants: Mutex<HashMap<String, Participant>>,
    /// 挿入順のメッセージログ
    messages: Mutex<Vec<Message>>,
    /// これまでに登録された全ての名前（スイープでも削除されない）
    known_names: Mutex<HashSet<String>>,
}

impl InMemoryChatRepository {
    /// 新しい空の InMemoryChatRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Known-name roster size, for tests and diagnostics.
    pub async fn count_known_names(&self) -> usize {
        self.known_names.lock().await.len()
    }

    /// Whether a name was ever registered, for tests and diagnostics.
    pub async fn is_known_name(&self, name: &str) -> bool {
        self.known_names.lock().await.contains(name)
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn insert_participant(
        &self,
        participant: Participant,
    ) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let name = participant.name.as_str().to_string();
        if participants.contains_key(&name) {
            return Ok(false);
        }
        participants.insert(name, participant);
        Ok(true)
    }

    async fn find_participant(&self, name: &str) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.get(name).cloned())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.values().cloned().collect())
    }

    async fn update_last_seen(&self, name: &str, last_seen: i64) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.get_mut(name) {
            Some(participant) => {
                participant.last_seen = last_seen;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_participant_if_idle(
        &self,
        name: &str,
        cutoff: i64,
    ) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        // Recheck under the lock: a heartbeat that refreshed last_seen
        // after the sweep's snapshot must keep the participant alive.
        match participants.get(name) {
            Some(participant) if participant.last_seen < cutoff => {
                participants.remove(name);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn record_known_name(&self, known: KnownName) -> Result<(), RepositoryError> {
        let mut known_names = self.known_names.lock().await;
        known_names.insert(known.name);
        Ok(())
    }

    async fn append_message(&self, message: Message) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }
}
