//! UseCase: 参加者登録処理
//!
//! 在室中の参加者と重複しない名前を検証し、Participant の作成・
//! KnownName の記録・入室ステータスメッセージの追記を行います。
//! 参加者の挿入と入室メッセージの追記はトランザクションではありません。
//! 途中でストレージが失敗した場合、入室通知のない参加者が残ることが
//! ありますが、これは許容される縮退状態です。

use std::sync::Arc;

use crate::{
    common::time::{format_clock, now_millis},
    domain::{ChatRepository, KnownName, Message, Participant, ParticipantName},
};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 参加者登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(RegisterError)` - 検証エラー、名前の重複、ストレージ障害
    pub async fn execute(&self, name: String) -> Result<Participant, RegisterError> {
        // 1. 名前の検証（1〜40 文字）
        let name = ParticipantName::new(name)?;

        // 2. 在室中の参加者として挿入（重複チェックはストレージ側で原子的に行う）
        let now = now_millis();
        let participant = Participant::new(name.clone(), now);
        let inserted = self
            .repository
            .insert_participant(participant.clone())
            .await?;
        if !inserted {
            return Err(RegisterError::DuplicateName(name.into_string()));
        }

        // 3. 登録済み名簿に記録（スイープで削除されない永続レコード）
        self.repository
            .record_known_name(KnownName::new(&name))
            .await?;

        // 4. 入室ステータスメッセージを追記
        self.repository
            .append_message(Message::arrival(name, format_clock(now)))
            .await?;

        Ok(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageKind, BROADCAST_RECIPIENT},
        infrastructure::repository::InMemoryChatRepository,
    };

    fn create_test_repository() -> Arc<InMemoryChatRepository> {
        Arc::new(InMemoryChatRepository::new())
    }

    #[tokio::test]
    async fn test_register_participant_success() {
        // テスト項目: 新規参加者を登録でき、入室メッセージが追記される
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = RegisterParticipantUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("alice".to_string()).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let participant = result.unwrap();
        assert_eq!(participant.name.as_str(), "alice");

        // 在室リストに登録されている
        let participants = repository.list_participants().await.unwrap();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].name.as_str(), "alice");

        // 名簿にも記録されている
        assert!(repository.is_known_name("alice").await);

        // 入室ステータスメッセージが 1 件追記されている
        let messages = repository.list_messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].from.as_str(), "alice");
        assert_eq!(messages[0].to.as_str(), BROADCAST_RECIPIENT);
        assert_eq!(messages[0].kind, MessageKind::Status);
    }

    #[tokio::test]
    async fn test_register_participant_duplicate_error() {
        // テスト項目: 在室中の名前での登録は Conflict になり、在室数は変わらない
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = RegisterParticipantUseCase::new(repository.clone());
        usecase.execute("alice".to_string()).await.unwrap();

        // when (操作): 同じ名前で再登録を試みる
        let result = usecase.execute("alice".to_string()).await;

        // then (期待する結果): 重複エラーが返される
        assert_eq!(
            result,
            Err(RegisterError::DuplicateName("alice".to_string()))
        );

        // 在室リストには 1 人だけ、入室メッセージも 1 件だけ
        assert_eq!(repository.list_participants().await.unwrap().len(), 1);
        assert_eq!(repository.list_messages().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_participant_invalid_name() {
        // テスト項目: 長さ制約に違反する名前は検証エラーになる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = RegisterParticipantUseCase::new(repository.clone());

        // when (操作):
        let empty = usecase.execute("".to_string()).await;
        let too_long = usecase.execute("a".repeat(41)).await;

        // then (期待する結果):
        assert!(matches!(empty, Err(RegisterError::Validation(_))));
        assert!(matches!(too_long, Err(RegisterError::Validation(_))));

        // 何も登録されていない
        assert_eq!(repository.list_participants().await.unwrap().len(), 0);
        assert_eq!(repository.list_messages().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_register_after_eviction_creates_new_participant() {
        // テスト項目: 退室済みの名前は再登録でき、新しい Participant になる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = RegisterParticipantUseCase::new(repository.clone());
        let first = usecase.execute("alice".to_string()).await.unwrap();

        // alice がスイープで退室した状況
        repository
            .remove_participant_if_idle("alice", first.last_seen + 1)
            .await
            .unwrap();

        // when (操作): 同じ名前で再登録
        let result = usecase.execute("alice".to_string()).await;

        // then (期待する結果): 新しいインスタンスとして登録される
        assert!(result.is_ok());
        assert_eq!(repository.list_participants().await.unwrap().len(), 1);

        // 名簿のレコードは 1 件のまま（冪等）
        assert_eq!(repository.count_known_names().await, 1);
    }
}
