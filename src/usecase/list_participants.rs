//! UseCase: 在室参加者一覧の取得
//!
//! 在室中の参加者名のスナップショットを返します。順序は保証されません。

use std::sync::Arc;

use crate::domain::{ChatRepository, ParticipantName, RepositoryError};

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl ListParticipantsUseCase {
    /// 新しい ListParticipantsUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 在室中の参加者名の一覧を取得（名前のみに射影）
    pub async fn execute(&self) -> Result<Vec<ParticipantName>, RepositoryError> {
        let participants = self.repository.list_participants().await?;
        Ok(participants.into_iter().map(|p| p.name).collect())
    }
}
