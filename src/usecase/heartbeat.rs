//! UseCase: ハートビート処理
//!
//! 在室中の参加者の last_seen を現在時刻に更新します。
//! アイドルスイープはこのフィールドを見て退室判定を行います。

use std::sync::Arc;

use crate::{common::time::now_millis, domain::ChatRepository};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct HeartbeatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl HeartbeatUseCase {
    /// 新しい HeartbeatUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// ハートビートを実行
    ///
    /// # Arguments
    ///
    /// * `name` - トランスポート層で解決済みの参加者の識別子
    ///
    /// # Returns
    ///
    /// * `Ok(())` - last_seen を更新した
    /// * `Err(HeartbeatError)` - 不在の参加者、またはストレージ障害
    pub async fn execute(&self, name: &str) -> Result<(), HeartbeatError> {
        let updated = self.repository.update_last_seen(name, now_millis()).await?;
        if !updated {
            return Err(HeartbeatError::UnknownParticipant(name.to_string()));
        }
        Ok(())
    }
}
