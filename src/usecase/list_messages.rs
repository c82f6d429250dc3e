//! UseCase: メッセージ一覧の取得
//!
//! 閲覧者に見えるメッセージを挿入順で返します。可視性ルール：
//! ステータス通知と公開メッセージは全員に、プライベートメッセージは
//! 送信者と宛先にのみ見えます。limit が指定された場合は、可視性で
//! フィルタした後の結果の末尾 limit 件に切り詰めます。

use std::sync::Arc;

use crate::domain::{ChatRepository, Message, RepositoryError};

/// メッセージ一覧取得のユースケース
pub struct ListMessagesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 閲覧者に見えるメッセージの一覧を取得
    ///
    /// # Arguments
    ///
    /// * `for_user` - 閲覧者の識別子（未登録でも構わない。公開分のみ見える）
    /// * `limit` - 指定された場合、フィルタ済み結果の末尾 limit 件を返す
    pub async fn execute(
        &self,
        for_user: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.repository.list_messages().await?;
        let mut visible: Vec<Message> = messages
            .into_iter()
            .filter(|m| m.visible_to(for_user))
            .collect();

        // フィルタ後に末尾を切り出す（切り詰めてからフィルタしない）
        if let Some(limit) = limit {
            let start = visible.len().saturating_sub(limit);
            visible.drain(..start);
        }

        Ok(visible)
    }
}
