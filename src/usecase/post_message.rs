//! UseCase: メッセージ投稿処理
//!
//! 送信者が在室中であることを確認し、宛先・本文・種別を検証した上で
//! 現在時刻を刻印してメッセージログに追記します。送信者の識別子は
//! トランスポート層で解決済みの不透明な文字列として受け取ります。

use std::sync::Arc;

use crate::{
    common::time::{format_clock, now_millis},
    domain::{ChatRepository, Message, MessageKind, MessageText, Recipient},
};

use super::error::PostMessageError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ投稿を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者の識別子（解決済み、在室チェックのみ行う）
    /// * `to` - 宛先（ブロードキャストまたは参加者名、1〜40 文字）
    /// * `text` - 本文（1〜250 文字）
    /// * `kind` - ワイヤ表現の種別（"message" / "private_message" のみ許可）
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 追記されたメッセージ
    /// * `Err(PostMessageError)` - 未登録の送信者、不正な種別、検証エラー、
    ///   ストレージ障害
    pub async fn execute(
        &self,
        from: String,
        to: String,
        text: String,
        kind: String,
    ) -> Result<Message, PostMessageError> {
        // 1. 送信者の在室チェック（ボディの妥当性より先に判定する）
        let sender = self
            .repository
            .find_participant(&from)
            .await?
            .ok_or(PostMessageError::UnauthorizedSender(from))?;

        // 2. 種別の検証（status はシステム専用なので投稿不可）
        let kind = match MessageKind::parse(&kind) {
            Some(MessageKind::Message) => MessageKind::Message,
            Some(MessageKind::PrivateMessage) => MessageKind::PrivateMessage,
            _ => return Err(PostMessageError::InvalidMessageType(kind)),
        };

        // 3. 宛先・本文の検証
        let to = Recipient::new(to)?;
        let text = MessageText::new(text)?;

        // 4. 現在時刻を刻印して追記
        let now = now_millis();
        let message = Message::new(sender.name.clone(), to, text, kind, format_clock(now));
        self.repository.append_message(message.clone()).await?;

        // 5. 投稿も在室の証なので last_seen を更新する
        self.repository
            .update_last_seen(sender.name.as_str(), now)
            .await?;

        Ok(message)
    }
}
