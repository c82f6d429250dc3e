//! UseCase: アイドル参加者のスイープ処理
//!
//! last_seen がタイムアウトより古い参加者を退室させ、退室ステータス
//! メッセージを追記します。参加者ごとに独立して処理し、1 人の失敗が
//! 他の参加者の退室を妨げないようにします（ログに記録して続行）。
//!
//! スイープと heartbeat の競合は「削除時再チェック」方式で解決します：
//! 削除はストレージ側の条件付き削除（`remove_participant_if_idle`）で
//! 行われるため、スナップショット取得後に届いた heartbeat が勝ちます。

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::{
    common::time::{format_clock, now_millis},
    domain::{ChatRepository, Message},
};

/// Default inactivity timeout before a participant is evicted
pub const DEFAULT_IDLE_TIMEOUT_MS: i64 = 10_000;

/// Default interval between sweep passes
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);

/// アイドルスイープのユースケース
pub struct SweepIdleParticipantsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// 退室判定のタイムアウト（ミリ秒）
    timeout_ms: i64,
}

impl SweepIdleParticipantsUseCase {
    /// 新しい SweepIdleParticipantsUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, timeout_ms: i64) -> Self {
        Self {
            repository,
            timeout_ms,
        }
    }

    /// スイープを 1 回実行
    ///
    /// # Arguments
    ///
    /// * `now` - 判定に使う現在時刻（ミリ秒）。テストから注入可能
    ///
    /// # Returns
    ///
    /// 退室させた参加者数
    pub async fn execute(&self, now: i64) -> usize {
        let participants = match self.repository.list_participants().await {
            Ok(participants) => participants,
            Err(e) => {
                tracing::warn!("idle sweep could not read participants: {}", e);
                return 0;
            }
        };

        let cutoff = now - self.timeout_ms;
        let mut evicted = 0;

        for participant in participants {
            // now - last_seen > timeout ⇔ last_seen < cutoff
            if participant.last_seen >= cutoff {
                continue;
            }

            let name = participant.name;
            match self
                .repository
                .remove_participant_if_idle(name.as_str(), cutoff)
                .await
            {
                Ok(true) => {
                    tracing::info!("participant '{}' evicted after idle timeout", name);
                    // 削除済みの参加者の退室通知が追記できない場合、
                    // 通知なしの退室となるがこれは許容される縮退状態
                    if let Err(e) = self
                        .repository
                        .append_message(Message::departure(name.clone(), format_clock(now)))
                        .await
                    {
                        tracing::warn!("departure notice for '{}' was not appended: {}", name, e);
                    }
                    evicted += 1;
                }
                // heartbeat が競合に勝った
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("eviction of '{}' failed, continuing sweep: {}", name, e);
                }
            }
        }

        evicted
    }
}

/// Periodic sweep task owned by the server lifecycle.
///
/// Spawned at service init, aborted at shutdown. The sweep runs on a
/// fixed interval independent of request traffic.
pub struct Sweeper {
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawn the sweep loop.
    pub fn spawn(
        repository: Arc<dyn ChatRepository>,
        interval: Duration,
        timeout_ms: i64,
    ) -> Self {
        let usecase = SweepIdleParticipantsUseCase::new(repository, timeout_ms);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let evicted = usecase.execute(now_millis()).await;
                if evicted > 0 {
                    tracing::debug!("idle sweep evicted {} participant(s)", evicted);
                }
            }
        });
        Self { handle }
    }

    /// Stop the sweep loop.
    pub fn stop(self) {
        self.handle.abort();
        tracing::info!("idle sweeper stopped");
    }
}
