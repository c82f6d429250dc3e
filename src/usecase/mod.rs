//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod heartbeat;
pub mod list_messages;
pub mod list_participants;
pub mod post_message;
pub mod register_participant;
pub mod sweep;

pub use error::{HeartbeatError, PostMessageError, RegisterError};
pub use heartbeat::HeartbeatUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::PostMessageUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use sweep::{
    SweepIdleParticipantsUseCase, Sweeper, DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_SWEEP_INTERVAL,
};
