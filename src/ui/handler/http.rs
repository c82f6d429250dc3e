//! HTTP API endpoint handlers.
//!
//! Thin plumbing over the use cases: request parsing, identity
//! extraction from the `User` header, and status-code mapping. All
//! business rules live in the usecase layer.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::{
    infrastructure::dto::http::{
        MessageDto, ParticipantDto, PostMessageDto, RegisterParticipantDto,
    },
    ui::state::AppState,
    usecase::{
        HeartbeatError, HeartbeatUseCase, ListMessagesUseCase, ListParticipantsUseCase,
        PostMessageError, PostMessageUseCase, RegisterError, RegisterParticipantUseCase,
    },
};

/// Query parameters for the message list endpoint
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<usize>,
}

/// Out-of-band requester identity: the `User` header, passed through as
/// an opaque pre-authenticated string.
fn user_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("user")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// POST /participants — register a name in the room
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterParticipantDto>,
) -> Result<StatusCode, StatusCode> {
    let usecase = RegisterParticipantUseCase::new(state.repository.clone());

    match usecase.execute(body.name).await {
        Ok(participant) => {
            tracing::info!("participant '{}' entered the room", participant.name);
            Ok(StatusCode::CREATED)
        }
        Err(RegisterError::Validation(e)) => {
            tracing::warn!("registration rejected: {}", e);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(RegisterError::DuplicateName(name)) => {
            tracing::warn!("registration rejected: '{}' already in the room", name);
            Err(StatusCode::CONFLICT)
        }
        Err(RegisterError::Storage(e)) => {
            tracing::error!("registration failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /participants — active participant names
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, StatusCode> {
    let usecase = ListParticipantsUseCase::new(state.repository.clone());

    match usecase.execute().await {
        Ok(names) => Ok(Json(
            names
                .into_iter()
                .map(|name| ParticipantDto {
                    name: name.into_string(),
                })
                .collect(),
        )),
        Err(e) => {
            tracing::error!("participant list failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /messages — post a public or private message
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<PostMessageDto>,
) -> Result<StatusCode, StatusCode> {
    let Some(sender) = user_header(&headers) else {
        tracing::warn!("message rejected: missing User header");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };

    let usecase = PostMessageUseCase::new(state.repository.clone());

    match usecase.execute(sender, body.to, body.text, body.kind).await {
        Ok(message) => {
            tracing::info!("message from '{}' to '{}' posted", message.from, message.to);
            Ok(StatusCode::CREATED)
        }
        Err(
            e @ (PostMessageError::UnauthorizedSender(_)
            | PostMessageError::InvalidMessageType(_)
            | PostMessageError::Validation(_)),
        ) => {
            tracing::warn!("message rejected: {}", e);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(PostMessageError::Storage(e)) => {
            tracing::error!("message post failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /messages — messages visible to the requester, oldest first
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageDto>>, StatusCode> {
    // Anonymous requesters see public messages only
    let for_user = user_header(&headers).unwrap_or_default();

    // limit must be a positive integer when present
    if query.limit == Some(0) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let usecase = ListMessagesUseCase::new(state.repository.clone());

    match usecase.execute(&for_user, query.limit).await {
        Ok(messages) => Ok(Json(messages.into_iter().map(MessageDto::from).collect())),
        Err(e) => {
            tracing::error!("message list failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /status — heartbeat keeping the requester present
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    // A missing identity can never match an active participant
    let Some(name) = user_header(&headers) else {
        return Err(StatusCode::NOT_FOUND);
    };

    let usecase = HeartbeatUseCase::new(state.repository.clone());

    match usecase.execute(&name).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(HeartbeatError::UnknownParticipant(name)) => {
            tracing::debug!("heartbeat from unknown participant '{}'", name);
            Err(StatusCode::NOT_FOUND)
        }
        Err(HeartbeatError::Storage(e)) => {
            tracing::error!("heartbeat failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
