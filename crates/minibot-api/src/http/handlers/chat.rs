//! Chat relay HTTP handlers.
//!
//! Endpoints:
//! - POST /api/chat/      - Relay a message and store the exchange
//! - GET  /api/chat/{id}  - One stored exchange as a two-turn transcript

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use minibot_types::chat::{ChatRecord, DEFAULT_USER_ID};

use crate::http::error::{AppError, ChatError};
use crate::state::AppState;

/// Body of `POST /api/chat/`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
}

/// Successful relay reply.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// One side of a stored exchange.
#[derive(Debug, Serialize)]
pub struct ChatTurn {
    pub sender: &'static str,
    pub text: String,
}

impl ChatTurn {
    /// The user turn followed by the bot turn.
    fn transcript(record: ChatRecord) -> Vec<ChatTurn> {
        vec![
            ChatTurn {
                sender: "user",
                text: record.message,
            },
            ChatTurn {
                sender: "bot",
                text: record.response,
            },
        ]
    }
}

/// POST /api/chat/ - Relay a message to the model and store the exchange.
pub async fn post_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ChatError> {
    let Json(req) = body?;
    let user_id = req.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);

    let record = state
        .chat_service
        .relay(req.message.as_deref(), user_id)
        .await?;

    Ok(Json(ChatReply {
        response: record.response,
    }))
}

/// Parse a path id made only of ASCII digits; signs, whitespace and
/// out-of-range values are rejected.
fn parse_chat_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// GET /api/chat/{id} - Fetch one exchange.
///
/// Ids that are not unsigned integers cannot name a record and are reported
/// as not found.
pub async fn get_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    let id = parse_chat_id(&id).ok_or(AppError::ChatNotFound)?;
    let record = state
        .chat_service
        .get_record(id)
        .await?
        .ok_or(AppError::ChatNotFound)?;

    Ok(Json(ChatTurn::transcript(record)))
}
