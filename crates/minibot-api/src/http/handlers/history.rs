//! GET /api/history/{user_id} - A user's exchanges, newest first.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use minibot_core::chat::history::history_title;
use minibot_types::chat::ChatRecord;

use crate::http::error::AppError;
use crate::state::AppState;

/// One row of the history listing.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub user_message: String,
    pub bot_response: String,
}

impl From<ChatRecord> for HistoryEntry {
    fn from(record: ChatRecord) -> Self {
        Self {
            id: record.id,
            title: history_title(&record.message),
            user_message: record.message,
            bot_response: record.response,
        }
    }
}

pub async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let records = state.chat_service.history(&user_id).await?;
    tracing::debug!(%user_id, count = records.len(), "History fetched");
    Ok(Json(records.into_iter().map(HistoryEntry::from).collect()))
}
