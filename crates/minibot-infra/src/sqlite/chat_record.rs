//! SQLite chat record repository implementation.
//!
//! Implements `ChatRecordRepository` from `minibot-core` using sqlx with
//! split read/write pools: raw queries, a private Row struct, inserts on the
//! writer, selects on the reader.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use minibot_core::chat::repository::ChatRecordRepository;
use minibot_types::chat::{ChatRecord, NewChatRecord};
use minibot_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRecordRepository`.
pub struct SqliteChatRecordRepository {
    pool: DatabasePool,
}

impl SqliteChatRecordRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

struct ChatRecordRow {
    id: i64,
    user_id: String,
    message: String,
    response: String,
    timestamp: String,
}

impl ChatRecordRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            message: row.try_get("message")?,
            response: row.try_get("response")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_record(self) -> Result<ChatRecord, RepositoryError> {
        Ok(ChatRecord {
            id: self.id,
            user_id: self.user_id,
            message: self.message,
            response: self.response,
            timestamp: parse_datetime(&self.timestamp)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

/// Fixed-width RFC 3339 so that text ordering equals time ordering.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Pool and I/O failures mean the database is unreachable; anything else is
/// a failed statement.
fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            RepositoryError::Connection(e.to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// ChatRecordRepository implementation
// ---------------------------------------------------------------------------

impl ChatRecordRepository for SqliteChatRecordRepository {
    async fn insert(&self, record: &NewChatRecord) -> Result<ChatRecord, RepositoryError> {
        // Truncated to the stored precision so the returned record equals a re-read.
        let timestamp = Utc::now().trunc_subsecs(6);

        let result = sqlx::query(
            "INSERT INTO chat_history (user_id, message, response, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(&record.user_id)
        .bind(&record.message)
        .bind(&record.response)
        .bind(format_datetime(&timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(ChatRecord {
            id: result.last_insert_rowid(),
            user_id: record.user_id.clone(),
            message: record.message.clone(),
            response: record.response.clone(),
            timestamp,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<ChatRecord>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM chat_history WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        match row {
            Some(row) => {
                let record_row = ChatRecordRow::from_row(&row).map_err(query_error)?;
                Ok(Some(record_row.into_record()?))
            }
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<ChatRecord>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM chat_history WHERE user_id = ? ORDER BY timestamp DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let record_row = ChatRecordRow::from_row(row).map_err(query_error)?;
            records.push(record_row.into_record()?);
        }

        Ok(records)
    }
}
