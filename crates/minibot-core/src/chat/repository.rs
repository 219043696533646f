//! ChatRecordRepository trait definition.

use minibot_types::chat::{ChatRecord, NewChatRecord};
use minibot_types::error::RepositoryError;

/// Append-only store of chat records keyed by integer id.
///
/// There are deliberately no update or delete operations.
/// Implementations live in minibot-infra (e.g., `SqliteChatRecordRepository`).
pub trait ChatRecordRepository: Send + Sync {
    /// Insert a new record, assigning its id and timestamp.
    fn insert(
        &self,
        record: &NewChatRecord,
    ) -> impl std::future::Future<Output = Result<ChatRecord, RepositoryError>> + Send;

    /// Get a record by id.
    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<ChatRecord>, RepositoryError>> + Send;

    /// List all records for a user, newest first. Empty if the user has none.
    fn list_by_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ChatRecord>, RepositoryError>> + Send;
}
