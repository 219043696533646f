//! Application state wiring the chat service together.
//!
//! `ChatService` is generic over its repository; `AppState` pins it to the
//! SQLite implementation. The completion provider stays type-erased so tests
//! can hand in a stub.

use std::sync::Arc;

use minibot_core::chat::service::ChatService;
use minibot_core::llm::box_provider::BoxLlmProvider;
use minibot_infra::llm::create_provider;
use minibot_infra::sqlite::chat_record::SqliteChatRecordRepository;
use minibot_infra::sqlite::pool::DatabasePool;
use minibot_types::config::RelayConfig;

pub type ConcreteChatService = ChatService<SqliteChatRecordRepository>;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Open the database (creating the schema if needed) and build the
    /// completion client from `config`.
    pub async fn init(config: &RelayConfig) -> anyhow::Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let db_pool = DatabasePool::new(&config.database_url()).await?;
        tracing::info!(path = %config.database_path.display(), "Database ready");

        Ok(Self::new(db_pool, create_provider(config)))
    }

    /// Wire state from an open pool and any provider.
    pub fn new(db_pool: DatabasePool, provider: BoxLlmProvider) -> Self {
        let repo = SqliteChatRecordRepository::new(db_pool.clone());
        Self {
            chat_service: Arc::new(ChatService::new(repo, provider)),
            db_pool,
        }
    }
}
