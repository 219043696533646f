//! Chat service relaying user messages to the completion provider.
//!
//! `ChatService::relay` is a two-phase operation without compensation:
//! the completion call runs first and the exchange is persisted only after
//! it succeeds. The two phases are not transactional. If the insert fails
//! after a successful completion, the generated reply is dropped and the
//! caller sees a storage error; if the process dies in between, the exchange
//! is lost. Persistence is therefore at-most-once per request.

use minibot_types::chat::{ChatRecord, NewChatRecord};
use minibot_types::error::RepositoryError;
use minibot_types::llm::{CompletionRequest, LlmError, Message};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::chat::repository::ChatRecordRepository;
use crate::llm::box_provider::BoxLlmProvider;

/// System instruction sent ahead of every user message.
pub const SYSTEM_PROMPT: &str = "You are Mini Bot, a helpful AI.";

/// Failure of a relay: either phase can fail independently.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Completion(#[from] LlmError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Relays messages to the LLM and reads back stored exchanges.
///
/// Generic over `ChatRecordRepository` to keep minibot-core free of
/// infrastructure. The provider is type-erased so tests can swap it out.
pub struct ChatService<R: ChatRecordRepository> {
    repo: R,
    provider: BoxLlmProvider,
}

impl<R: ChatRecordRepository> ChatService<R> {
    pub fn new(repo: R, provider: BoxLlmProvider) -> Self {
        Self { repo, provider }
    }

    /// Access the record repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Send `message` to the provider and persist the exchange under `user_id`.
    ///
    /// A missing message is rejected as an invalid completion request before
    /// any network call is made. Nothing is written unless the completion
    /// succeeds.
    #[tracing::instrument(name = "relay", skip(self, message), fields(provider = %self.provider.name()))]
    pub async fn relay(
        &self,
        message: Option<&str>,
        user_id: &str,
    ) -> Result<ChatRecord, RelayError> {
        let message = message
            .ok_or_else(|| LlmError::InvalidRequest("message is required".to_string()))?;

        let request = CompletionRequest {
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(message)],
        };

        let completion = self.provider.complete(&request).await?;
        debug!(
            model = %completion.model,
            stop_reason = %completion.stop_reason,
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "Completion received"
        );

        let new_record = NewChatRecord::new(user_id, message, completion.content);
        match self.repo.insert(&new_record).await {
            Ok(record) => {
                info!(chat_id = record.id, "Chat exchange stored");
                Ok(record)
            }
            Err(e) => {
                warn!(error = %e, "Completion succeeded but the exchange was not persisted");
                Err(e.into())
            }
        }
    }

    /// Get a stored exchange by id.
    pub async fn get_record(&self, id: i64) -> Result<Option<ChatRecord>, RepositoryError> {
        self.repo.get(id).await
    }

    /// A user's exchanges, newest first.
    pub async fn history(&self, user_id: &str) -> Result<Vec<ChatRecord>, RepositoryError> {
        self.repo.list_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use minibot_types::llm::{CompletionResponse, MessageRole, StopReason, Usage};

    use crate::llm::provider::LlmProvider;

    #[derive(Default)]
    struct MemoryRepo {
        records: Mutex<Vec<ChatRecord>>,
        fail_inserts: bool,
    }

    impl ChatRecordRepository for MemoryRepo {
        async fn insert(&self, record: &NewChatRecord) -> Result<ChatRecord, RepositoryError> {
            if self.fail_inserts {
                return Err(RepositoryError::Query("disk I/O error".to_string()));
            }
            let mut records = self.records.lock().unwrap();
            let stored = ChatRecord {
                id: records.len() as i64 + 1,
                user_id: record.user_id.clone(),
                message: record.message.clone(),
                response: record.response.clone(),
                timestamp: Utc::now(),
            };
            records.push(stored.clone());
            Ok(stored)
        }

        async fn get(&self, id: i64) -> Result<Option<ChatRecord>, RepositoryError> {
            let records = self.records.lock().unwrap();
            Ok(records.iter().find(|r| r.id == id).cloned())
        }

        async fn list_by_user(&self, user_id: &str) -> Result<Vec<ChatRecord>, RepositoryError> {
            let records = self.records.lock().unwrap();
            let mut matching: Vec<ChatRecord> = records
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect();
            matching.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));
            Ok(matching)
        }
    }

    /// Replies with a fixed text (or fails) and records what it was sent.
    struct StubProvider {
        reply: Result<String, String>,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<CompletionRequest>>>,
    }

    impl StubProvider {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Arc::default(),
                last_request: Arc::default(),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: Arc::default(),
                last_request: Arc::default(),
            }
        }
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    content: text.clone(),
                    model: "stub-model".to_string(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                }),
                Err(message) => Err(LlmError::Provider {
                    message: message.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn relay_persists_exactly_one_record() {
        let service = ChatService::new(
            MemoryRepo::default(),
            BoxLlmProvider::new(StubProvider::replying("Hi there!")),
        );

        let record = service.relay(Some("Hello"), "u1").await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.message, "Hello");
        assert_eq!(record.response, "Hi there!");

        let stored = service.repo().records.lock().unwrap().clone();
        assert_eq!(stored, vec![record]);
    }

    #[tokio::test]
    async fn relay_sends_system_prompt_then_user_message() {
        let provider = StubProvider::replying("ok");
        let last_request = provider.last_request.clone();
        let service = ChatService::new(MemoryRepo::default(), BoxLlmProvider::new(provider));

        service.relay(Some("What is Rust?"), "u1").await.unwrap();

        let request = last_request.lock().unwrap().clone().unwrap();
        assert_eq!(
            request.messages,
            vec![Message::system(SYSTEM_PROMPT), Message::user("What is Rust?")]
        );
        assert_eq!(request.messages[0].role, MessageRole::System);
    }

    #[tokio::test]
    async fn completion_failure_persists_nothing() {
        let service = ChatService::new(
            MemoryRepo::default(),
            BoxLlmProvider::new(StubProvider::failing("upstream exploded")),
        );

        let err = service.relay(Some("Hello"), "u1").await.unwrap_err();
        assert!(matches!(err, RelayError::Completion(_)));
        assert_eq!(err.to_string(), "provider error: upstream exploded");
        assert!(service.repo().records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_message_never_reaches_provider() {
        let provider = StubProvider::replying("unused");
        let calls = provider.calls.clone();
        let service = ChatService::new(MemoryRepo::default(), BoxLlmProvider::new(provider));

        let err = service.relay(None, "u1").await.unwrap_err();
        assert!(matches!(
            err,
            RelayError::Completion(LlmError::InvalidRequest(_))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(service.repo().records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_after_completion_is_reported() {
        let provider = StubProvider::replying("generated");
        let calls = provider.calls.clone();
        let repo = MemoryRepo {
            fail_inserts: true,
            ..MemoryRepo::default()
        };
        let service = ChatService::new(repo, BoxLlmProvider::new(provider));

        let err = service.relay(Some("Hello"), "u1").await.unwrap_err();
        assert!(matches!(err, RelayError::Storage(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn history_is_newest_first_per_user() {
        let service = ChatService::new(
            MemoryRepo::default(),
            BoxLlmProvider::new(StubProvider::replying("r")),
        );

        let first = service.relay(Some("a1"), "alice").await.unwrap();
        service.relay(Some("b1"), "bob").await.unwrap();
        let second = service.relay(Some("a2"), "alice").await.unwrap();

        let history = service.history("alice").await.unwrap();
        let ids: Vec<i64> = history.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        assert!(service.history("carol").await.unwrap().is_empty());
        assert_eq!(service.get_record(2).await.unwrap().unwrap().user_id, "bob");
        assert!(service.get_record(99).await.unwrap().is_none());
    }
}
