//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! Read routes answer failures with `{"error": "..."}`. The chat route keeps
//! its success key and answers `{"response": "Mini Bot Error: ..."}` instead,
//! via [`ChatError`]. Both expose the underlying error text to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use minibot_core::chat::service::RelayError;
use minibot_types::error::RepositoryError;
use minibot_types::llm::LlmError;

/// Prefix of every chat failure message.
pub const CHAT_ERROR_PREFIX: &str = "Mini Bot Error: ";

/// Message returned for an unknown chat id.
pub const CHAT_NOT_FOUND: &str = "Chat not found";

/// Application-level error, one variant per failure kind.
#[derive(Debug)]
pub enum AppError {
    /// Request body could not be read as the expected JSON shape.
    InvalidInput(String),
    /// The completion service call failed.
    Completion(LlmError),
    /// Reading or writing the chat store failed.
    Storage(RepositoryError),
    /// No chat with the requested id.
    ChatNotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ChatNotFound => StatusCode::NOT_FOUND,
            // Malformed input is reported as a server error, like every
            // other failure of the chat route.
            AppError::InvalidInput(_) | AppError::Completion(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Completion(e) => e.to_string(),
            AppError::Storage(e) => e.to_string(),
            AppError::ChatNotFound => CHAT_NOT_FOUND.to_string(),
        }
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::Completion(e) => AppError::Completion(e),
            RelayError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Storage(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.message(), "Request failed");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Failure of `POST /api/chat/`, rendered under the `response` key.
#[derive(Debug)]
pub struct ChatError(pub AppError);

impl From<RelayError> for ChatError {
    fn from(e: RelayError) -> Self {
        ChatError(e.into())
    }
}

impl From<JsonRejection> for ChatError {
    fn from(rejection: JsonRejection) -> Self {
        ChatError(rejection.into())
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.message();
        tracing::error!(error = %message, "Chat relay failed");
        (
            status,
            Json(json!({ "response": format!("{CHAT_ERROR_PREFIX}{message}") })),
        )
            .into_response()
    }
}
