//! Business logic and repository trait definitions for Mini Bot.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements, plus the `ChatService` that composes them.
//! It depends only on `minibot-types` -- never on `minibot-infra` or any
//! database/IO crate.

pub mod chat;
pub mod llm;
