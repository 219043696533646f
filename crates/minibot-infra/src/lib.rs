//! Infrastructure layer for Mini Bot.
//!
//! Contains implementations of the traits defined in `minibot-core`:
//! SQLite storage for chat records and the OpenAI-compatible completion
//! client, plus the configuration loader used at startup.

pub mod config;
pub mod llm;
pub mod sqlite;
