//! Shared domain types for Mini Bot.
//!
//! This crate contains the types used across the relay: the persisted
//! `ChatRecord`, LLM request/response shapes, configuration, and the
//! error enums shared by the core and infrastructure layers.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
