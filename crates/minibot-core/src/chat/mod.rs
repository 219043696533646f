//! Chat relay and persistence abstractions for Mini Bot.
//!
//! This module defines the `ChatRecordRepository` trait that the
//! infrastructure layer implements, the `ChatService` that relays a message
//! to the completion provider and stores the exchange, and history helpers.

pub mod history;
pub mod repository;
pub mod service;
