//! HTTP/REST API layer for Mini Bot.
//!
//! Axum-based REST API at `/api/` with permissive CORS and plain JSON
//! bodies.

pub mod error;
pub mod handlers;
pub mod router;
