//! Axum router configuration with middleware.
//!
//! Relay routes live under `/api/` behind a permissive CORS layer so any
//! browser origin can call them. `/health` sits outside the nest.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat/", post(handlers::chat::post_chat))
        .route("/chat", post(handlers::chat::post_chat))
        .route("/chat/{id}", get(handlers::chat::get_chat))
        .route("/history/{user_id}", get(handlers::history::get_history))
        .layer(cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
