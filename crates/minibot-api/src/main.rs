//! Mini Bot REST API entry point.
//!
//! Binary name: `minibot`
//!
//! Parses CLI arguments, loads configuration, opens the chat store and
//! serves the relay API until Ctrl+C or SIGTERM.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;

use minibot_infra::config::{load_dotenv, load_relay_config};
use minibot_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::Cli;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing: clap `env` fallbacks and RUST_LOG read the environment.
    let dotenv = load_dotenv();
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    match dotenv {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring malformed .env file"),
    }

    let config = load_relay_config(cli.config.as_deref()).await?;
    tracing::debug!(?config, "Configuration loaded");

    let state = AppState::init(&config).await?;
    let app = http::router::build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Mini Bot API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
