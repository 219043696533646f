//! Relay configuration loader.
//!
//! Resolution order, later wins:
//! 1. Built-in defaults ([`RelayConfig::default`])
//! 2. `minibot.toml` (or the path passed on the command line)
//! 3. Environment variables, including any loaded from `.env`
//!
//! `.env` is loaded separately by [`load_dotenv`], before argument parsing,
//! so it also feeds clap `env` fallbacks and `RUST_LOG`.

use std::path::{Path, PathBuf};

use minibot_types::config::RelayConfig;
use minibot_types::error::ConfigError;

/// Config file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "minibot.toml";

/// API key for the completion service.
pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_MODEL: &str = "MINIBOT_MODEL";
pub const ENV_BASE_URL: &str = "MINIBOT_BASE_URL";
pub const ENV_DATABASE_PATH: &str = "MINIBOT_DATABASE_PATH";

/// Populate the process environment from `.env` in the working directory
/// or one of its parents. Variables already set are left untouched.
///
/// Returns the loaded file, `None` if there is no `.env`, or the parse error
/// of a malformed one. Runs before the subscriber exists, so the caller logs
/// the outcome.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    missing_is_none(dotenvy::dotenv())
}

/// Like [`load_dotenv`], for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    missing_is_none(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn missing_is_none(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Load the relay configuration for this process.
///
/// A missing config file is not an error; an unreadable or malformed one is.
pub async fn load_relay_config(config_path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = load_config_file(&path).await?;

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Read and parse a TOML config file, falling back to defaults if it is absent.
pub async fn load_config_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(RelayConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<RelayConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Overlay environment values onto `config`. Empty values are ignored.
///
/// `lookup` abstracts `std::env::var` so the overlay can be tested without
/// touching the process environment.
pub fn apply_env_overrides<F>(mut config: RelayConfig, lookup: F) -> RelayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(api_key) = get(ENV_API_KEY) {
        config.api_key = Some(api_key);
    }
    if let Some(model) = get(ENV_MODEL) {
        config.model = model;
    }
    if let Some(base_url) = get(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(database_path) = get(ENV_DATABASE_PATH) {
        config.database_path = PathBuf::from(database_path);
    }

    config
}
