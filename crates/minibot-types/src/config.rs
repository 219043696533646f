//! Relay configuration types.
//!
//! `RelayConfig` is deserialized from the optional `minibot.toml` and then
//! overlaid with environment variables by `minibot-infra::config`.
//! Every field has a default, so an empty file is a valid configuration.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// Groq's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Completion model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// SQLite database file used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "minibot.db";

/// Top-level configuration for the relay.
#[derive(Clone, Deserialize)]
pub struct RelayConfig {
    /// API key for the completion service. `None` is allowed: the client is
    /// still built and the first completion fails with an auth error.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            database_path: default_database_path(),
        }
    }
}

impl RelayConfig {
    /// SQLite connection URL for `database_path`, creating the file if missing.
    pub fn database_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.database_path.display())
    }
}

// Hand-written so the API key never reaches logs.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("database_path", &self.database_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_config_default_values() {
        let config = RelayConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.database_path, PathBuf::from("minibot.db"));
    }

    #[test]
    fn test_relay_config_empty_toml_uses_defaults() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_relay_config_partial_toml() {
        let config: RelayConfig = toml::from_str(
            r#"
model = "llama-3.1-8b-instant"
database_path = "/var/lib/minibot/chat.db"
"#,
        )
        .unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.database_url(),
            "sqlite:///var/lib/minibot/chat.db?mode=rwc"
        );
    }

    #[test]
    fn test_relay_config_debug_redacts_api_key() {
        let config = RelayConfig {
            api_key: Some("gsk_supersecret".to_string()),
            ..RelayConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("gsk_supersecret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
