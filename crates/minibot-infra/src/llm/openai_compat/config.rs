//! Configuration for OpenAI-compatible providers.

use secrecy::SecretString;

use minibot_types::config::{DEFAULT_BASE_URL, RelayConfig};

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "groq").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.groq.com/openai/v1").
    pub base_url: String,
    /// API key for authentication. May be empty; the service rejects the
    /// first call in that case.
    pub api_key: SecretString,
    /// Default model identifier.
    pub model: String,
}

/// Build a provider configuration from the relay configuration.
///
/// The provider is named "groq" when pointed at Groq's endpoint and
/// "openai_compatible" otherwise.
pub fn from_relay_config(config: &RelayConfig) -> OpenAiCompatConfig {
    let api_key = SecretString::from(config.api_key.clone().unwrap_or_default());
    let provider_name = if config.base_url == DEFAULT_BASE_URL {
        "groq"
    } else {
        "openai_compatible"
    };

    OpenAiCompatConfig {
        provider_name: provider_name.into(),
        base_url: config.base_url.clone(),
        api_key,
        model: config.model.clone(),
    }
}
