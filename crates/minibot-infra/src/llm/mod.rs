//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `minibot-core`, and [`create_provider`], which builds it
//! from the relay configuration.
//!
//! [`LlmProvider`]: minibot_core::llm::provider::LlmProvider

pub mod openai_compat;

use minibot_core::llm::box_provider::BoxLlmProvider;
use minibot_types::config::RelayConfig;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] from the relay configuration.
///
/// Never fails: a missing API key yields a client that is rejected by the
/// service on first use, so startup does not depend on the key being set.
pub fn create_provider(config: &RelayConfig) -> BoxLlmProvider {
    if config.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; completion requests will fail until it is");
    }

    let provider = OpenAiCompatibleProvider::new(openai_compat::config::from_relay_config(config));
    tracing::info!(
        model = provider.default_model(),
        base_url = %config.base_url,
        "Completion provider configured"
    );
    BoxLlmProvider::new(provider)
}
