//! LLM provider implementations.
//!
//! Concrete implementations of the [`LlmProvider`] trait defined in
//! `switchboard-core`, plus a provider factory ([`create_provider`]) and the
//! two client builders the service needs: the base chat model and the
//! web-search context source.
//!
//! [`LlmProvider`]: switchboard_core::llm::provider::LlmProvider

pub mod openai_compat;
pub mod perplexity;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use switchboard_core::llm::box_provider::BoxLlmProvider;
use switchboard_core::llm::client::LlmClient;
use switchboard_types::config::AppConfig;
use switchboard_types::llm::{LlmError, ProviderConfig, ProviderType};

use self::openai_compat::OpenAiCompatibleProvider;
use self::perplexity::PerplexityProvider;

/// Create a [`BoxLlmProvider`] from a [`ProviderConfig`].
///
/// Returns [`LlmError::NotConfigured`] when no API key is available.
pub fn create_provider(
    config: &ProviderConfig,
    api_key: Option<&SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    let key = api_key.ok_or(LlmError::NotConfigured)?;

    match config.provider_type {
        ProviderType::OpenAiCompatible => {
            let mut oai_config = openai_compat::config::defaults_for(
                &config.name,
                key.expose_secret(),
                &config.model,
            );
            if let Some(base_url) = config.base_url.as_deref() {
                oai_config.base_url = base_url.to_string();
            }
            Ok(BoxLlmProvider::new(OpenAiCompatibleProvider::new(oai_config)))
        }
        ProviderType::Perplexity => {
            let mut provider = PerplexityProvider::new(
                key.clone(),
                config.model.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            if let Some(base_url) = config.base_url.as_deref() {
                provider = provider.with_base_url(base_url);
            }
            Ok(BoxLlmProvider::new(provider))
        }
    }
}

/// Wrap a factory result in a client, degrading to an unconfigured client.
fn into_client(
    config: &ProviderConfig,
    provider: Result<BoxLlmProvider, LlmError>,
) -> LlmClient {
    match provider {
        Ok(provider) => {
            tracing::info!(provider = %config.name, model = %config.model, "LLM provider ready");
            LlmClient::new(provider, config.model.clone())
        }
        Err(LlmError::NotConfigured) => {
            tracing::warn!(provider = %config.name, "API key not set; provider disabled");
            LlmClient::unconfigured()
        }
        Err(e) => {
            tracing::error!(provider = %config.name, error = %e, "failed to create provider");
            LlmClient::unconfigured()
        }
    }
}

/// The base chat model used for classification, replies, and the context fallback.
pub fn chat_client(config: &AppConfig, api_key: Option<&SecretString>) -> LlmClient {
    let provider_config = ProviderConfig {
        name: config.llm.provider_name.clone(),
        provider_type: ProviderType::OpenAiCompatible,
        base_url: config.llm.base_url.clone(),
        model: config.llm.model.clone(),
        timeout_secs: config.request_timeout_secs,
    };
    into_client(&provider_config, create_provider(&provider_config, api_key))
        .with_max_tokens(config.llm.max_tokens)
        .with_temperature(config.llm.temperature)
        .with_timeout(Duration::from_secs(config.request_timeout_secs))
}

/// The web-search provider used as the primary context source.
pub fn search_client(config: &AppConfig, api_key: Option<&SecretString>) -> LlmClient {
    let provider_config = ProviderConfig {
        name: "perplexity".to_string(),
        provider_type: ProviderType::Perplexity,
        base_url: config.search.base_url.clone(),
        model: config.search.model.clone(),
        timeout_secs: config.request_timeout_secs,
    };
    into_client(&provider_config, create_provider(&provider_config, api_key))
        .with_max_tokens(256)
        .with_timeout(Duration::from_secs(config.request_timeout_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("test-key".to_string())
    }

    fn provider_config(provider_type: ProviderType, name: &str) -> ProviderConfig {
        ProviderConfig {
            name: name.to_string(),
            provider_type,
            base_url: None,
            model: "m".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_create_provider_without_key_is_not_configured() {
        let config = provider_config(ProviderType::OpenAiCompatible, "gemini");
        let result = create_provider(&config, None);
        assert!(matches!(result, Err(LlmError::NotConfigured)));
    }

    #[test]
    fn test_create_provider_gemini() {
        let config = provider_config(ProviderType::OpenAiCompatible, "gemini");
        let provider = create_provider(&config, Some(&key())).unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_create_provider_perplexity() {
        let config = provider_config(ProviderType::Perplexity, "perplexity");
        let provider = create_provider(&config, Some(&key())).unwrap();
        assert_eq!(provider.name(), "perplexity");
    }

    #[test]
    fn test_clients_follow_key_presence() {
        let config = AppConfig::default();
        assert!(!chat_client(&config, None).is_configured());
        assert!(!search_client(&config, None).is_configured());

        let chat = chat_client(&config, Some(&key()));
        assert_eq!(chat.provider_name(), Some("gemini"));
        assert_eq!(chat.model(), "gemini-2.0-flash-lite");
        assert_eq!(search_client(&config, Some(&key())).model(), "sonar");
    }
}
