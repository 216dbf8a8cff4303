//! Configuration and per-provider defaults for OpenAI-compatible providers.

/// Configuration for an OpenAI-compatible chat provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai", "gemini").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: String,
    /// Default model when a request leaves `model` empty.
    pub model: String,
}

/// Google Gemini through its OpenAI-compatible endpoint.
///
/// Base URL: `https://generativelanguage.googleapis.com/v1beta/openai`
pub fn gemini_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "gemini".into(),
        base_url: "https://generativelanguage.googleapis.com/v1beta/openai".into(),
        api_key: api_key.into(),
        model: model.into(),
    }
}

/// Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key: api_key.into(),
        model: model.into(),
    }
}

/// Base URL: `https://api.mistral.ai/v1`
pub fn mistral_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "mistral".into(),
        base_url: "https://api.mistral.ai/v1".into(),
        api_key: api_key.into(),
        model: model.into(),
    }
}

/// Defaults for a well-known provider name; unknown names get OpenAI's.
pub fn defaults_for(name: &str, api_key: &str, model: &str) -> OpenAiCompatConfig {
    match name {
        "gemini" => gemini_defaults(api_key, model),
        "mistral" => mistral_defaults(api_key, model),
        _ => OpenAiCompatConfig {
            provider_name: name.into(),
            ..openai_defaults(api_key, model)
        },
    }
}
