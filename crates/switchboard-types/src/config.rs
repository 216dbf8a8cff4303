//! Configuration types for Switchboard.
//!
//! `AppConfig` represents the optional `switchboard.toml` that selects the
//! deployment, the provider models and endpoints, timeouts, and pricing
//! overrides. API keys are never part of this file; they come from the
//! environment.

use serde::{Deserialize, Serialize};

use crate::intent::Deployment;

/// Top-level configuration. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which intent taxonomy and persona set to serve.
    #[serde(default)]
    pub deployment: Deployment,

    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound for every outbound provider call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub llm: LlmSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub speech: SpeechSettings,

    /// Pricing overrides for cost estimation per provider/model.
    #[serde(default)]
    pub provider_pricing: Vec<ProviderPricing>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deployment: Deployment::default(),
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            llm: LlmSettings::default(),
            search: SearchSettings::default(),
            speech: SpeechSettings::default(),
            provider_pricing: Vec::new(),
        }
    }
}

/// Base LLM used for classification, fallback context, and replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Well-known OpenAI-compatible provider name ("gemini", "openai", "mistral").
    #[serde(default = "default_llm_provider")]
    pub provider_name: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Override the provider's default base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: Option<f64>,
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.0-flash-lite".to_string()
}

fn default_llm_max_tokens() -> u32 {
    1024
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider_name: default_llm_provider(),
            model: default_llm_model(),
            base_url: None,
            max_tokens: default_llm_max_tokens(),
            temperature: None,
        }
    }
}

/// Web-search-augmented provider used as the primary context source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_model")]
    pub model: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_search_model() -> String {
    "sonar".to_string()
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            model: default_search_model(),
            base_url: None,
        }
    }
}

/// Text-to-speech provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Voice identifier ("Rachel" by default).
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default = "default_speech_model")]
    pub model_id: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_voice_id() -> String {
    "21m00Tcm4TlvDq8N6nzt".to_string()
}

fn default_speech_model() -> String {
    "eleven_monolingual_v1".to_string()
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            voice_id: default_voice_id(),
            model_id: default_speech_model(),
            base_url: None,
        }
    }
}

/// Cost information for a specific provider/model pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderPricing {
    /// Name of the provider (e.g., "gemini", "perplexity").
    pub provider_name: String,
    /// Model name prefix (e.g., "gemini-2.0-flash").
    pub model_pattern: String,
    /// Cost per million input tokens in USD.
    pub input_cost_per_million: f64,
    /// Cost per million output tokens in USD.
    pub output_cost_per_million: f64,
}
