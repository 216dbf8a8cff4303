//! LlmClient -- a possibly-absent provider with per-call defaults.
//!
//! Every component that talks to an LLM goes through an `LlmClient`. A
//! client built without a provider (missing API key) answers every prompt
//! with [`LlmError::NotConfigured`], so callers handle "unconfigured" and
//! "failed" through the same `Result` path instead of special-casing startup.

use std::time::Duration;

use switchboard_types::llm::{CompletionRequest, LlmError, MeteredUsage, StopReason};

use super::box_provider::BoxLlmProvider;

/// Default bound on a single provider call.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Text produced by one successful prompt, with its metered usage.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub stop_reason: StopReason,
    pub metered: MeteredUsage,
}

/// An optional LLM provider plus the model, token limit, and timeout to use.
#[derive(Debug)]
pub struct LlmClient {
    provider: Option<BoxLlmProvider>,
    model: String,
    max_tokens: u32,
    temperature: Option<f64>,
    timeout: Duration,
}

impl LlmClient {
    /// Create a client backed by `provider`, defaulting requests to `model`.
    pub fn new(provider: BoxLlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// A client with no provider. Every prompt fails with `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            model: String::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Build from an optional provider (e.g. the result of a key lookup).
    pub fn from_option(provider: Option<BoxLlmProvider>, model: impl Into<String>) -> Self {
        match provider {
            Some(provider) => Self::new(provider, model),
            None => Self::unconfigured(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Name of the backing provider, if any.
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.name())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single user-role prompt and return the completion text.
    ///
    /// Bounded by the client's timeout; an elapsed timer yields
    /// [`LlmError::Timeout`] and the in-flight request is dropped.
    pub async fn prompt(&self, prompt: &str) -> Result<Completion, LlmError> {
        let provider = self.provider.as_ref().ok_or(LlmError::NotConfigured)?;

        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = tokio::time::timeout(self.timeout, provider.complete(&request))
            .await
            .map_err(|_| LlmError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            })??;

        let model = if response.model.is_empty() {
            self.model.clone()
        } else {
            response.model
        };

        Ok(Completion {
            text: response.content,
            stop_reason: response.stop_reason,
            metered: MeteredUsage {
                provider: provider.name().to_string(),
                model,
                usage: response.usage,
            },
        })
    }
}
