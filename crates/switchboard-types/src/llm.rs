//! LLM request/response types for Switchboard.
//!
//! These types model the data shapes for LLM provider interactions:
//! completion requests, responses, usage tracking, and error handling.
//! They are provider-agnostic; wire formats live in `switchboard-infra`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier. Empty means "the provider's configured default".
    pub model: String,
    /// Sent as a single user-role message.
    pub prompt: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response from an LLM provider for a non-streaming completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub stop_reason: StopReason,
    pub usage: Usage,
}

/// Reason why the LLM stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    /// Output was cut off at the request's `max_tokens`.
    MaxTokens,
    ContentFilter,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndTurn => write!(f, "end_turn"),
            StopReason::MaxTokens => write!(f, "max_tokens"),
            StopReason::ContentFilter => write!(f, "content_filter"),
        }
    }
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Usage of one successful provider call, attributed for cost estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteredUsage {
    /// Provider name as reported by the provider (e.g. "gemini", "perplexity").
    pub provider: String,
    /// Model that served the call.
    pub model: String,
    pub usage: Usage,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no provider configured")]
    NotConfigured,

    #[error("provider call timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },
}

/// Type of LLM provider backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible,
    Perplexity,
}

/// Everything needed to construct one concrete provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Human-readable name (e.g., "gemini", "openai", "perplexity").
    pub name: String,
    /// Backend type for this provider.
    pub provider_type: ProviderType,
    /// Override the default base URL for the provider.
    pub base_url: Option<String>,
    /// Model identifier to use.
    pub model: String,
    /// Client-level HTTP timeout in seconds.
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_reason_serde() {
        let json = serde_json::to_string(&StopReason::ContentFilter).unwrap();
        assert_eq!(json, "\"content_filter\"");
        assert_eq!(StopReason::EndTurn.to_string(), "end_turn");
    }

    #[test]
    fn test_usage_default() {
        let usage = Usage::default();
        assert_eq!(usage.input_tokens, 0);
        assert_eq!(usage.output_tokens, 0);
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Timeout { after_ms: 30_000 };
        assert!(err.to_string().contains("30000"));
        assert_eq!(LlmError::NotConfigured.to_string(), "no provider configured");
    }

    #[test]
    fn test_provider_type_serde() {
        let json = serde_json::to_string(&ProviderType::OpenAiCompatible).unwrap();
        assert_eq!(json, "\"openai_compatible\"");
        let parsed: ProviderType = serde_json::from_str("\"perplexity\"").unwrap();
        assert_eq!(parsed, ProviderType::Perplexity);
    }

    #[test]
    fn test_request_omits_missing_temperature() {
        let request = CompletionRequest {
            model: String::new(),
            prompt: "Classify this".to_string(),
            max_tokens: 16,
            temperature: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["prompt"], "Classify this");
    }
}
