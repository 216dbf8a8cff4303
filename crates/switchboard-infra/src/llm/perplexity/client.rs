//! PerplexityProvider -- [`LlmProvider`] for Perplexity's search-grounded
//! chat completions (`sonar` models).
//!
//! Used as the primary context source. The API key is wrapped in
//! [`secrecy::SecretString`] and only exposed when building the
//! `Authorization` header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use switchboard_core::llm::provider::LlmProvider;
use switchboard_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use super::types::{PerplexityMessage, PerplexityRequest, PerplexityResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Perplexity search provider. Does NOT derive Debug.
pub struct PerplexityProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl PerplexityProvider {
    /// Create a provider whose HTTP client gives up after `timeout`.
    pub fn new(api_key: SecretString, model: String, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn to_perplexity_request(&self, request: &CompletionRequest) -> PerplexityRequest {
        let messages = vec![PerplexityMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        }];

        PerplexityRequest {
            model: if request.model.is_empty() {
                self.model.clone()
            } else {
                request.model.clone()
            },
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

impl LlmProvider for PerplexityProvider {
    fn name(&self) -> &str {
        "perplexity"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_perplexity_request(request);
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                503 | 529 => LlmError::Overloaded(format!("HTTP {status}: {error_body}")),
                400 => LlmError::InvalidRequest(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let resp: PerplexityResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        tracing::debug!(citations = resp.citations.len(), "perplexity answered");

        let choice = resp.choices.into_iter().next();
        let stop_reason = match choice.as_ref().and_then(|c| c.finish_reason.as_deref()) {
            Some("length") => StopReason::MaxTokens,
            Some("content_filter") => StopReason::ContentFilter,
            _ => StopReason::EndTurn,
        };

        Ok(CompletionResponse {
            content: choice.map(|c| c.message.content).unwrap_or_default(),
            model: resp.model,
            stop_reason,
            usage: resp
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                })
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;

    fn provider(base_url: &str) -> PerplexityProvider {
        PerplexityProvider::new(
            SecretString::from("pplx-test".to_string()),
            "sonar".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
        .with_base_url(base_url)
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: String::new(),
            prompt: "Provide accurate information about: roaming".to_string(),
            max_tokens: 256,
            temperature: None,
        }
    }

    #[test]
    fn test_request_uses_default_model() {
        let p = provider("http://localhost");
        let body = p.to_perplexity_request(&request());
        assert_eq!(body.model, "sonar");
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].role, "user");
        assert_eq!(body.messages[0].content, "Provide accurate information about: roaming");
    }

    #[tokio::test]
    async fn test_success_response_is_parsed() {
        let app = Router::new().route(
            "/chat/completions",
            post(|| async {
                axum::Json(serde_json::json!({
                    "id": "abc",
                    "model": "sonar",
                    "choices": [{
                        "message": {"role": "assistant", "content": "Roaming costs $10/day."},
                        "finish_reason": "stop"
                    }],
                    "usage": {"prompt_tokens": 12, "completion_tokens": 7},
                    "citations": ["https://example.com"]
                }))
            }),
        );
        let base = test_server::spawn(app).await;

        let resp = provider(&base).complete(&request()).await.unwrap();
        assert_eq!(resp.content, "Roaming costs $10/day.");
        assert_eq!(resp.model, "sonar");
        assert_eq!(resp.usage.input_tokens, 12);
        assert_eq!(resp.stop_reason, StopReason::EndTurn);
    }

    #[tokio::test]
    async fn test_length_finish_maps_to_max_tokens() {
        let app = Router::new().route(
            "/chat/completions",
            post(|| async {
                axum::Json(serde_json::json!({
                    "model": "sonar",
                    "choices": [{
                        "message": {"role": "assistant", "content": "Roaming costs"},
                        "finish_reason": "length"
                    }]
                }))
            }),
        );
        let base = test_server::spawn(app).await;

        let resp = provider(&base).complete(&request()).await.unwrap();
        assert_eq!(resp.content, "Roaming costs");
        assert_eq!(resp.stop_reason, StopReason::MaxTokens);
        assert_eq!(resp.usage, Usage::default());
    }

    #[tokio::test]
    async fn test_503_maps_to_overloaded() {
        let app = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        );
        let base = test_server::spawn(app).await;

        let err = provider(&base).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Overloaded(ref body) if body.contains("try later")));
    }

    #[tokio::test]
    async fn test_401_maps_to_auth_failure() {
        let app = Router::new().route(
            "/chat/completions",
            post(|| async { StatusCode::UNAUTHORIZED }),
        );
        let base = test_server::spawn(app).await;

        let err = provider(&base).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_malformed_body_is_deserialization_error() {
        let app = Router::new().route("/chat/completions", post(|| async { "not json" }));
        let base = test_server::spawn(app).await;

        let err = provider(&base).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Deserialization(_)));
    }
}
