//! LlmProvider trait definition.
//!
//! This is the core abstraction that all LLM providers implement, both the
//! base chat model and the web-search-augmented answer engine.

use switchboard_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (Gemini, OpenAI, Perplexity, etc.).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Dynamic
/// dispatch goes through [`super::box_provider::BoxLlmProvider`].
///
/// Implementations live in switchboard-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "perplexity").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
