//! Mock providers shared by the unit tests in this crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use switchboard_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, StopReason, Usage,
};

use crate::llm::box_provider::BoxLlmProvider;
use crate::llm::client::LlmClient;
use crate::llm::provider::LlmProvider;

#[derive(Clone)]
pub(crate) enum MockFailure {
    Provider(String),
    Overloaded,
    Auth,
}

#[derive(Clone)]
enum MockResult {
    Reply(String),
    /// First rule whose needle appears in the prompt wins; otherwise the default.
    ByPrompt(Vec<(String, String)>, String),
    Error(MockFailure),
    Hang,
}

pub(crate) struct MockProvider {
    name: String,
    stop_reason: StopReason,
    result: MockResult,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    fn with_result(name: &str, result: MockResult) -> Self {
        Self {
            name: name.to_string(),
            stop_reason: StopReason::EndTurn,
            result,
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn ok(name: &str, reply: &str) -> Self {
        Self::with_result(name, MockResult::Reply(reply.to_string()))
    }

    pub(crate) fn by_prompt(name: &str, rules: &[(&str, &str)], default: &str) -> Self {
        let rules = rules
            .iter()
            .map(|(needle, reply)| (needle.to_string(), reply.to_string()))
            .collect();
        Self::with_result(name, MockResult::ByPrompt(rules, default.to_string()))
    }

    pub(crate) fn failing(name: &str, failure: MockFailure) -> Self {
        Self::with_result(name, MockResult::Error(failure))
    }

    pub(crate) fn hanging(name: &str) -> Self {
        Self::with_result(name, MockResult::Hang)
    }

    /// Report `stop_reason` on every successful reply.
    pub(crate) fn stopping(mut self, stop_reason: StopReason) -> Self {
        self.stop_reason = stop_reason;
        self
    }

    /// Shared call counter; grab it before the provider is boxed.
    pub(crate) fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    /// Shared log of every prompt received.
    pub(crate) fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }

    fn response(&self, content: String) -> CompletionResponse {
        CompletionResponse {
            content,
            model: format!("{}-model", self.name),
            stop_reason: self.stop_reason,
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
            },
        }
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = request.prompt.clone();
        self.prompts.lock().unwrap().push(prompt.clone());

        match &self.result {
            MockResult::Reply(text) => Ok(self.response(text.clone())),
            MockResult::ByPrompt(rules, default) => {
                let reply = rules
                    .iter()
                    .find(|(needle, _)| prompt.contains(needle.as_str()))
                    .map(|(_, reply)| reply.clone())
                    .unwrap_or_else(|| default.clone());
                Ok(self.response(reply))
            }
            MockResult::Error(failure) => Err(match failure {
                MockFailure::Provider(msg) => LlmError::Provider {
                    message: msg.clone(),
                },
                MockFailure::Overloaded => {
                    LlmError::Overloaded("503 Service Unavailable".to_string())
                }
                MockFailure::Auth => LlmError::AuthenticationFailed,
            }),
            MockResult::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(self.response(String::new()))
            }
        }
    }
}

/// Wrap a mock in a configured client with a short timeout.
pub(crate) fn client(provider: MockProvider) -> Arc<LlmClient> {
    let model = format!("{}-model", provider.name);
    Arc::new(
        LlmClient::new(BoxLlmProvider::new(provider), model)
            .with_timeout(Duration::from_millis(200)),
    )
}

pub(crate) fn unconfigured() -> Arc<LlmClient> {
    Arc::new(LlmClient::unconfigured())
}
