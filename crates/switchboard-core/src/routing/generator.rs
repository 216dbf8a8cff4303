//! ResponseGenerator -- asks the LLM to answer in a persona's voice.

use std::sync::Arc;

use switchboard_types::intent::Deployment;
use switchboard_types::llm::{LlmError, MeteredUsage, StopReason};

use crate::llm::client::LlmClient;

use super::prompt::reply_prompt;

/// Returned when the LLM call fails or produces nothing.
pub const APOLOGY_REPLY: &str =
    "I apologize, I'm unable to process that request right now. Please try again later.";

/// Returned when no LLM credential is configured.
pub const OFFLINE_REPLY: &str = "I apologize, I am currently offline.";

/// A generated reply and the usage of the call that produced it.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Never empty.
    pub text: String,
    pub usage: Option<MeteredUsage>,
    /// The model hit the token limit; `text` is a prefix of its answer.
    pub truncated: bool,
}

impl Reply {
    fn fallback(text: &str, usage: Option<MeteredUsage>) -> Self {
        Self {
            text: text.to_string(),
            usage,
            truncated: false,
        }
    }
}

/// Builds the reply prompt and issues a single LLM call.
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    deployment: Deployment,
    llm: Arc<LlmClient>,
}

impl ResponseGenerator {
    pub fn new(deployment: Deployment, llm: Arc<LlmClient>) -> Self {
        Self { deployment, llm }
    }

    /// Generate a reply. Never fails and never returns an empty string.
    pub async fn generate(&self, preamble: &str, message: &str, context: &str) -> Reply {
        let prompt = reply_prompt(self.deployment, preamble, context, message);

        match self.llm.prompt(&prompt).await {
            Ok(completion) if !completion.text.trim().is_empty() => {
                let truncated = completion.stop_reason == StopReason::MaxTokens;
                if truncated {
                    tracing::warn!(
                        model = %completion.metered.model,
                        output_tokens = completion.metered.usage.output_tokens,
                        "reply cut off at the token limit"
                    );
                }
                Reply {
                    text: completion.text,
                    usage: Some(completion.metered),
                    truncated,
                }
            }
            Ok(completion) => {
                tracing::warn!(
                    model = %completion.metered.model,
                    stop_reason = %completion.stop_reason,
                    "LLM returned an empty reply"
                );
                Reply::fallback(APOLOGY_REPLY, Some(completion.metered))
            }
            Err(LlmError::NotConfigured) => {
                tracing::warn!("no LLM configured; replying offline");
                Reply::fallback(OFFLINE_REPLY, None)
            }
            Err(e) => {
                tracing::error!(error = %e, "reply generation failed");
                Reply::fallback(APOLOGY_REPLY, None)
            }
        }
    }
}
