//! ContextProvider -- a short factual snippet about the customer's message.
//!
//! Asks the web-search provider first and falls back to the base LLM once.
//! Never fails: when neither source answers, the snippet is
//! [`CONTEXT_UNAVAILABLE`]. Output is capped at [`MAX_CONTEXT_CHARS`].

use std::fmt;
use std::sync::Arc;

use switchboard_types::intent::Deployment;
use switchboard_types::interaction::truncate_chars;
use switchboard_types::llm::{LlmError, MeteredUsage};

use crate::llm::client::LlmClient;

use super::prompt::context_prompt;

pub const MAX_CONTEXT_CHARS: usize = 500;

pub const CONTEXT_UNAVAILABLE: &str = "Context unavailable.";

/// Where a snippet came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    Search,
    Llm,
    Unavailable,
}

impl fmt::Display for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextSource::Search => write!(f, "search"),
            ContextSource::Llm => write!(f, "llm"),
            ContextSource::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContextSnippet {
    /// At most [`MAX_CONTEXT_CHARS`] characters.
    pub text: String,
    pub source: ContextSource,
    /// Every call that returned a completion, including empty ones.
    pub usage: Vec<MeteredUsage>,
}

#[derive(Debug, Clone)]
pub struct ContextProvider {
    deployment: Deployment,
    search: Arc<LlmClient>,
    llm: Arc<LlmClient>,
}

impl ContextProvider {
    pub fn new(deployment: Deployment, search: Arc<LlmClient>, llm: Arc<LlmClient>) -> Self {
        Self {
            deployment,
            search,
            llm,
        }
    }

    pub async fn get_context(&self, query: &str) -> String {
        self.fetch(query).await.text
    }

    #[tracing::instrument(
        name = "fetch_context",
        skip(self, query),
        fields(deployment = %self.deployment)
    )]
    pub async fn fetch(&self, query: &str) -> ContextSnippet {
        let prompt = context_prompt(self.deployment, query);
        let mut usage = Vec::new();

        for (source, client) in [
            (ContextSource::Search, &self.search),
            (ContextSource::Llm, &self.llm),
        ] {
            match client.prompt(&prompt).await {
                Ok(completion) => {
                    usage.push(completion.metered);
                    let text = completion.text.trim();
                    if !text.is_empty() {
                        return ContextSnippet {
                            text: truncate_chars(text, MAX_CONTEXT_CHARS).to_string(),
                            source,
                            usage,
                        };
                    }
                    tracing::warn!(%source, "context source returned an empty answer");
                }
                Err(LlmError::NotConfigured) => {
                    tracing::debug!(%source, "context source not configured");
                }
                Err(e) => {
                    tracing::warn!(%source, error = %e, "context source failed");
                }
            }
        }

        ContextSnippet {
            text: CONTEXT_UNAVAILABLE.to_string(),
            source: ContextSource::Unavailable,
            usage,
        }
    }
}
