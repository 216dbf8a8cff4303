//! Perplexity chat completions wire types.
//!
//! Perplexity speaks a superset of the OpenAI chat format; only the fields
//! this client reads are modelled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct PerplexityRequest {
    pub model: String,
    pub messages: Vec<PerplexityMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerplexityMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerplexityResponse {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<PerplexityChoice>,
    pub usage: Option<PerplexityUsage>,
    /// Source URLs backing the answer.
    #[serde(default)]
    pub citations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerplexityChoice {
    pub message: PerplexityMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerplexityUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}
