//! SupportService -- runs one customer message end to end.
//!
//! Classification and the context lookup run concurrently; the persona
//! answers once both are in, and exactly one record is appended to the log.

use std::sync::Arc;

use chrono::Utc;
use switchboard_types::config::ProviderPricing;
use switchboard_types::interaction::{
    InteractionOutcome, InteractionRecord, RECORD_CONTEXT_CHARS, truncate_chars,
};
use tracing::info;
use uuid::Uuid;

use crate::llm::client::LlmClient;
use crate::llm::pricing::estimate_interaction_cost;
use crate::routing::classifier::IntentClassifier;
use crate::routing::context::ContextProvider;
use crate::routing::persona::PersonaProfile;
use crate::routing::router::PersonaRouter;

use super::log::InteractionLog;

/// Characters of the customer message shown in log events.
const MESSAGE_PREVIEW_CHARS: usize = 50;

#[derive(Debug)]
pub struct SupportService<I> {
    classifier: IntentClassifier<I>,
    context: ContextProvider,
    router: PersonaRouter<I>,
    log: Arc<InteractionLog>,
    pricing: Vec<ProviderPricing>,
}

impl<I: PersonaProfile> SupportService<I> {
    /// Wire the pipeline for taxonomy `I`.
    ///
    /// `llm` serves classification, replies and the context fallback;
    /// `search` is the primary context source. Either may be unconfigured.
    pub fn new(
        llm: Arc<LlmClient>,
        search: Arc<LlmClient>,
        log: Arc<InteractionLog>,
        pricing: Vec<ProviderPricing>,
    ) -> Self {
        let context = ContextProvider::new(I::DEPLOYMENT, search, llm.clone());
        Self {
            classifier: IntentClassifier::new(llm.clone()),
            router: PersonaRouter::new(llm, context.clone()),
            context,
            log,
            pricing,
        }
    }

    pub fn log(&self) -> &Arc<InteractionLog> {
        &self.log
    }

    pub fn router(&self) -> &PersonaRouter<I> {
        &self.router
    }

    pub async fn handle(&self, customer_id: &str, message: &str) -> InteractionOutcome {
        info!(
            customer_id,
            preview = %truncate_chars(message, MESSAGE_PREVIEW_CHARS),
            "received customer message"
        );

        let (classification, snippet) = tokio::join!(
            self.classifier.classify_metered(message),
            self.context.fetch(message),
        );
        info!(intent = %classification.label, "classified message");
        info!(source = %snippet.source, chars = snippet.text.chars().count(), "context ready");

        let routed = self
            .router
            .route_with_context(classification.label, message, &snippet.text)
            .await;
        info!(
            persona = routed.persona_name,
            truncated = routed.truncated,
            "persona replied"
        );

        let metered: Vec<_> = classification
            .usage
            .into_iter()
            .chain(snippet.usage)
            .chain(routed.usage)
            .collect();
        let cost_estimate = estimate_interaction_cost(&metered, &self.pricing);

        let record = InteractionRecord {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            customer_id: customer_id.to_string(),
            customer_message: message.to_string(),
            agent_type: classification.label.as_str().to_string(),
            agent_name: routed.persona_name.to_string(),
            response: routed.response,
            context: truncate_chars(&snippet.text, RECORD_CONTEXT_CHARS).to_string(),
            cost_estimate,
        };
        let outcome = InteractionOutcome::from(&record);
        self.log.record(record);
        outcome
    }
}
